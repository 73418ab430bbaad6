/// A single node in the parsed document tree.
///
/// Text nodes hold decoded text: `&amp;` in the serialized markup is a
/// plain `&` here. Markers wrap exactly one matched substring and only
/// exist between a successful search and the next teardown.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
    Marker {
        text: String,
        active: bool,
    },
}

/// A parsed markup document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Find the first element matching the selector, depth-first.
    ///
    /// `#name` matches an `id` attribute, anything else matches a tag name.
    pub fn find_region(&self, selector: &str) -> Option<&Node> {
        find_in_nodes(&self.children, selector)
    }

    pub fn find_region_mut(&mut self, selector: &str) -> Option<&mut Node> {
        find_in_nodes_mut(&mut self.children, selector)
    }

    /// Drop the active designation from every marker in the document.
    pub fn clear_active(&mut self) {
        for child in &mut self.children {
            child.clear_active();
        }
    }

    /// Serialize the whole document back to markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_markup(&mut out);
        }
        out
    }
}

fn matches_selector(tag: &str, attrs: &[(String, String)], selector: &str) -> bool {
    if let Some(id) = selector.strip_prefix('#') {
        attrs.iter().any(|(k, v)| k == "id" && v == id)
    } else {
        tag.eq_ignore_ascii_case(selector)
    }
}

fn find_in_nodes<'a>(nodes: &'a [Node], selector: &str) -> Option<&'a Node> {
    for node in nodes {
        if let Node::Element { tag, attrs, children } = node {
            if matches_selector(tag, attrs, selector) {
                return Some(node);
            }
            if let Some(found) = find_in_nodes(children, selector) {
                return Some(found);
            }
        }
    }
    None
}

fn find_in_nodes_mut<'a>(nodes: &'a mut [Node], selector: &str) -> Option<&'a mut Node> {
    for node in nodes.iter_mut() {
        let is_match = matches!(
            node,
            Node::Element { tag, attrs, .. } if matches_selector(tag, attrs, selector)
        );
        if is_match {
            return Some(node);
        }
        if let Node::Element { children, .. } = node {
            if let Some(found) = find_in_nodes_mut(children, selector) {
                return Some(found);
            }
        }
    }
    None
}

// Tags that end a display line. Everything else renders inline.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "blockquote", "pre", "ul", "ol", "li",
    "table", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "br", "hr",
];

impl Node {
    pub fn is_block(tag: &str) -> bool {
        BLOCK_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))
    }

    /// Rendered text of this subtree. Block elements contribute a newline.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Marker { text, .. } => out.push_str(text),
            Node::Element { tag, children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
                if Self::is_block(tag) && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
    }

    /// Replace every marker in this subtree with its inner text.
    ///
    /// Callers follow up with [`Node::normalize`] so text runs split by a
    /// previous injection are whole again before re-matching.
    pub fn unwrap_markers(&mut self) {
        if let Node::Element { children, .. } = self {
            for child in children.iter_mut() {
                match child {
                    Node::Marker { text, .. } => *child = Node::Text(std::mem::take(text)),
                    Node::Element { .. } => child.unwrap_markers(),
                    Node::Text(_) => {}
                }
            }
        }
    }

    /// Merge adjacent text children and drop empty ones, recursively.
    pub fn normalize(&mut self) {
        if let Node::Element { children, .. } = self {
            let old = std::mem::take(children);
            for mut node in old {
                match node {
                    Node::Text(text) => {
                        if text.is_empty() {
                            continue;
                        }
                        if let Some(Node::Text(prev)) = children.last_mut() {
                            prev.push_str(&text);
                        } else {
                            children.push(Node::Text(text));
                        }
                    }
                    Node::Element { .. } => {
                        node.normalize();
                        children.push(node);
                    }
                    Node::Marker { .. } => children.push(node),
                }
            }
        }
    }

    /// Number of markers in this subtree, document order.
    pub fn marker_count(&self) -> usize {
        match self {
            Node::Marker { .. } => 1,
            Node::Text(_) => 0,
            Node::Element { children, .. } => children.iter().map(Node::marker_count).sum(),
        }
    }

    /// Index of the active marker, if any.
    pub fn active_index(&self) -> Option<usize> {
        fn walk(node: &Node, counter: &mut usize) -> Option<usize> {
            match node {
                Node::Marker { active, .. } => {
                    let index = *counter;
                    *counter += 1;
                    if *active { Some(index) } else { None }
                }
                Node::Text(_) => None,
                Node::Element { children, .. } => {
                    children.iter().find_map(|child| walk(child, counter))
                }
            }
        }
        walk(self, &mut 0)
    }

    pub fn clear_active(&mut self) {
        match self {
            Node::Marker { active, .. } => *active = false,
            Node::Text(_) => {}
            Node::Element { children, .. } => {
                for child in children {
                    child.clear_active();
                }
            }
        }
    }

    /// Flag the marker at `index` (document order) as the active one.
    ///
    /// Returns false when no marker has that index. Does not clear other
    /// markers; callers pair this with [`Node::clear_active`].
    pub fn set_active(&mut self, index: usize) -> bool {
        fn walk(node: &mut Node, counter: &mut usize, index: usize) -> bool {
            match node {
                Node::Marker { active, .. } => {
                    if *counter == index {
                        *active = true;
                        return true;
                    }
                    *counter += 1;
                    false
                }
                Node::Text(_) => false,
                Node::Element { children, .. } => children
                    .iter_mut()
                    .any(|child| walk(child, counter, index)),
            }
        }
        walk(self, &mut 0, index)
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Marker { text, active } => {
                if *active {
                    out.push_str("<mark class=\"active\">");
                } else {
                    out.push_str("<mark>");
                }
                out.push_str(&escape_text(text));
                out.push_str("</mark>");
            }
            Node::Element { tag, attrs, children } => {
                out.push('<');
                out.push_str(tag);
                for (key, value) in attrs {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                if children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for child in children {
                        child.write_markup(out);
                    }
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            }
        }
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;
