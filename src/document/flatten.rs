//! Flattening of a document subtree into display lines
//!
//! The viewer renders lines of styled runs; scroll-to-match needs the
//! (line, col) position of every marker. Both come from one walk here.

use unicode_width::UnicodeWidthStr;

use super::node::Node;

/// Screen position of one marker in the flattened region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPos {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column position (0-indexed, in display width)
    pub col: u16,
    /// Display width of the marker text
    pub len: u16,
    pub active: bool,
}

/// Styling class of one run of text within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Plain,
    Emphasis,
    Marker { active: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlatRun {
    pub text: String,
    pub kind: RunKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatLine {
    pub runs: Vec<FlatRun>,
}

impl FlatLine {
    pub fn width(&self) -> u16 {
        self.runs.iter().map(|run| run.text.width() as u16).sum()
    }
}

/// A region flattened to renderable lines plus marker positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatDoc {
    pub lines: Vec<FlatLine>,
    pub markers: Vec<MarkerPos>,
}

impl FlatDoc {
    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn max_line_width(&self) -> u16 {
        self.lines.iter().map(FlatLine::width).max().unwrap_or(0)
    }

    pub fn active_marker(&self) -> Option<&MarkerPos> {
        self.markers.iter().find(|m| m.active)
    }
}

struct Flattener {
    lines: Vec<FlatLine>,
    current: FlatLine,
    markers: Vec<MarkerPos>,
    emphasis_depth: u32,
}

/// Flatten a region subtree. The region element itself contributes only
/// its children; block children break lines, inline children do not.
pub fn flatten(region: &Node) -> FlatDoc {
    let mut flattener = Flattener {
        lines: Vec::new(),
        current: FlatLine::default(),
        markers: Vec::new(),
        emphasis_depth: 0,
    };
    if let Node::Element { children, .. } = region {
        for child in children {
            flattener.walk(child);
        }
    } else {
        flattener.walk(region);
    }
    flattener.finish()
}

impl Flattener {
    fn walk(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.push_text(text),
            Node::Marker { text, active } => {
                self.markers.push(MarkerPos {
                    line: self.lines.len() as u32,
                    col: self.current.width(),
                    len: text.width() as u16,
                    active: *active,
                });
                self.current.runs.push(FlatRun {
                    text: text.clone(),
                    kind: RunKind::Marker { active: *active },
                });
            }
            Node::Element { tag, children, .. } => {
                let block = Node::is_block(tag);
                if block {
                    self.break_line(tag.eq_ignore_ascii_case("br"));
                }
                let emphasis = is_emphasis(tag);
                if emphasis {
                    self.emphasis_depth += 1;
                }
                for child in children {
                    self.walk(child);
                }
                if emphasis {
                    self.emphasis_depth -= 1;
                }
                if block {
                    self.break_line(false);
                }
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        let mut first = true;
        for segment in text.split('\n') {
            if !first {
                self.break_line(true);
            }
            first = false;
            if !segment.is_empty() {
                self.current.runs.push(FlatRun {
                    text: segment.to_string(),
                    kind: if self.emphasis_depth > 0 {
                        RunKind::Emphasis
                    } else {
                        RunKind::Plain
                    },
                });
            }
        }
    }

    // Soft breaks (around block elements) only end a non-empty line;
    // forced breaks (br, literal newlines) always do.
    fn break_line(&mut self, forced: bool) {
        if forced || !self.current.runs.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
    }

    fn finish(mut self) -> FlatDoc {
        if !self.current.runs.is_empty() {
            self.lines.push(self.current);
        }
        FlatDoc {
            lines: self.lines,
            markers: self.markers,
        }
    }
}

fn is_emphasis(tag: &str) -> bool {
    matches!(tag.to_ascii_lowercase().as_str(), "b" | "strong" | "i" | "em")
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod flatten_tests;
