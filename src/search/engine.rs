//! The search operation itself
//!
//! One call tears down the previous search's markers, finds every
//! case-insensitive occurrence of the term inside the content region,
//! wraps each one in a marker node, and activates the first. Zero
//! matches is a normal outcome, reported as `None` with the document
//! left exactly as it was.

use super::matcher::SearchMatcher;
use super::session::SearchSession;
use crate::document::{Document, Node};

/// Region searched when the caller does not name one.
pub const DEFAULT_REGION: &str = "#live-contents";

/// Search `term` within the region named by `selector` (or the default
/// region) and highlight every occurrence.
///
/// Returns a fresh navigation session when at least one match was found.
/// An empty term, a missing region, or zero matches all return `None`
/// and leave the document untouched.
pub fn search(doc: &mut Document, term: &str, selector: Option<&str>) -> Option<SearchSession> {
    if term.is_empty() {
        return None;
    }
    let selector = selector.unwrap_or(DEFAULT_REGION);

    // Probe an unwrapped copy first: old markers split the text runs
    // they live in, and a failed search must not disturb them.
    let count = {
        let region = doc.find_region(selector)?;
        let mut probe = region.clone();
        probe.unwrap_markers();
        probe.normalize();
        count_matches(&probe, term)
    };
    if count == 0 {
        return None;
    }

    doc.clear_active();
    let region = doc.find_region_mut(selector)?;
    region.unwrap_markers();
    region.normalize();
    let injected = inject_markers(region, term);
    debug_assert_eq!(injected, count);
    region.set_active(0);

    log::debug!("search {:?} in {}: {} matches", term, selector, injected);
    Some(SearchSession::new(injected))
}

fn count_matches(node: &Node, term: &str) -> usize {
    match node {
        Node::Text(text) => SearchMatcher::count_in(text, term),
        Node::Marker { text, .. } => SearchMatcher::count_in(text, term),
        Node::Element { children, .. } => {
            children.iter().map(|child| count_matches(child, term)).sum()
        }
    }
}

/// Walk the region's text runs and wrap each match in a marker node,
/// splitting the runs around the matched ranges. Structural elements are
/// left in place; matches never cross an element boundary.
fn inject_markers(region: &mut Node, term: &str) -> usize {
    let Node::Element { children, .. } = region else {
        return 0;
    };
    inject_into_children(children, term)
}

fn inject_into_children(children: &mut Vec<Node>, term: &str) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < children.len() {
        match &mut children[i] {
            Node::Element { children: kids, .. } => {
                count += inject_into_children(kids, term);
                i += 1;
            }
            Node::Marker { .. } => {
                i += 1;
            }
            Node::Text(text) => {
                let spans = SearchMatcher::find_in(text, term);
                if spans.is_empty() {
                    i += 1;
                    continue;
                }
                let text = text.clone();
                let mut replacement = Vec::with_capacity(spans.len() * 2 + 1);
                let mut cursor = 0;
                for span in &spans {
                    if span.start > cursor {
                        replacement.push(Node::Text(text[cursor..span.start].to_string()));
                    }
                    replacement.push(Node::Marker {
                        text: text[span.start..span.start + span.len].to_string(),
                        active: false,
                    });
                    cursor = span.start + span.len;
                }
                if cursor < text.len() {
                    replacement.push(Node::Text(text[cursor..].to_string()));
                }
                count += spans.len();
                let inserted = replacement.len();
                children.splice(i..=i, replacement);
                i += inserted;
            }
        }
    }
    count
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
