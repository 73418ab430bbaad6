use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::node::{Document, Node};
use crate::error::DocviewError;

impl Document {
    /// Parse well-formed markup into a document tree.
    ///
    /// Entities are decoded here, so text nodes hold rendered text and a
    /// search term of `&` lines up with markup that reads `&amp;`.
    pub fn parse(markup: &str) -> Result<Self, DocviewError> {
        let mut reader = Reader::from_str(markup);
        let mut roots: Vec<Node> = Vec::new();
        // Stack of open elements: (tag, attrs, children collected so far)
        let mut stack: Vec<(String, Vec<(String, String)>, Vec<Node>)> = Vec::new();

        loop {
            match reader.read_event().map_err(invalid)? {
                Event::Start(start) => {
                    let (tag, attrs) = read_tag(&start)?;
                    stack.push((tag, attrs, Vec::new()));
                }
                Event::Empty(start) => {
                    let (tag, attrs) = read_tag(&start)?;
                    push_node(
                        &mut stack,
                        &mut roots,
                        Node::Element { tag, attrs, children: Vec::new() },
                    );
                }
                Event::End(_) => {
                    let (tag, attrs, children) = stack
                        .pop()
                        .ok_or_else(|| DocviewError::InvalidMarkup("unmatched end tag".into()))?;
                    push_node(&mut stack, &mut roots, Node::Element { tag, attrs, children });
                }
                Event::Text(text) => {
                    let decoded = text.unescape().map_err(invalid)?.into_owned();
                    if !decoded.is_empty() {
                        push_node(&mut stack, &mut roots, Node::Text(decoded));
                    }
                }
                Event::CData(data) => {
                    let raw = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    if !raw.is_empty() {
                        push_node(&mut stack, &mut roots, Node::Text(raw));
                    }
                }
                Event::Eof => break,
                // Declarations, comments, PIs, doctypes carry no content
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(DocviewError::InvalidMarkup("unclosed element".into()));
        }
        Ok(Document::new(roots))
    }
}

fn read_tag(start: &BytesStart) -> Result<(String, Vec<(String, String)>), DocviewError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(invalid)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(invalid)?.into_owned();
        attrs.push((key, value));
    }
    Ok((tag, attrs))
}

fn push_node(
    stack: &mut [(String, Vec<(String, String)>, Vec<Node>)],
    roots: &mut Vec<Node>,
    node: Node,
) {
    match stack.last_mut() {
        Some((_, _, children)) => children.push(node),
        None => roots.push(node),
    }
}

fn invalid(err: impl std::fmt::Display) -> DocviewError {
    DocviewError::InvalidMarkup(err.to_string())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
