//! Document module
//!
//! Holds the parsed markup document: a node tree with element, text, and
//! match-marker nodes. Search works against this tree and rewrites it in
//! place when injecting or removing highlight markers.

mod flatten;
mod node;
mod parser;

pub use flatten::{FlatDoc, FlatLine, FlatRun, MarkerPos, RunKind, flatten};
pub use node::{Document, Node};
