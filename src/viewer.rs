//! Viewer module
//!
//! Renders the document's content region into the main pane, with match
//! markers highlighted and the active marker emphasized.

pub mod viewer_render;
