//! docview: terminal viewer for markup documents with in-page search
//!
//! Renders a structured-markup document in a scrollable pane, finds all
//! case-insensitive occurrences of a search term within its content
//! region, highlights them, and navigates between matches with the
//! viewport scrolled to the active one.

pub mod app;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod notification;
pub mod scroll;
pub mod search;
pub mod viewer;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;
