//! Input module
//!
//! Reads the markup document to view from a file or stdin.

pub mod reader;

pub use reader::DocumentReader;
