use crate::document::Document;
use crate::error::DocviewError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read markup from stdin or a file
pub struct DocumentReader;

impl DocumentReader {
    /// Read markup from stdin or file path
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    ///
    /// # Returns
    /// * `Ok(String)` - Well-formed markup
    /// * `Err(DocviewError)` - If the markup is invalid or an IO error occurs
    pub fn read_markup(path: Option<&Path>) -> Result<String, DocviewError> {
        let markup = match path {
            Some(file_path) => {
                // Read from file
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                // Read from stdin
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        // Validate markup syntax
        Document::parse(&markup)?;

        Ok(markup)
    }

    /// Read and validate markup from a string (used for testing)
    #[cfg(test)]
    pub(crate) fn read_markup_from_string(markup: &str) -> Result<String, DocviewError> {
        Document::parse(markup)?;
        Ok(markup.to_string())
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
