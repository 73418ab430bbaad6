use thiserror::Error;

/// Custom error types for docview
#[derive(Debug, Error)]
pub enum DocviewError {
    #[error("Invalid markup: {0}")]
    InvalidMarkup(String),

    #[error("Content region not found: {0}")]
    RegionNotFound(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
