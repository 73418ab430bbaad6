//! Configuration module
//!
//! Loads settings from `<config-dir>/docview/config.toml`. A missing
//! file means defaults; a file that fails to parse is an error.

mod types;

pub use types::{Config, ViewerConfig};

use std::path::{Path, PathBuf};

use crate::error::DocviewError;

/// Load the user's config, or defaults when no file exists.
pub fn load() -> Result<Config, DocviewError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load config from a specific path, defaults when the file is absent.
pub fn load_from(path: &Path) -> Result<Config, DocviewError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| DocviewError::InvalidConfig(e.to_string()))
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docview").join("config.toml"))
}
