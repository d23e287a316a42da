//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

use crate::definition::TableError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to write config file at {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render TOML config: {0}")]
    RenderError(#[from] toml::ser::Error),

    #[error("Invalid permission table: {0}")]
    InvalidTable(#[from] TableError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
