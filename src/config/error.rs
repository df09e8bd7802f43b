//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON file '{path}' badly formatted: {message}\n...\n{excerpt}\n...")]
    Json {
        path: PathBuf,
        message: String,
        excerpt: String,
    },

    #[error("File '{0}' does not exist")]
    MissingFile(PathBuf),

    #[error("Cannot determine configuration directory (set NUTRIMETRICS_HOME)")]
    NoConfigDir,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
