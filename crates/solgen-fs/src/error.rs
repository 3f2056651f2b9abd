//! Error types for solgen-fs

use std::path::PathBuf;

/// Result type for solgen-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in solgen-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} description at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported description format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Invalid wildcard pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
