//! Error types for solgen-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from solgen-core
    #[error(transparent)]
    Core(#[from] solgen_core::Error),

    /// Error from solgen-meta
    #[error(transparent)]
    Meta(#[from] solgen_meta::Error),

    /// Error from solgen-fs
    #[error(transparent)]
    Fs(#[from] solgen_fs::Error),

    /// JSON rendering error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
