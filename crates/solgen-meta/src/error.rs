//! Error types for solgen-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] solgen_fs::Error),

    #[error("Unsupported wildcard arrangement in '{pattern}': {reason}")]
    UnsupportedWildcard { pattern: String, reason: String },

    #[error("Duplicate solution: {name}")]
    DuplicateSolution { name: String },

    #[error("Duplicate project '{project}' in solution '{solution}'")]
    DuplicateProject { solution: String, project: String },

    #[error("Project not found: {name}")]
    ProjectNotFound { name: String },

    #[error("Unknown {kind}: {token}")]
    UnknownToken { kind: &'static str, token: String },
}
