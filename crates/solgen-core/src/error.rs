//! Error types for solgen-core

/// Result type for solgen-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in solgen-core operations
///
/// Resolution itself never fails: unknown systems fall back to the host and
/// unresolved links are skipped. Errors only come from cycle checks and
/// the layers below.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Project links form a cycle
    #[error("Dependency cycle detected among: {}", .participants.join(", "))]
    DependencyCycle { participants: Vec<String> },

    /// Path error from solgen-fs
    #[error(transparent)]
    Fs(#[from] solgen_fs::Error),

    /// Model error from solgen-meta
    #[error(transparent)]
    Meta(#[from] solgen_meta::Error),
}
