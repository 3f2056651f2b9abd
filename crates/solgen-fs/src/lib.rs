//! Path utilities for solgen
//!
//! Provides forward-slash normalized paths with lexical relative-path math,
//! the wildcard pattern compiler used by virtual path rules and configuration
//! filters, and format-agnostic loading of description files.

pub mod error;
pub mod path;
pub mod store;
pub mod wildcard;

pub use error::{Error, Result};
pub use path::{NormalizedPath, strip_leading_dot_segments};
pub use store::ConfigStore;
pub use wildcard::WildcardPattern;
