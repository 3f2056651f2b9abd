//! Command implementations for solgen-cli
//!
//! Every command writes to the given output so it can be exercised without a
//! terminal.

pub mod configs;
pub mod deps;
pub mod files;
pub mod projects;
pub mod tree;

pub use configs::run_configs;
pub use deps::run_deps;
pub use files::run_files;
pub use projects::run_projects;
pub use tree::run_tree;
