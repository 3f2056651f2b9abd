//! Solution and project model for solgen.
//!
//! A description declares solutions; each solution owns its build
//! configuration and platform axes plus an ordered list of projects. Once
//! loaded, everything is frozen into a [`Registry`] snapshot that the
//! resolution core reads but never mutates.

pub mod block;
pub mod error;
pub mod loader;
pub mod project;
pub mod registry;
pub mod rules;
pub mod solution;
pub mod vocabulary;

pub use block::{ConfigBlock, Term};
pub use error::{Error, Result};
pub use loader::{Description, DescriptionLoader};
pub use project::{ConfigMapEntry, Project};
pub use registry::{ProjectRef, Registry};
pub use rules::VirtualPathRule;
pub use solution::Solution;
pub use vocabulary::{Architecture, OperatingSystem};
