//! Configuration resolution and file placement core for solgen
//!
//! This crate turns the frozen solution model of `solgen-meta` into what
//! project-file generators consume:
//!
//! - **Configuration resolution**: every (build configuration, platform)
//!   pair of a project resolved into a self-describing [`Configuration`]
//! - **Dependency collection**: the union of sibling projects linked from
//!   any configuration, plus cycle-checked build ordering
//! - **File placement**: virtual display paths for source files and the
//!   sorted source tree built from them
//!
//! # Architecture
//!
//! ```text
//!                    solgen-cli
//!                        |
//!                   solgen-core
//!                        |
//!               +--------+--------+
//!               |                 |
//!          solgen-meta        solgen-fs
//! ```
//!
//! Settings are merged by a [`BakeEngine`]; [`BlockBaker`] is the default.
//!
//! # Example
//!
//! ```
//! use solgen_core::{BlockBaker, Context, FieldFilter};
//! use solgen_meta::{OperatingSystem, Project, Registry, Solution};
//!
//! let registry = Registry::new(vec![
//!     Solution::new("Game", ".")
//!         .with_configurations(["Debug", "Release"])
//!         .with_project(Project::new("App", ".").with_files(["src/main.c"])),
//! ])
//! .unwrap();
//!
//! let baker = BlockBaker::new();
//! let ctx = Context::new(&registry, &baker).with_host(OperatingSystem::Linux);
//! let app = registry.find_project("App").unwrap();
//!
//! let systems: Vec<_> = ctx
//!     .each_config(app, FieldFilter::All)
//!     .map(|cfg| cfg.system())
//!     .collect();
//! assert_eq!(systems, vec![OperatingSystem::Linux, OperatingSystem::Linux]);
//! ```

pub mod bake;
pub mod config;
pub mod context;
pub mod dependency;
pub mod error;
pub mod files;
pub mod source_tree;
pub mod tree;

pub use bake::{AxisScope, BakeEngine, BlockBaker, FieldFilter, Settings, SystemScope};
pub use config::{ConfigAxisIterator, ConfigResolver, Configuration};
pub use context::{Action, Context};
pub use dependency::{DependencyCollector, DependencyGraph};
pub use error::{Error, Result};
pub use files::{FileDescriptor, SourceFiles, VirtualPathResolver, each_file};
pub use source_tree::source_tree;
pub use tree::{Tree, TreeNode, TreeVisitor};
