//! Source file placement
//!
//! Every declared file gets a [`FileDescriptor`]: its real path relative to
//! the project location, and the virtual path under which generators display
//! it.

mod enumerate;
mod vpath;

pub use enumerate::{SourceFiles, each_file};
pub use vpath::VirtualPathResolver;

use solgen_fs::NormalizedPath;

/// One declared source file of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub(crate) abspath: NormalizedPath,
    pub(crate) relpath: NormalizedPath,
    pub(crate) vpath: String,
}

impl FileDescriptor {
    /// The cleaned absolute (or basedir-anchored) path as declared.
    pub fn abspath(&self) -> &NormalizedPath {
        &self.abspath
    }

    /// Path relative to the project location.
    pub fn relpath(&self) -> &NormalizedPath {
        &self.relpath
    }

    /// Display path; equals the relative path when no rule applies.
    pub fn vpath(&self) -> &str {
        &self.vpath
    }

    /// The file name component.
    pub fn name(&self) -> &str {
        self.abspath.file_name()
    }
}
