//! Enumeration of a project's declared files

use std::iter::FusedIterator;
use std::slice;

use solgen_fs::NormalizedPath;
use solgen_meta::Project;

use super::{FileDescriptor, VirtualPathResolver};

/// Describe every declared file of `project`, in declaration order.
pub fn each_file(project: &Project) -> SourceFiles<'_> {
    SourceFiles {
        project,
        resolver: VirtualPathResolver::new(project),
        files: project.files().iter(),
    }
}

/// Iterator returned by [`each_file`].
///
/// Descriptors are computed lazily; iterate again by calling [`each_file`]
/// again.
#[derive(Debug, Clone)]
pub struct SourceFiles<'p> {
    project: &'p Project,
    resolver: VirtualPathResolver<'p>,
    files: slice::Iter<'p, NormalizedPath>,
}

impl Iterator for SourceFiles<'_> {
    type Item = FileDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let abspath = self.files.next()?;
        let relpath = self.project.relative(abspath);
        let vpath = self.resolver.resolve(relpath.as_str());

        Some(FileDescriptor {
            abspath: abspath.clone(),
            relpath,
            vpath,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.files.size_hint()
    }
}

impl ExactSizeIterator for SourceFiles<'_> {}

impl FusedIterator for SourceFiles<'_> {}
