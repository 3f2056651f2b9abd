//! Iteration over the configuration axes of a project

use std::iter::FusedIterator;

use solgen_meta::ProjectRef;

use super::{ConfigResolver, Configuration};
use crate::bake::FieldFilter;

/// Lazily resolves every (build configuration, platform) pair of a project.
///
/// Pairs come from the owning solution in row-major order: all platforms of
/// the first build configuration, then all platforms of the next. A solution
/// without platforms visits each build configuration once with no platform.
#[derive(Debug)]
pub struct ConfigAxisIterator<'c, 'a> {
    resolver: ConfigResolver<'c, 'a>,
    project: ProjectRef<'a>,
    filter: FieldFilter,
    buildcfg_index: usize,
    platform_index: usize,
}

impl<'c, 'a> ConfigAxisIterator<'c, 'a> {
    pub fn new(resolver: ConfigResolver<'c, 'a>, project: ProjectRef<'a>, filter: FieldFilter) -> Self {
        Self {
            resolver,
            project,
            filter,
            buildcfg_index: 0,
            platform_index: 0,
        }
    }

    /// Platforms per build configuration; an empty list counts as one.
    fn platform_slots(&self) -> usize {
        self.project.solution().platforms().len().max(1)
    }
}

impl<'a> Iterator for ConfigAxisIterator<'_, 'a> {
    type Item = Configuration<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let solution = self.project.solution();
        let buildcfg = solution.configurations().get(self.buildcfg_index)?;
        let platform = solution
            .platforms()
            .get(self.platform_index)
            .map(String::as_str);

        self.platform_index += 1;
        if self.platform_index >= self.platform_slots() {
            self.platform_index = 0;
            self.buildcfg_index += 1;
        }

        Some(
            self.resolver
                .resolve(self.project, buildcfg, platform, &self.filter),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buildcfgs = self.project.solution().configurations().len();
        let remaining = buildcfgs.saturating_sub(self.buildcfg_index) * self.platform_slots();
        let remaining = remaining.saturating_sub(self.platform_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ConfigAxisIterator<'_, '_> {}

impl FusedIterator for ConfigAxisIterator<'_, '_> {}
