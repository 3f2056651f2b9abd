//! Virtual path rewriting
//!
//! Rules are matched against the file path relative to the project's base
//! directory, since that is where they were written. A pattern must match at
//! the start of that path. The text from the pattern's first wildcard marker
//! onwards becomes the leaf, which is appended to the rule's stem:
//!
//! ```text
//! stem "Headers/*", pattern "src/**.h"
//! src/include/hello.h  ->  leaf "include/hello.h"  ->  Headers/include/hello.h
//! ```
//!
//! A stem without a wildcard keeps only the file name of the leaf. Every rule
//! and pattern is tried in declaration order and the last match wins, so a
//! broad rule can be refined by narrower ones declared after it.

use solgen_fs::path::{final_component, join_segments};
use solgen_fs::{NormalizedPath, WildcardPattern, strip_leading_dot_segments};
use solgen_meta::{Project, VirtualPathRule};

/// Maps file paths to virtual display paths for one project.
#[derive(Debug, Clone, Copy)]
pub struct VirtualPathResolver<'p> {
    project: &'p Project,
}

impl<'p> VirtualPathResolver<'p> {
    pub fn new(project: &'p Project) -> Self {
        Self { project }
    }

    /// Compute the virtual path of `file`.
    ///
    /// Relative input is taken relative to the project location, the form the
    /// file enumerator produces. When no rule matches, the result is the path
    /// relative to the project location, so absolute input comes back in the
    /// same form. Leading `./` and `../` segments are always stripped.
    pub fn resolve(&self, file: &str) -> String {
        let given = NormalizedPath::new(file);
        let absolute = if given.is_absolute() {
            given.clean()
        } else {
            self.project.location().join(given.as_str()).clean()
        };
        let relpath = absolute.relative_to(self.project.basedir());
        let relpath = relpath.as_str();

        let mut vpath = self.project.relative(&absolute).as_str().to_string();
        for rule in self.project.vpaths() {
            for pattern in rule.patterns() {
                if pattern.is_prefix_match(relpath) {
                    vpath = rewrite(rule, pattern, relpath);
                    tracing::trace!(file, pattern = %pattern, %vpath, "Virtual path rule matched");
                }
            }
        }

        strip_leading_dot_segments(&vpath).to_string()
    }
}

/// Apply one matching rule pattern to a basedir-relative path.
fn rewrite(rule: &VirtualPathRule, pattern: &WildcardPattern, relpath: &str) -> String {
    let name = final_component(relpath);
    let dir_len = relpath.len() - name.len();
    let marker = pattern.marker_or_len();

    // The marker must fall inside the directory part, or the file name
    // itself would be cut.
    let mut leaf = if marker + 1 < dir_len {
        relpath.get(marker..).unwrap_or(name)
    } else {
        name
    };
    leaf = leaf.strip_prefix('/').unwrap_or(leaf);

    if rule.is_flat() {
        leaf = final_component(leaf);
    }

    join_segments(&rule.stem_prefix(), leaf)
}
