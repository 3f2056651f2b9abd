//! Default bake engine over declared configuration blocks

use solgen_meta::ProjectRef;

use super::{AxisScope, BakeEngine, FieldFilter, Settings, SystemScope};

/// Overlays solution blocks, then project blocks, in declaration order.
///
/// A block contributes when all of its terms match the scope tokens and,
/// for file-scoped blocks, when the filter names a matching file.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockBaker;

impl BlockBaker {
    pub fn new() -> Self {
        Self
    }

    fn collect(
        &self,
        project: ProjectRef<'_>,
        tokens: &[&str],
        filename: Option<&str>,
        include: impl Fn(&str) -> bool,
    ) -> Settings {
        let mut settings = Settings::new();
        let blocks = project
            .solution()
            .blocks()
            .iter()
            .chain(project.blocks());

        for block in blocks.filter(|block| block.applies_to(tokens, filename)) {
            for (key, value) in block.settings() {
                if include(key) {
                    settings.merge_field(key, value);
                }
            }
        }
        settings
    }
}

impl BakeEngine for BlockBaker {
    fn bake_system(&self, project: ProjectRef<'_>, scope: &AxisScope<'_>) -> Option<String> {
        self.collect(project, &scope.tokens(), None, |key| key == "system")
            .get_str("system")
            .map(str::to_string)
    }

    fn bake(
        &self,
        project: ProjectRef<'_>,
        scope: &SystemScope<'_>,
        filter: &FieldFilter,
    ) -> Settings {
        self.collect(project, &scope.tokens(), filter.filename(), |key| {
            filter.includes(key)
        })
    }
}
