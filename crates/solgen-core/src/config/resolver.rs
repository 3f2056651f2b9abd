//! Resolution of a single axis combination
//!
//! The effective operating system is decided before the full bake, in this
//! order (first available wins):
//!
//! 1. a `system` value declared for the axis scope
//! 2. a legacy platform name that is itself a system token (`macosx`)
//! 3. the active action's default system (`vs2010` targets windows)
//! 4. the host operating system
//!
//! The architecture comes from the baked `architecture` field, else from a
//! legacy platform name that is an architecture token (`x64`).

use solgen_meta::{Architecture, OperatingSystem, ProjectRef};

use super::Configuration;
use crate::bake::{AxisScope, FieldFilter};
use crate::context::Context;

/// Resolves configurations against a [`Context`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigResolver<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> ConfigResolver<'c, 'a> {
    pub fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    /// Resolve one (build configuration, platform) pair of a project.
    ///
    /// Never fails: the host system is always available as a fallback.
    /// Identical arguments against an unchanged registry give identical
    /// results.
    pub fn resolve(
        &self,
        project: ProjectRef<'a>,
        buildcfg: &str,
        platform: Option<&str>,
        filter: &FieldFilter,
    ) -> Configuration<'a> {
        let platform = platform.filter(|name| !name.is_empty());
        let (mapped_buildcfg, mapped_platform) = project.project().map_config(buildcfg, platform);
        let mapped_platform = mapped_platform.filter(|name| !name.is_empty());

        let legacy_system = mapped_platform.and_then(OperatingSystem::from_token);
        let legacy_architecture = mapped_platform.and_then(Architecture::from_token);

        let action = self.ctx.action();
        let axis = AxisScope::new(mapped_buildcfg, mapped_platform, action.name());

        let baked_system = self
            .ctx
            .baker()
            .bake_system(project, &axis)
            .and_then(|token| parse_baked(&token, OperatingSystem::from_token, "system"));

        let (system, source) = baked_system
            .map(|os| (os, "declared"))
            .or_else(|| legacy_system.map(|os| (os, "platform")))
            .or_else(|| action.os().map(|os| (os, "action")))
            .unwrap_or((self.ctx.host(), "host"));

        tracing::debug!(
            project = project.name(),
            buildcfg,
            platform = platform.unwrap_or(""),
            %system,
            source,
            "Resolved target system"
        );

        let settings = self
            .ctx
            .baker()
            .bake(project, &axis.with_system(system), filter);

        let architecture = settings
            .get_str("architecture")
            .and_then(|token| parse_baked(token, Architecture::from_token, "architecture"))
            .or(legacy_architecture);

        Configuration {
            project,
            buildcfg: buildcfg.to_string(),
            platform: platform.map(str::to_string),
            project_buildcfg: mapped_buildcfg.to_string(),
            project_platform: mapped_platform.map(str::to_string),
            system,
            architecture,
            settings,
        }
    }
}

/// Parse a baked vocabulary token, warning about values outside it.
fn parse_baked<T>(token: &str, parse: impl Fn(&str) -> Option<T>, field: &str) -> Option<T> {
    let parsed = parse(token);
    if parsed.is_none() {
        tracing::warn!(field, token, "Ignoring unrecognized baked value");
    }
    parsed
}
