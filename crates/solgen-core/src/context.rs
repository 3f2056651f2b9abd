//! Resolution context
//!
//! Everything a resolution reads is passed in explicitly: the registry
//! snapshot, the bake engine, the active action and the host system.

use solgen_meta::{OperatingSystem, ProjectRef, Registry};

use crate::bake::{BakeEngine, FieldFilter};
use crate::config::{ConfigAxisIterator, ConfigResolver, Configuration};
use crate::dependency::DependencyCollector;
use crate::Result;

/// Known actions and the operating system each one targets by default.
const BUILTIN_ACTIONS: &[(&str, Option<OperatingSystem>)] = &[
    ("codeblocks", None),
    ("codelite", None),
    ("gmake", None),
    ("vs2005", Some(OperatingSystem::Windows)),
    ("vs2008", Some(OperatingSystem::Windows)),
    ("vs2010", Some(OperatingSystem::Windows)),
    ("vs2012", Some(OperatingSystem::Windows)),
    ("xcode3", Some(OperatingSystem::MacOsX)),
    ("xcode4", Some(OperatingSystem::MacOsX)),
];

/// The output generator a resolution is performed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    os: Option<OperatingSystem>,
}

impl Action {
    /// An action with no default operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            os: None,
        }
    }

    /// Look up a built-in action; unknown names get no default system.
    pub fn builtin(name: &str) -> Self {
        let os = BUILTIN_ACTIONS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .and_then(|(_, os)| *os);
        Self {
            name: name.to_string(),
            os,
        }
    }

    pub fn with_os(mut self, os: OperatingSystem) -> Self {
        self.os = Some(os);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operating system this action targets when nothing else says.
    pub fn os(&self) -> Option<OperatingSystem> {
        self.os
    }

    /// Names of the built-in actions.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_ACTIONS.iter().map(|(name, _)| *name)
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::builtin("gmake")
    }
}

/// Inputs shared by every resolution.
pub struct Context<'a> {
    registry: &'a Registry,
    baker: &'a dyn BakeEngine,
    action: Action,
    host: OperatingSystem,
}

impl<'a> Context<'a> {
    /// Create a context for the running host and the default action.
    pub fn new(registry: &'a Registry, baker: &'a dyn BakeEngine) -> Self {
        Self {
            registry,
            baker,
            action: Action::default(),
            host: OperatingSystem::host(),
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Override the host operating system used as the last fallback.
    pub fn with_host(mut self, host: OperatingSystem) -> Self {
        self.host = host;
        self
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn baker(&self) -> &'a dyn BakeEngine {
        self.baker
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn host(&self) -> OperatingSystem {
        self.host
    }

    /// Resolve one configuration of a project.
    pub fn config(
        &self,
        project: ProjectRef<'a>,
        buildcfg: &str,
        platform: Option<&str>,
        filter: &FieldFilter,
    ) -> Configuration<'a> {
        ConfigResolver::new(self).resolve(project, buildcfg, platform, filter)
    }

    /// Iterate every configuration of a project.
    pub fn each_config(
        &self,
        project: ProjectRef<'a>,
        filter: FieldFilter,
    ) -> ConfigAxisIterator<'_, 'a> {
        ConfigAxisIterator::new(ConfigResolver::new(self), project, filter)
    }

    /// Sibling projects linked from any configuration of `project`.
    pub fn dependencies(&self, project: ProjectRef<'a>) -> Vec<ProjectRef<'a>> {
        DependencyCollector::new(self).dependencies(project)
    }

    /// `project` and everything it links to, dependencies first.
    pub fn dependency_order(&self, project: ProjectRef<'a>) -> Result<Vec<ProjectRef<'a>>> {
        DependencyCollector::new(self).dependency_order(project)
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("solutions", &self.registry.len())
            .field("action", &self.action)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
