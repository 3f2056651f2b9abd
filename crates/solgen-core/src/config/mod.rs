//! Per-configuration resolution
//!
//! A [`Configuration`] is produced on demand for one (build configuration,
//! platform) pair of a project and is never stored on the project. It carries
//! everything a generator needs: the axis values it was requested for, the
//! values it was baked with after configuration mapping, the resolved system
//! and architecture, and the baked settings.

mod axis;
mod resolver;

pub use axis::ConfigAxisIterator;
pub use resolver::ConfigResolver;

use solgen_meta::{Architecture, OperatingSystem, ProjectRef, Solution};

use crate::bake::Settings;

/// A fully resolved project configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration<'a> {
    pub(crate) project: ProjectRef<'a>,
    pub(crate) buildcfg: String,
    pub(crate) platform: Option<String>,
    pub(crate) project_buildcfg: String,
    pub(crate) project_platform: Option<String>,
    pub(crate) system: OperatingSystem,
    pub(crate) architecture: Option<Architecture>,
    pub(crate) settings: Settings,
}

impl<'a> Configuration<'a> {
    /// The project this configuration belongs to.
    pub fn project(&self) -> ProjectRef<'a> {
        self.project
    }

    pub fn solution(&self) -> &'a Solution {
        self.project.solution()
    }

    /// Solution-level build configuration name.
    pub fn buildcfg(&self) -> &str {
        &self.buildcfg
    }

    /// Solution-level platform name, if the solution declares platforms.
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// Build configuration name after the project's configuration map.
    pub fn project_buildcfg(&self) -> &str {
        &self.project_buildcfg
    }

    /// Platform name after the project's configuration map.
    pub fn project_platform(&self) -> Option<&str> {
        self.project_platform.as_deref()
    }

    pub fn system(&self) -> OperatingSystem {
        self.system
    }

    pub fn architecture(&self) -> Option<Architecture> {
        self.architecture
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Linked library and project names.
    pub fn links(&self) -> Vec<&str> {
        self.settings.links()
    }

    /// Display name such as `Debug|x64`, or just `Debug` without a platform.
    pub fn name(&self) -> String {
        match &self.platform {
            Some(platform) => format!("{}|{}", self.buildcfg, platform),
            None => self.buildcfg.clone(),
        }
    }
}
