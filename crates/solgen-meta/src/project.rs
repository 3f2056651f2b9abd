//! Project declarations

use serde::{Deserialize, Serialize};
use solgen_fs::NormalizedPath;

use crate::{ConfigBlock, VirtualPathRule};

/// Maps a solution-level configuration pair onto a project-level pair.
///
/// A missing `platform` matches any platform; missing targets keep the
/// original value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMapEntry {
    pub buildcfg: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub to_buildcfg: Option<String>,
    #[serde(default)]
    pub to_platform: Option<String>,
}

impl ConfigMapEntry {
    fn matches(&self, buildcfg: &str, platform: Option<&str>) -> bool {
        if !self.buildcfg.eq_ignore_ascii_case(buildcfg) {
            return false;
        }
        match (&self.platform, platform) {
            (None, _) => true,
            (Some(expected), Some(actual)) => expected.eq_ignore_ascii_case(actual),
            (Some(_), None) => false,
        }
    }
}

/// A single project within a solution.
///
/// Paths are stored normalized. Declared files are made absolute against
/// the base directory (the directory of the description that declared the
/// project) and cleaned, so every file is identified by one canonical string.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    name: String,
    basedir: NormalizedPath,
    location: Option<NormalizedPath>,
    files: Vec<NormalizedPath>,
    vpaths: Vec<VirtualPathRule>,
    configmap: Vec<ConfigMapEntry>,
    blocks: Vec<ConfigBlock>,
}

impl Project {
    pub fn new(name: impl Into<String>, basedir: impl Into<NormalizedPath>) -> Self {
        Self {
            name: name.into(),
            basedir: basedir.into().clean(),
            location: None,
            files: Vec::new(),
            vpaths: Vec::new(),
            configmap: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Override where generated project files are placed.
    ///
    /// A relative location is taken relative to the base directory.
    pub fn with_location(mut self, location: impl Into<NormalizedPath>) -> Self {
        let location = location.into();
        self.location = Some(self.basedir.join(location.as_str()).clean());
        self
    }

    /// Append declared source files, keeping declaration order.
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for file in files {
            let file = self.basedir.join(file.as_ref()).clean();
            self.files.push(file);
        }
        self
    }

    /// Append a virtual path rule. Rules are evaluated in declaration order.
    pub fn with_vpath(mut self, rule: VirtualPathRule) -> Self {
        self.vpaths.push(rule);
        self
    }

    pub fn with_configmap(mut self, entry: ConfigMapEntry) -> Self {
        self.configmap.push(entry);
        self
    }

    pub fn with_block(mut self, block: ConfigBlock) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `name` refers to this project, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Directory the project was declared in; vpath rules are relative to it.
    pub fn basedir(&self) -> &NormalizedPath {
        &self.basedir
    }

    /// Directory generated files are written to.
    pub fn location(&self) -> &NormalizedPath {
        self.location.as_ref().unwrap_or(&self.basedir)
    }

    pub fn files(&self) -> &[NormalizedPath] {
        &self.files
    }

    pub fn vpaths(&self) -> &[VirtualPathRule] {
        &self.vpaths
    }

    pub fn configmap(&self) -> &[ConfigMapEntry] {
        &self.configmap
    }

    pub fn blocks(&self) -> &[ConfigBlock] {
        &self.blocks
    }

    /// Express `path` relative to the project location.
    pub fn relative(&self, path: &NormalizedPath) -> NormalizedPath {
        path.relative_to(self.location())
    }

    /// Apply the configuration map to a solution-level pair.
    ///
    /// The first matching entry wins; with no match the pair is unchanged.
    pub fn map_config<'a>(
        &'a self,
        buildcfg: &'a str,
        platform: Option<&'a str>,
    ) -> (&'a str, Option<&'a str>) {
        match self
            .configmap
            .iter()
            .find(|entry| entry.matches(buildcfg, platform))
        {
            Some(entry) => (
                entry.to_buildcfg.as_deref().unwrap_or(buildcfg),
                entry.to_platform.as_deref().or(platform),
            ),
            None => (buildcfg, platform),
        }
    }
}
