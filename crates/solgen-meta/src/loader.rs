//! Loader for declarative solution descriptions
//!
//! A description lists solutions and their projects:
//!
//! ```toml
//! [[solutions]]
//! name = "Game"
//! configurations = ["Debug", "Release"]
//! platforms = ["x86", "x64"]
//!
//! [[solutions.projects]]
//! name = "Engine"
//! files = ["src/engine.cpp", "include/engine.h"]
//!
//! [[solutions.projects.vpaths]]
//! stem = "Headers/*"
//! patterns = ["include/*"]
//!
//! [[solutions.projects.blocks]]
//! terms = ["Debug"]
//! settings = { defines = ["DEBUG"] }
//! ```
//!
//! Relative paths are resolved against the directory holding the description.
//! Loading produces a frozen [`Registry`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use solgen_fs::{ConfigStore, NormalizedPath};

use crate::{
    ConfigBlock, ConfigMapEntry, Project, Registry, Result, Solution, VirtualPathRule,
};

/// Raw description as read from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub solutions: Vec<SolutionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionDef {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub configurations: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
    #[serde(default)]
    pub projects: Vec<ProjectDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDef {
    pub name: String,
    #[serde(default)]
    pub basedir: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    /// Ordered so that later rules override earlier ones deterministically
    #[serde(default)]
    pub vpaths: Vec<VirtualPathDef>,
    #[serde(default)]
    pub configmap: Vec<ConfigMapEntry>,
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualPathDef {
    #[serde(default)]
    pub stem: String,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockDef {
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub settings: Map<String, Value>,
}

impl BlockDef {
    fn compile(&self) -> Result<ConfigBlock> {
        ConfigBlock::new(self.settings.clone())
            .with_terms(&self.terms)?
            .with_files(&self.files)
    }
}

/// Builds a [`Registry`] from description files.
#[derive(Debug, Default)]
pub struct DescriptionLoader {
    store: ConfigStore,
}

impl DescriptionLoader {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
        }
    }

    /// Load a description file (`.toml`, `.json`, `.yaml` or `.yml`).
    pub fn load(&self, path: &NormalizedPath) -> Result<Registry> {
        let description: Description = self.store.load(path)?;
        let native = path.to_native();
        let absolute =
            dunce::canonicalize(&native).map_err(|e| solgen_fs::Error::io(&native, e))?;
        let base_dir = NormalizedPath::new(absolute)
            .parent()
            .unwrap_or_else(|| NormalizedPath::new("."));

        tracing::debug!(%base_dir, "Loading description");
        self.build(&description, &base_dir)
    }

    /// Parse description content without touching the disk.
    ///
    /// `path` only selects the format; relative paths resolve against `base_dir`.
    pub fn parse(
        &self,
        path: &NormalizedPath,
        content: &str,
        base_dir: &NormalizedPath,
    ) -> Result<Registry> {
        let description: Description = self.store.parse(path, content)?;
        self.build(&description, base_dir)
    }

    /// Turn a raw description into a validated registry.
    pub fn build(&self, description: &Description, base_dir: &NormalizedPath) -> Result<Registry> {
        let mut solutions = Vec::with_capacity(description.solutions.len());

        for def in &description.solutions {
            let location = resolve(base_dir, def.location.as_deref());
            let mut solution = Solution::new(&def.name, location)
                .with_configurations(def.configurations.iter().cloned())
                .with_platforms(def.platforms.iter().cloned());

            for block in &def.blocks {
                solution = solution.with_block(block.compile()?);
            }
            for project in &def.projects {
                solution = solution.with_project(build_project(project, base_dir)?);
            }

            tracing::debug!(
                solution = %def.name,
                projects = def.projects.len(),
                "Loaded solution"
            );
            solutions.push(solution);
        }

        Registry::new(solutions)
    }
}

fn build_project(def: &ProjectDef, base_dir: &NormalizedPath) -> Result<Project> {
    let basedir = resolve(base_dir, def.basedir.as_deref());
    let mut project = Project::new(&def.name, basedir).with_files(&def.files);

    if let Some(location) = &def.location {
        project = project.with_location(location.as_str());
    }
    for vpath in &def.vpaths {
        project = project.with_vpath(VirtualPathRule::new(vpath.stem.clone(), &vpath.patterns)?);
    }
    for entry in &def.configmap {
        project = project.with_configmap(entry.clone());
    }
    for block in &def.blocks {
        project = project.with_block(block.compile()?);
    }
    Ok(project)
}

fn resolve(base_dir: &NormalizedPath, path: Option<&str>) -> NormalizedPath {
    match path {
        Some(path) => base_dir.join(path).clean(),
        None => base_dir.clone(),
    }
}
