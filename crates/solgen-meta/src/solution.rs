//! Solution declarations

use solgen_fs::NormalizedPath;

use crate::{ConfigBlock, Project};

/// A solution: the two configuration axes plus the projects built over them.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    name: String,
    location: NormalizedPath,
    configurations: Vec<String>,
    platforms: Vec<String>,
    projects: Vec<Project>,
    blocks: Vec<ConfigBlock>,
}

impl Solution {
    pub fn new(name: impl Into<String>, location: impl Into<NormalizedPath>) -> Self {
        Self {
            name: name.into(),
            location: location.into().clean(),
            configurations: Vec::new(),
            platforms: Vec::new(),
            projects: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn with_configurations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configurations.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_platforms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Add settings shared by every project of the solution.
    pub fn with_block(mut self, block: ConfigBlock) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &NormalizedPath {
        &self.location
    }

    /// Build configuration names, in declaration order.
    pub fn configurations(&self) -> &[String] {
        &self.configurations
    }

    /// Platform names, in declaration order. May be empty.
    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn blocks(&self) -> &[ConfigBlock] {
        &self.blocks
    }

    /// Find a project of this solution by name, ignoring case.
    pub fn find_project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.is_named(name))
    }
}
