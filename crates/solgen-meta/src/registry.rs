//! Immutable snapshot of every loaded solution
//!
//! The registry is built once, after the description has been loaded, and is
//! only read afterwards. Resolution code receives it explicitly instead of
//! reaching for process-wide state, so independent resolutions may run in
//! parallel against the same snapshot.
//!
//! # Example
//!
//! ```
//! use solgen_meta::{Project, Registry, Solution};
//!
//! let registry = Registry::new(vec![
//!     Solution::new("Game", ".")
//!         .with_project(Project::new("Engine", "."))
//!         .with_project(Project::new("Editor", ".")),
//! ])
//! .unwrap();
//!
//! let engine = registry.find_project("engine").unwrap();
//! assert_eq!(engine.name(), "Engine");
//! assert_eq!(engine.solution().name(), "Game");
//! ```

use std::collections::HashSet;
use std::ops::Deref;

use crate::{Error, Project, Result, Solution};

/// Ordered collection of solutions.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    solutions: Vec<Solution>,
}

impl Registry {
    /// Freeze a set of solutions into a registry.
    ///
    /// # Errors
    ///
    /// Solution names must be unique, and project names unique within their
    /// solution, both compared ignoring case.
    pub fn new(solutions: Vec<Solution>) -> Result<Self> {
        let mut solution_names = HashSet::new();
        for solution in &solutions {
            if !solution_names.insert(solution.name().to_lowercase()) {
                return Err(Error::DuplicateSolution {
                    name: solution.name().to_string(),
                });
            }

            let mut project_names = HashSet::new();
            for project in solution.projects() {
                if !project_names.insert(project.name().to_lowercase()) {
                    return Err(Error::DuplicateProject {
                        solution: solution.name().to_string(),
                        project: project.name().to_string(),
                    });
                }
            }
        }

        tracing::debug!(solutions = solutions.len(), "Registry snapshot created");
        Ok(Self { solutions })
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Find a solution by name, ignoring case.
    pub fn find_solution(&self, name: &str) -> Option<&Solution> {
        self.solutions
            .iter()
            .find(|solution| solution.name().eq_ignore_ascii_case(name))
    }

    /// Every project of every solution, in declaration order.
    pub fn projects(&self) -> impl Iterator<Item = ProjectRef<'_>> {
        self.solutions.iter().flat_map(|solution| {
            solution
                .projects()
                .iter()
                .map(move |project| ProjectRef::new(solution, project))
        })
    }

    /// Find a project by name across all solutions, ignoring case.
    ///
    /// Returns the first match in solution declaration order.
    pub fn find_project(&self, name: &str) -> Option<ProjectRef<'_>> {
        self.projects().find(|project| project.is_named(name))
    }

    /// Find a project, preferring the given solution before searching the rest.
    pub fn find_project_near<'a>(
        &'a self,
        solution: &'a Solution,
        name: &str,
    ) -> Option<ProjectRef<'a>> {
        solution
            .find_project(name)
            .map(|project| ProjectRef::new(solution, project))
            .or_else(|| self.find_project(name))
    }

    /// Like [`Registry::find_project`], but a missing project is an error.
    pub fn require_project(&self, name: &str) -> Result<ProjectRef<'_>> {
        self.find_project(name).ok_or_else(|| Error::ProjectNotFound {
            name: name.to_string(),
        })
    }
}

/// A project together with the solution that owns it.
///
/// Equality is identity: two references are equal only when they point at
/// the same project of the same registry.
#[derive(Debug, Clone, Copy)]
pub struct ProjectRef<'a> {
    solution: &'a Solution,
    project: &'a Project,
}

impl<'a> ProjectRef<'a> {
    pub fn new(solution: &'a Solution, project: &'a Project) -> Self {
        Self { solution, project }
    }

    pub fn solution(&self) -> &'a Solution {
        self.solution
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }

    /// `solution/project`, unique across a registry.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.solution.name(), self.project.name())
    }
}

impl Deref for ProjectRef<'_> {
    type Target = Project;

    fn deref(&self) -> &Project {
        self.project
    }
}

impl PartialEq for ProjectRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.solution, other.solution) && std::ptr::eq(self.project, other.project)
    }
}

impl Eq for ProjectRef<'_> {}
