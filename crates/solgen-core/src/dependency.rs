//! Project dependencies
//!
//! Links are declared by name and may differ per configuration. Solution
//! formats such as Visual Studio cannot express per-configuration project
//! dependencies, so [`DependencyCollector::dependencies`] reports the union
//! over every configuration.
//!
//! Links are never validated against cycles at declaration time. Ordering a
//! build walks them transitively, which is where [`DependencyGraph`] detects
//! and reports cycles instead of looping.
//!
//! # Example
//!
//! ```
//! use solgen_core::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_edge("Game/App", "Game/Engine");
//! graph.add_edge("Game/Engine", "Game/Core");
//!
//! let order = graph.topological_sort().unwrap();
//! assert_eq!(order, vec!["Game/Core", "Game/Engine", "Game/App"]);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use solgen_meta::ProjectRef;

use crate::bake::FieldFilter;
use crate::config::{ConfigAxisIterator, ConfigResolver};
use crate::context::Context;
use crate::error::{Error, Result};

/// Collects inter-project dependencies.
#[derive(Debug, Clone, Copy)]
pub struct DependencyCollector<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> DependencyCollector<'c, 'a> {
    pub fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    /// Projects linked from any configuration of `project`.
    ///
    /// Each dependency appears once, in first-seen order. Link names that do
    /// not resolve to a project (system libraries, for instance) are skipped.
    /// Lookup prefers the project's own solution, ignoring case.
    pub fn dependencies(&self, project: ProjectRef<'a>) -> Vec<ProjectRef<'a>> {
        let registry = self.ctx.registry();
        let configs = ConfigAxisIterator::new(
            ConfigResolver::new(self.ctx),
            project,
            FieldFilter::field("links"),
        );

        let mut result: Vec<ProjectRef<'a>> = Vec::new();
        for cfg in configs {
            for link in cfg.links() {
                match registry.find_project_near(project.solution(), link) {
                    Some(dependency) => {
                        if !result.contains(&dependency) {
                            tracing::trace!(
                                project = project.name(),
                                dependency = dependency.name(),
                                config = %cfg.name(),
                                "Found project dependency"
                            );
                            result.push(dependency);
                        }
                    }
                    None => {
                        tracing::trace!(project = project.name(), link, "Link is not a project");
                    }
                }
            }
        }
        result
    }

    /// `project` and its transitive dependencies, dependencies first.
    ///
    /// # Errors
    ///
    /// Returns `Error::DependencyCycle` when links form a cycle, including a
    /// project linking itself.
    pub fn dependency_order(&self, project: ProjectRef<'a>) -> Result<Vec<ProjectRef<'a>>> {
        let mut graph = DependencyGraph::new();
        let mut visited: HashMap<String, ProjectRef<'a>> = HashMap::new();
        let mut pending = vec![project];

        while let Some(current) = pending.pop() {
            let id = current.qualified_name();
            if visited.contains_key(&id) {
                continue;
            }
            visited.insert(id.clone(), current);
            graph.add_node(&id);

            for dependency in self.dependencies(current) {
                graph.add_edge(&id, &dependency.qualified_name());
                pending.push(dependency);
            }
        }

        let order = graph.topological_sort()?;
        Ok(order
            .iter()
            .filter_map(|id| visited.get(id).copied())
            .collect())
    }
}

/// Directed graph of dependencies between named nodes.
///
/// Edges point from dependent to dependency: if A depends on B, the edge is
/// `A -> B`, and topological order lists B before A.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: BTreeSet<String>,
    /// Adjacency list: key depends on each value.
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: &str) {
        self.nodes.insert(id.to_string());
    }

    /// Declare that `from` depends on `to`, adding both nodes if needed.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.add_node(from);
        self.add_node(to);
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Direct dependencies of a node, sorted.
    pub fn dependencies_of(&self, id: &str) -> Vec<&str> {
        self.edges
            .get(id)
            .map(|deps| deps.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Kahn's algorithm, dependency-first.
    ///
    /// Among nodes that become ready together, the alphabetically smallest
    /// goes first, so the order is deterministic.
    ///
    /// # Errors
    ///
    /// Returns `Error::DependencyCycle` naming every node that could not be
    /// ordered.
    pub fn topological_sort(&self) -> Result<Vec<String>> {
        let mut unresolved: HashMap<&str, usize> = HashMap::new();
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();

        for id in &self.nodes {
            let deps = self.edges.get(id);
            unresolved.insert(id.as_str(), deps.map_or(0, BTreeSet::len));
            for dep in deps.into_iter().flatten() {
                dependents.entry(dep.as_str()).or_default().push(id.as_str());
            }
        }

        let mut ready: BTreeSet<&str> = unresolved
            .iter()
            .filter(|&(_, &count)| count == 0)
            .map(|(&id, _)| id)
            .collect();

        let mut result = Vec::with_capacity(self.nodes.len());
        while let Some(current) = ready.pop_first() {
            result.push(current.to_string());
            for &dependent in dependents.get(current).into_iter().flatten() {
                if let Some(count) = unresolved.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        ready.insert(dependent);
                    }
                }
            }
        }

        if result.len() != self.nodes.len() {
            let participants: Vec<String> = self
                .nodes
                .iter()
                .filter(|id| !result.contains(id))
                .cloned()
                .collect();
            return Err(Error::DependencyCycle { participants });
        }

        Ok(result)
    }
}
