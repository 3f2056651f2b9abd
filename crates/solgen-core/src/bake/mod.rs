//! The bake seam: merging declared settings for one axis scope
//!
//! Resolution bakes in two phases. Many settings are declared per operating
//! system, so the system has to be known before anything else can be
//! evaluated:
//!
//! 1. [`BakeEngine::bake_system`] sees only the [`AxisScope`] and reports the
//!    explicitly declared `system`, if any.
//! 2. [`BakeEngine::bake`] requires a [`SystemScope`], which can only be built
//!    from an axis scope plus a resolved [`OperatingSystem`].

mod blocks;

pub use blocks::BlockBaker;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use solgen_meta::{OperatingSystem, ProjectRef};

/// Merges a project's declared settings for a scope.
///
/// Implementations must be deterministic and free of side effects between
/// calls: resolving the same scope twice yields identical settings.
pub trait BakeEngine: Send + Sync {
    /// Phase one: the `system` value declared for this scope, if any.
    fn bake_system(&self, project: ProjectRef<'_>, scope: &AxisScope<'_>) -> Option<String>;

    /// Phase two: the settings for a scope whose system is already resolved.
    fn bake(&self, project: ProjectRef<'_>, scope: &SystemScope<'_>, filter: &FieldFilter)
    -> Settings;
}

/// Build configuration, platform and action of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisScope<'s> {
    buildcfg: &'s str,
    platform: Option<&'s str>,
    action: &'s str,
}

impl<'s> AxisScope<'s> {
    pub fn new(buildcfg: &'s str, platform: Option<&'s str>, action: &'s str) -> Self {
        Self {
            buildcfg,
            platform,
            action,
        }
    }

    pub fn buildcfg(&self) -> &'s str {
        self.buildcfg
    }

    pub fn platform(&self) -> Option<&'s str> {
        self.platform
    }

    pub fn action(&self) -> &'s str {
        self.action
    }

    /// Scope tokens in filter order: build configuration, platform, action.
    pub fn tokens(&self) -> Vec<&'s str> {
        let mut tokens = vec![self.buildcfg];
        tokens.extend(self.platform);
        tokens.push(self.action);
        tokens
    }

    /// Refine the scope with a resolved operating system.
    pub fn with_system(self, system: OperatingSystem) -> SystemScope<'s> {
        SystemScope { axis: self, system }
    }
}

/// An axis scope refined by its resolved operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemScope<'s> {
    axis: AxisScope<'s>,
    system: OperatingSystem,
}

impl<'s> SystemScope<'s> {
    pub fn axis(&self) -> &AxisScope<'s> {
        &self.axis
    }

    pub fn system(&self) -> OperatingSystem {
        self.system
    }

    /// Axis tokens followed by the system token.
    pub fn tokens(&self) -> Vec<&'s str> {
        let mut tokens = self.axis.tokens();
        tokens.push(self.system.as_str());
        tokens
    }
}

/// Restricts which settings a bake produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldFilter {
    /// Every field
    #[default]
    All,
    /// A single field
    Field(String),
    /// A single field, including blocks scoped to the given file
    FieldForFile { field: String, filename: String },
}

impl FieldFilter {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn for_file(field: impl Into<String>, filename: impl Into<String>) -> Self {
        Self::FieldForFile {
            field: field.into(),
            filename: filename.into(),
        }
    }

    /// Whether a field survives the filter.
    pub fn includes(&self, key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Field(field) | Self::FieldForFile { field, .. } => field == key,
        }
    }

    /// The filename keyword, if any.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::FieldForFile { filename, .. } => Some(filename.as_str()),
            _ => None,
        }
    }
}

/// A baked settings object: field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(Map<String, Value>);

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// A non-empty string field.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// A list field. A bare string counts as a one-element list.
    pub fn list(&self, field: &str) -> Vec<&str> {
        match self.0.get(field) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(item)) => vec![item.as_str()],
            _ => Vec::new(),
        }
    }

    /// Names of linked libraries and projects.
    pub fn links(&self) -> Vec<&str> {
        self.list("links")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge a value into a field.
    ///
    /// Objects merge recursively, arrays append values not already present,
    /// anything else replaces the existing value.
    pub fn merge_field(&mut self, key: &str, value: &Value) {
        match self.0.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None => {
                self.0.insert(key.to_string(), value.clone());
            }
        }
    }
}

fn merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    merge_value(base_val, overlay_val);
                } else {
                    base_map.insert(key.clone(), overlay_val.clone());
                }
            }
        }
        (Value::Array(base_items), Value::Array(overlay_items)) => {
            for item in overlay_items {
                if !base_items.contains(item) {
                    base_items.push(item.clone());
                }
            }
        }
        (base, overlay) => {
            *base = overlay.clone();
        }
    }
}
