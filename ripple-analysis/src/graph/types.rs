//! Component metadata.

use serde::{Deserialize, Serialize};

use ripple_core::constants::DEFAULT_CRITICALITY;

/// A node in the dependency graph.
///
/// `dependencies` and `consumers` may reference ids that were never
/// registered; dangling references are legal at insertion time and are
/// resolved lazily during traversal. The graph may contain cycles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Component {
    /// Unique id, stable across runs.
    pub id: String,
    /// Upstream ids this component depends on.
    pub dependencies: Vec<String>,
    /// Downstream ids that depend on this component. Stored redundantly
    /// with `dependencies` for O(1) downstream traversal.
    pub consumers: Vec<String>,
    /// A priori importance, 0-100, independent of any single error.
    pub criticality: u8,
    /// Free text, informational only.
    pub description: String,
}

impl Component {
    /// Create a component with default criticality and no edges.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dependencies: Vec::new(),
            consumers: Vec::new(),
            criticality: DEFAULT_CRITICALITY,
            description: String::new(),
        }
    }

    /// Builder-style setter for upstream dependencies.
    pub fn with_dependencies(mut self, dependencies: &[&str]) -> Self {
        self.dependencies = dependencies.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Builder-style setter for downstream consumers.
    pub fn with_consumers(mut self, consumers: &[&str]) -> Self {
        self.consumers = consumers.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Builder-style setter for criticality (clamped to 100).
    pub fn with_criticality(mut self, criticality: u8) -> Self {
        self.criticality = criticality.min(100);
        self
    }

    /// Builder-style setter for the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this component declares `id` as an upstream dependency.
    pub fn depends_on(&self, id: &str) -> bool {
        self.dependencies.iter().any(|d| d == id)
    }

    /// Whether the component name suggests a foundational/shared role.
    pub fn is_foundational(&self) -> bool {
        id_is_foundational(&self.id)
    }
}

/// Name-based heuristic for foundational components: shared cores and
/// common type packages sit upstream of most of the graph.
pub fn id_is_foundational(id: &str) -> bool {
    let lower = id.to_lowercase();
    lower.contains("core") || lower.contains("shared") || lower.contains("common")
}
