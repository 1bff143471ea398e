//! Two-phase component store.
//!
//! A mutable [`GraphBuilder`] collects the base catalog plus any runtime
//! overrides, then freezes into an immutable [`ComponentGraph`] consumed
//! by traversal. Freezing before analysis rules out overrides landing
//! mid-traversal.

use ripple_core::config::ComponentOverride;
use ripple_core::types::FxHashMap;

use super::types::Component;

/// Mutable accumulation phase of the component graph.
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    components: FxHashMap<String, Component>,
    // Insertion order, so `ids()` on the frozen graph is deterministic.
    order: Vec<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a component by id.
    ///
    /// Edge targets are not validated; dangling references are resolved
    /// lazily by the cascade builder.
    pub fn upsert(&mut self, component: Component) {
        if !self.components.contains_key(&component.id) {
            self.order.push(component.id.clone());
        }
        self.components.insert(component.id.clone(), component);
    }

    /// Apply an external override: mutate the matching component in place,
    /// or register a new custom component when the id is unknown.
    pub fn apply_override(&mut self, ov: &ComponentOverride) {
        let existing = self.components.get(&ov.id).cloned();
        let mut component = existing.unwrap_or_else(|| Component::new(ov.id.clone()));

        if let Some(criticality) = ov.criticality {
            component.criticality = criticality.min(100);
        }
        if let Some(ref description) = ov.description {
            component.description = description.clone();
        }
        if let Some(ref dependencies) = ov.dependencies {
            component.dependencies = dependencies.clone();
        }
        if let Some(ref consumers) = ov.consumers {
            component.consumers = consumers.clone();
        }

        self.upsert(component);
    }

    /// Freeze into an immutable snapshot for analysis.
    pub fn freeze(self) -> ComponentGraph {
        ComponentGraph {
            components: self.components,
            order: self.order,
        }
    }
}

/// Immutable component graph snapshot.
#[derive(Debug, Clone, Default)]
pub struct ComponentGraph {
    components: FxHashMap<String, Component>,
    order: Vec<String>,
}

impl ComponentGraph {
    /// Look up a component by id.
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// Whether a component is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    /// All registered ids, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
