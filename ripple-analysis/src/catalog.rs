//! Built-in component catalog.
//!
//! The default graph Ripple analyzes is its own product family: the
//! shared core, the insight analysis engine, the autopilot automation
//! engine, and the user-facing surfaces. Externally supplied overrides
//! can tune or extend this catalog at analyzer construction time.

use crate::graph::{Component, GraphBuilder};

/// Populate a builder with the default catalog.
pub fn default_catalog() -> GraphBuilder {
    let mut builder = GraphBuilder::new();

    builder.upsert(
        Component::new("core")
            .with_description("Shared foundation: config, types, utilities")
            .with_criticality(95)
            .with_consumers(&["insight-core", "autopilot-engine", "guard-app", "cli", "extension"]),
    );
    builder.upsert(
        Component::new("insight-core")
            .with_description("Static analysis and diagnostics engine")
            .with_criticality(88)
            .with_dependencies(&["core"])
            .with_consumers(&["autopilot-engine", "cli", "extension"]),
    );
    builder.upsert(
        Component::new("autopilot-engine")
            .with_description("Automated fix and validation engine")
            .with_criticality(85)
            .with_dependencies(&["core", "insight-core"])
            .with_consumers(&["cli"]),
    );
    builder.upsert(
        Component::new("guard-app")
            .with_description("Pre-deploy quality gate application")
            .with_criticality(70)
            .with_dependencies(&["core"]),
    );
    builder.upsert(
        Component::new("cli")
            .with_description("Command-line surface")
            .with_criticality(75)
            .with_dependencies(&["core", "insight-core", "autopilot-engine"]),
    );
    builder.upsert(
        Component::new("extension")
            .with_description("Editor extension surface")
            .with_criticality(65)
            .with_dependencies(&["core", "insight-core"]),
    );
    builder.upsert(
        Component::new("website")
            .with_description("Marketing and documentation site")
            .with_criticality(40),
    );

    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_internally_consistent() {
        let graph = default_catalog().freeze();
        // Every declared dependency of a catalog member is itself a member.
        for id in graph.ids() {
            let component = graph.get(id).unwrap();
            for dep in &component.dependencies {
                assert!(graph.contains(dep), "{id} depends on unregistered {dep}");
            }
            for consumer in &component.consumers {
                assert!(
                    graph.contains(consumer),
                    "{id} lists unregistered consumer {consumer}"
                );
            }
        }
    }

    #[test]
    fn test_consumer_and_dependency_sides_agree() {
        let graph = default_catalog().freeze();
        for id in graph.ids() {
            let component = graph.get(id).unwrap();
            for consumer_id in &component.consumers {
                let consumer = graph.get(consumer_id).unwrap();
                assert!(
                    consumer.depends_on(id),
                    "{consumer_id} does not declare {id} as a dependency"
                );
            }
        }
    }
}
