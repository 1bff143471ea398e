//! Flattening a cascade tree into the affected-component list.

use crate::scoring::{RelationshipKind, Severity};

use super::types::{AffectedComponent, CascadeNode, TerminalReason};

/// Flatten a cascade tree into affected-component records.
///
/// The root is the source and is excluded. Circular-reference leaves are
/// also excluded: they point back at a component already on the path and
/// carry no new information. Unknown and depth-capped leaves stay in,
/// since they name components that genuinely need attention.
pub fn flatten_cascade(root: &CascadeNode) -> Vec<AffectedComponent> {
    let mut affected = Vec::new();
    let path = vec![root.id.clone()];
    for child in &root.children {
        collect(child, &path, &mut affected);
    }
    affected
}

fn collect(node: &CascadeNode, parent_path: &[String], out: &mut Vec<AffectedComponent>) {
    if node.terminal == Some(TerminalReason::CircularReference) {
        return;
    }

    let mut path = parent_path.to_vec();
    path.push(node.id.clone());

    let relationship = node.relationship.unwrap_or(RelationshipKind::Indirect);
    out.push(AffectedComponent {
        id: node.id.clone(),
        severity: node.severity,
        relationship,
        reason: node.reason.clone(),
        confidence: node.confidence,
        path: path.clone(),
        suggested_actions: suggested_actions(&node.id, node.severity),
    });

    for child in &node.children {
        collect(child, &path, out);
    }
}

/// Per-component follow-up actions, scaled by severity.
fn suggested_actions(id: &str, severity: Severity) -> Vec<String> {
    match severity {
        Severity::Critical | Severity::High => vec![
            format!("Run the full {id} test suite"),
            format!("Review recent changes in {id} before release"),
        ],
        Severity::Medium => vec![format!("Run the {id} test suite")],
        Severity::Low => vec![format!("Smoke-test {id}")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::builder::CascadeBuilder;
    use crate::graph::{Component, GraphBuilder};
    use crate::scoring::PairingRules;

    #[test]
    fn test_flatten_records_paths() {
        let mut b = GraphBuilder::new();
        b.upsert(Component::new("a").with_consumers(&["b"]));
        b.upsert(Component::new("b").with_consumers(&["c"]));
        b.upsert(Component::new("c"));
        let g = b.freeze();
        let rules = PairingRules::builtin();
        let tree = CascadeBuilder::new(&g, &rules, 5).build("a", None);

        let affected = flatten_cascade(&tree);
        assert_eq!(affected.len(), 2);
        assert_eq!(affected[0].id, "b");
        assert_eq!(affected[0].path, vec!["a", "b"]);
        assert!(affected[0].is_direct());
        assert_eq!(affected[1].id, "c");
        assert_eq!(affected[1].path, vec!["a", "b", "c"]);
        assert!(!affected[1].is_direct());
    }

    #[test]
    fn test_flatten_skips_circular_leaves() {
        let mut b = GraphBuilder::new();
        b.upsert(Component::new("a").with_consumers(&["b"]));
        b.upsert(Component::new("b").with_consumers(&["a"]));
        let g = b.freeze();
        let rules = PairingRules::builtin();
        let tree = CascadeBuilder::new(&g, &rules, 5).build("a", None);

        let affected = flatten_cascade(&tree);
        assert_eq!(affected.len(), 1);
        assert_eq!(affected[0].id, "b");
    }

    #[test]
    fn test_flatten_keeps_unknown_leaves() {
        let mut b = GraphBuilder::new();
        b.upsert(Component::new("a").with_consumers(&["ghost"]));
        let g = b.freeze();
        let rules = PairingRules::builtin();
        let tree = CascadeBuilder::new(&g, &rules, 5).build("a", None);

        let affected = flatten_cascade(&tree);
        assert_eq!(affected.len(), 1);
        assert_eq!(affected[0].id, "ghost");
        assert_eq!(affected[0].confidence, 0);
    }
}
