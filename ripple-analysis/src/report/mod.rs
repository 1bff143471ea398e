//! Text rendering of cascade trees and full impact reports.
//!
//! Deterministic, no I/O; coloring is left to the embedding host.

use crate::cascade::types::{CascadeNode, ImpactAnalysis};

/// Render a cascade tree with box-drawing indentation.
pub fn render_tree(root: &CascadeNode) -> String {
    let mut out = String::new();
    out.push_str(&node_line(root));
    out.push('\n');
    render_children(root, "", &mut out);
    out
}

fn render_children(node: &CascadeNode, prefix: &str, out: &mut String) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        out.push_str(prefix);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(&node_line(child));
        out.push('\n');

        let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
        render_children(child, &child_prefix, out);
    }
}

fn node_line(node: &CascadeNode) -> String {
    format!(
        "{} {} [{}] {} ({}%)",
        node.severity.glyph(),
        node.id,
        node.severity,
        node.reason,
        node.confidence
    )
}

/// Render the full human-readable impact report.
pub fn render_report(analysis: &ImpactAnalysis) -> String {
    let mut out = String::new();

    out.push_str(&format!("Impact analysis: {}\n", analysis.source));
    out.push_str(&format!(
        "Overall severity: {} (confidence {}%)\n",
        analysis.overall_severity, analysis.confidence
    ));
    out.push_str(&format!("Cascade depth: {}\n", analysis.cascade_depth));
    out.push_str(&format!(
        "Affected components: {}\n\n",
        analysis.affected.len()
    ));

    out.push_str("Cascade:\n");
    out.push_str(&analysis.cascade_tree);
    out.push('\n');

    if !analysis.affected.is_empty() {
        out.push_str("Affected:\n");
        for entry in &analysis.affected {
            out.push_str(&format!(
                "  {} {} [{}] via {} ({}%)\n",
                entry.severity.glyph(),
                entry.id,
                entry.severity,
                entry.path.join(" -> "),
                entry.confidence
            ));
            for action in &entry.suggested_actions {
                out.push_str(&format!("      - {action}\n"));
            }
        }
        out.push('\n');
    }

    out.push_str("Recommendations:\n");
    for (i, rec) in analysis.recommendations.iter().enumerate() {
        out.push_str(&format!("  {}. {rec}\n", i + 1));
    }
    out.push('\n');

    out.push_str("Validation plan:\n");
    for step in &analysis.validation_plan {
        out.push_str(&format!("  {step}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::builder::CascadeBuilder;
    use crate::graph::{Component, GraphBuilder};
    use crate::scoring::PairingRules;

    #[test]
    fn test_tree_renders_all_nodes() {
        let mut b = GraphBuilder::new();
        b.upsert(Component::new("a").with_consumers(&["b", "c"]));
        b.upsert(Component::new("b"));
        b.upsert(Component::new("c"));
        let g = b.freeze();
        let rules = PairingRules::builtin();
        let tree = CascadeBuilder::new(&g, &rules, 5).build("a", None);

        let text = render_tree(&tree);
        assert!(text.contains("a [critical] source of error (100%)"));
        assert!(text.contains("├─ "));
        assert!(text.contains("└─ "));
        assert!(text.contains("b ["));
        assert!(text.contains("c ["));
    }

    #[test]
    fn test_tree_indents_nested_levels() {
        let mut b = GraphBuilder::new();
        b.upsert(Component::new("a").with_consumers(&["b"]));
        b.upsert(Component::new("b").with_consumers(&["c"]));
        b.upsert(Component::new("c"));
        let g = b.freeze();
        let rules = PairingRules::builtin();
        let tree = CascadeBuilder::new(&g, &rules, 5).build("a", None);

        let text = render_tree(&tree);
        assert!(text.contains("   └─ "));
    }
}
