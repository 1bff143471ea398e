//! Recursive cascade construction over consumer edges.
//!
//! Traversal is synchronous, CPU-bound recursion with no I/O. Cycles and
//! the depth cap are terminal states of a branch, not errors; unknown
//! downstream ids degrade to zero-confidence leaves so a partially known
//! graph still yields a usable partial result.

use ripple_core::types::FxHashSet;
use tracing::trace;

use crate::graph::ComponentGraph;
use crate::scoring::{self, relationship, PairingRules, Severity};

use super::types::{CascadeNode, ErrorContext, TerminalReason};

/// Builds cascade trees from a frozen graph snapshot.
pub struct CascadeBuilder<'a> {
    graph: &'a ComponentGraph,
    rules: &'a PairingRules,
    max_depth: u32,
}

impl<'a> CascadeBuilder<'a> {
    pub fn new(graph: &'a ComponentGraph, rules: &'a PairingRules, max_depth: u32) -> Self {
        Self {
            graph,
            rules,
            max_depth,
        }
    }

    /// Build the cascade rooted at `source_id`.
    ///
    /// The root is axiomatically the most severe point: severity critical,
    /// confidence 100, regardless of what the edge rules would say.
    /// Callers are expected to have verified that `source_id` is
    /// registered; an unregistered source still produces a tree, with the
    /// root marked unknown.
    pub fn build(&self, source_id: &str, error_context: Option<&ErrorContext>) -> CascadeNode {
        let mut visited: FxHashSet<String> = FxHashSet::default();
        visited.insert(source_id.to_string());

        let children = match self.graph.get(source_id) {
            Some(component) => component
                .consumers
                .iter()
                .map(|consumer| {
                    self.build_node(consumer, source_id, error_context, 1, visited.clone())
                })
                .collect(),
            None => Vec::new(),
        };

        CascadeNode {
            id: source_id.to_string(),
            severity: Severity::Critical,
            reason: "source of error".to_string(),
            confidence: 100,
            relationship: None,
            terminal: if self.graph.contains(source_id) {
                None
            } else {
                Some(TerminalReason::UnknownComponent)
            },
            children,
        }
    }

    /// Build one downstream node.
    ///
    /// `visited` is the id set along this path only; each recursive call
    /// receives its own copy so sibling branches may legitimately revisit
    /// the same component via different paths.
    fn build_node(
        &self,
        id: &str,
        parent_id: &str,
        error_context: Option<&ErrorContext>,
        depth: u32,
        mut visited: FxHashSet<String>,
    ) -> CascadeNode {
        let kind = relationship::classify(self.graph, self.rules, parent_id, id);

        // Cycle: no new information exists past this point.
        if visited.contains(id) {
            trace!(component = id, depth, "cascade hit circular reference");
            return self.terminal_leaf(id, kind, TerminalReason::CircularReference, 100);
        }

        // Depth cap: bounds cost on wide fan-out graphs.
        if depth >= self.max_depth {
            trace!(component = id, depth, "cascade depth cap reached");
            return self.terminal_leaf(id, kind, TerminalReason::MaxDepthReached, 50);
        }

        // Dangling consumer reference: soft failure, zero confidence.
        let Some(component) = self.graph.get(id) else {
            trace!(component = id, depth, "cascade reached unregistered component");
            return self.terminal_leaf(id, kind, TerminalReason::UnknownComponent, 0);
        };

        visited.insert(id.to_string());

        let parent = self.graph.get(parent_id);
        let severity = match parent {
            Some(parent) => scoring::edge_severity(parent, component, kind, error_context),
            None => Severity::Low,
        };
        let confidence =
            scoring::edge_confidence(self.rules, parent_id, id, kind, error_context.is_some());

        let children = component
            .consumers
            .iter()
            .map(|consumer| {
                self.build_node(consumer, id, error_context, depth + 1, visited.clone())
            })
            .collect();

        CascadeNode {
            id: id.to_string(),
            severity,
            reason: kind.reason_phrase(parent_id),
            confidence,
            relationship: Some(kind),
            terminal: None,
            children,
        }
    }

    fn terminal_leaf(
        &self,
        id: &str,
        kind: crate::scoring::RelationshipKind,
        terminal: TerminalReason,
        confidence: u8,
    ) -> CascadeNode {
        CascadeNode {
            id: id.to_string(),
            severity: Severity::Low,
            reason: terminal.reason_text().to_string(),
            confidence,
            relationship: Some(kind),
            terminal: Some(terminal),
            children: Vec::new(),
        }
    }
}
