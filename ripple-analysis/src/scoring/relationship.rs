//! Edge classification between two components.
//!
//! Classification is computed on demand from the stored metadata of the
//! two endpoints; it is never persisted on an edge. Special-case pairings
//! live in a [`PairingRules`] data table rather than inline conditionals,
//! so the heuristic catalogue can grow without touching traversal logic.

use serde::{Deserialize, Serialize};

use crate::graph::{types::id_is_foundational, ComponentGraph};

/// How a downstream component relates to an upstream one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    /// Declares the upstream as a dependency, no finer classification.
    DirectDependency,
    /// Consumes the upstream's public API surface (core → cli/extension).
    ApiConsumer,
    /// Reads data produced by the upstream.
    DataConsumer,
    /// The upstream's output triggers a workflow in the downstream.
    WorkflowTrigger,
    /// Shares type definitions with the upstream.
    SharedTypes,
    /// No declared edge; affected only transitively.
    Indirect,
}

impl RelationshipKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DirectDependency => "direct-dependency",
            Self::ApiConsumer => "api-consumer",
            Self::DataConsumer => "data-consumer",
            Self::WorkflowTrigger => "workflow-trigger",
            Self::SharedTypes => "shared-types",
            Self::Indirect => "indirect",
        }
    }

    /// Short phrase used in cascade node reasons.
    pub fn reason_phrase(&self, upstream: &str) -> String {
        match self {
            Self::DirectDependency => format!("direct dependency of {upstream}"),
            Self::ApiConsumer => format!("consumes the API of {upstream}"),
            Self::DataConsumer => format!("consumes data produced by {upstream}"),
            Self::WorkflowTrigger => format!("workflow triggered by {upstream}"),
            Self::SharedTypes => format!("shares type definitions with {upstream}"),
            Self::Indirect => format!("indirectly affected by {upstream}"),
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A special-case pairing: forced classification and/or confidence bonus
/// for one specific (upstream, downstream) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingRule {
    pub source: String,
    pub target: String,
    /// Forced classification when the pair matches, if any.
    pub kind: Option<RelationshipKind>,
    /// Confidence bonus added on top of the base score.
    pub confidence_bonus: u8,
}

/// Lookup table of special-case pairings.
#[derive(Debug, Clone, Default)]
pub struct PairingRules {
    rules: Vec<PairingRule>,
}

impl PairingRules {
    pub fn new(rules: Vec<PairingRule>) -> Self {
        Self { rules }
    }

    /// The built-in catalogue: the analysis engine feeding the automation
    /// engine is a known high-value workflow pairing, and the shared core
    /// feeding the editor extension is a known strong coupling.
    pub fn builtin() -> Self {
        Self::new(vec![
            PairingRule {
                source: "insight-core".to_string(),
                target: "autopilot-engine".to_string(),
                kind: Some(RelationshipKind::WorkflowTrigger),
                confidence_bonus: 20,
            },
            PairingRule {
                source: "core".to_string(),
                target: "extension".to_string(),
                kind: None,
                confidence_bonus: 15,
            },
        ])
    }

    /// Find the rule for an exact (source, target) pair.
    pub fn lookup(&self, source: &str, target: &str) -> Option<&PairingRule> {
        self.rules
            .iter()
            .find(|r| r.source == source && r.target == target)
    }

    /// Confidence bonus for the pair, 0 when no rule matches.
    pub fn confidence_bonus(&self, source: &str, target: &str) -> u8 {
        self.lookup(source, target)
            .map(|r| r.confidence_bonus)
            .unwrap_or(0)
    }
}

/// Classify the edge from `source` (upstream) to `target` (downstream).
///
/// A pairing rule with a forced kind wins; otherwise a declared dependency
/// is an api-consumer edge on core→cli / core→extension naming patterns
/// and a direct dependency else. No declared edge means indirect.
///
/// The edge lists are stored redundantly on both endpoints; either side
/// declaring the edge counts, so a catalog populated only with consumer
/// lists still classifies correctly.
pub fn classify(
    graph: &ComponentGraph,
    rules: &PairingRules,
    source: &str,
    target: &str,
) -> RelationshipKind {
    let target_declares = graph
        .get(target)
        .map(|c| c.depends_on(source))
        .unwrap_or(false);
    let source_declares = graph
        .get(source)
        .map(|c| c.consumers.iter().any(|c| c == target))
        .unwrap_or(false);

    if !target_declares && !source_declares {
        return RelationshipKind::Indirect;
    }

    if let Some(rule) = rules.lookup(source, target) {
        if let Some(kind) = rule.kind {
            return kind;
        }
    }

    let target_lower = target.to_lowercase();
    if id_is_foundational(source) && (target_lower.contains("extension") || target_lower.contains("cli"))
    {
        return RelationshipKind::ApiConsumer;
    }

    RelationshipKind::DirectDependency
}
