//! Cascade tree and impact analysis result types.

use serde::{Deserialize, Serialize};

use crate::scoring::{RelationshipKind, Severity};

/// Optional context describing the triggering error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorContext {
    /// The observed error message.
    pub message: String,
    /// File the error was observed in, when known.
    pub file: Option<String>,
    /// Assessed severity of the triggering error.
    pub severity: Severity,
}

/// One node of the cascade tree, ephemeral per traversal.
///
/// Built fresh on every cache miss and discarded after flattening; never
/// mutated once its subtree is complete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CascadeNode {
    /// Component id, or the id that was referenced when unknown.
    pub id: String,
    /// Assigned severity for this node.
    pub severity: Severity,
    /// Human-readable reason the node is in the cascade.
    pub reason: String,
    /// Confidence in the assignment, 0-100.
    pub confidence: u8,
    /// Relationship to the parent node; `None` on the root.
    pub relationship: Option<RelationshipKind>,
    /// How this node terminated, if it is a terminal leaf.
    pub terminal: Option<TerminalReason>,
    /// Downstream children, in consumer-list order.
    pub children: Vec<CascadeNode>,
}

impl CascadeNode {
    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Longest node count from this node down, inclusive.
    pub fn depth(&self) -> u32 {
        1 + self
            .children
            .iter()
            .map(CascadeNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Why a traversal branch stopped expanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalReason {
    /// The component id was already visited on this path.
    CircularReference,
    /// The configured maximum depth was reached.
    MaxDepthReached,
    /// The id is referenced as a consumer but never registered.
    UnknownComponent,
}

impl TerminalReason {
    pub fn reason_text(&self) -> &'static str {
        match self {
            Self::CircularReference => "circular reference",
            Self::MaxDepthReached => "maximum cascade depth reached",
            Self::UnknownComponent => "unknown component",
        }
    }
}

/// A flattened entry of the cascade: one affected component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AffectedComponent {
    pub id: String,
    pub severity: Severity,
    pub relationship: RelationshipKind,
    pub reason: String,
    /// Confidence in the assessment, 0-100.
    pub confidence: u8,
    /// Path from the source to this component, inclusive of both ends.
    pub path: Vec<String>,
    /// Suggested follow-up actions for this component.
    pub suggested_actions: Vec<String>,
}

impl AffectedComponent {
    /// Whether this component is a direct consumer of the source.
    pub fn is_direct(&self) -> bool {
        self.path.len() == 2
    }
}

/// The complete, immutable output of one deep impact analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactAnalysis {
    /// Source component the analysis started from.
    pub source: String,
    /// All affected components, flattened from the cascade tree.
    pub affected: Vec<AffectedComponent>,
    /// Longest node count in the cascade, source included.
    pub cascade_depth: u32,
    /// Aggregated overall severity.
    pub overall_severity: Severity,
    /// Aggregated confidence, 0-100.
    pub confidence: u8,
    /// Prioritized action list.
    pub recommendations: Vec<String>,
    /// Ordered validation sequence.
    pub validation_plan: Vec<String>,
    /// Rendered cascade tree text.
    pub cascade_tree: String,
    /// Unix timestamp in milliseconds at production time.
    pub timestamp_ms: u64,
}
