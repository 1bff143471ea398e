//! Severity/confidence heuristics and edge classification.

pub mod estimator;
pub mod relationship;
pub mod severity;

pub use estimator::{aggregate_confidence, aggregate_severity, edge_confidence, edge_severity};
pub use relationship::{PairingRule, PairingRules, RelationshipKind};
pub use severity::Severity;
