//! Heuristic severity and confidence rules.
//!
//! All rules are first-match-wins chains over component metadata and edge
//! classification. The model is advisory, not authoritative.

use ripple_core::constants::{
    CONFIDENCE_BASE, CONFIDENCE_DECLARED_EDGE_BONUS, CONFIDENCE_ERROR_CONTEXT_BONUS,
    CRITICAL_SOURCE_CRITICALITY, CRITICAL_TARGET_CRITICALITY, HIGH_SEVERITY_SOURCE_CRITICALITY,
};

use crate::cascade::types::{AffectedComponent, ErrorContext};
use crate::graph::Component;

use super::relationship::{PairingRules, RelationshipKind};
use super::severity::Severity;

/// Severity of the edge from `source` (upstream) to `target` (downstream).
///
/// Priority order, first match wins:
/// 1. critical — the triggering error is critical and the target itself
///    is highly critical
/// 2. high — API consumers of a highly critical source, and any workflow
///    trigger
/// 3. medium — plain direct dependencies
/// 4. low — everything else
pub fn edge_severity(
    source: &Component,
    target: &Component,
    kind: RelationshipKind,
    error_context: Option<&ErrorContext>,
) -> Severity {
    let ctx_critical = error_context.is_some_and(|ctx| ctx.severity == Severity::Critical);
    if ctx_critical && target.criticality > CRITICAL_TARGET_CRITICALITY {
        return Severity::Critical;
    }

    let api_on_critical_source = kind == RelationshipKind::ApiConsumer
        && source.criticality > HIGH_SEVERITY_SOURCE_CRITICALITY;
    if api_on_critical_source || kind == RelationshipKind::WorkflowTrigger {
        return Severity::High;
    }

    if kind == RelationshipKind::DirectDependency {
        return Severity::Medium;
    }

    Severity::Low
}

/// Confidence in the edge assessment, 0-100.
///
/// Base 50, +30 for declared edges (direct dependency or api-consumer),
/// +10 when an error context was supplied, plus any pairing-table bonus,
/// clamped to 100.
pub fn edge_confidence(
    rules: &PairingRules,
    source_id: &str,
    target_id: &str,
    kind: RelationshipKind,
    has_error_context: bool,
) -> u8 {
    let mut confidence = CONFIDENCE_BASE as u32;

    if matches!(
        kind,
        RelationshipKind::DirectDependency | RelationshipKind::ApiConsumer
    ) {
        confidence += CONFIDENCE_DECLARED_EDGE_BONUS as u32;
    }
    if has_error_context {
        confidence += CONFIDENCE_ERROR_CONTEXT_BONUS as u32;
    }
    confidence += rules.confidence_bonus(source_id, target_id) as u32;

    confidence.min(100) as u8
}

/// Aggregate overall severity from the flattened affected list.
pub fn aggregate_severity(affected: &[AffectedComponent], source_criticality: u8) -> Severity {
    let any_critical = affected.iter().any(|a| a.severity == Severity::Critical);
    if any_critical || source_criticality > CRITICAL_SOURCE_CRITICALITY {
        return Severity::Critical;
    }

    let high_count = affected
        .iter()
        .filter(|a| a.severity == Severity::High)
        .count();
    if high_count > 1 {
        return Severity::High;
    }
    if high_count >= 1 || affected.len() > 3 {
        return Severity::Medium;
    }

    Severity::Low
}

/// Aggregate confidence: rounded mean of all node confidences.
/// An empty affected list has nothing to be uncertain about, so 100.
pub fn aggregate_confidence(affected: &[AffectedComponent]) -> u8 {
    if affected.is_empty() {
        return 100;
    }
    let total: u32 = affected.iter().map(|a| a.confidence as u32).sum();
    let mean = (total as f64 / affected.len() as f64).round();
    mean as u8
}
