//! Prioritized recommendation list.

use ripple_core::constants::MANUAL_REVIEW_CRITICALITY;

use crate::cascade::types::{AffectedComponent, ErrorContext};
use crate::graph::Component;
use crate::scoring::Severity;

/// Build the recommendation list for one analysis.
///
/// Each condition is evaluated independently; multiple recommendations
/// can co-occur, always in this fixed order:
/// 1. fix/verify the source (phrasing depends on error context)
/// 2. prioritized revalidation of high/critical nodes, if any
/// 3. full cascade test plan when more than two components are affected
/// 4. rebuild dependents of foundational sources
/// 5. manual review for high-criticality sources
pub fn build_recommendations(
    source: &Component,
    affected: &[AffectedComponent],
    error_context: Option<&ErrorContext>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match error_context {
        Some(_) => recommendations.push(format!(
            "Fix the error in {} before addressing downstream impact",
            source.id
        )),
        None => recommendations.push(format!(
            "Verify {} has no errors before release",
            source.id
        )),
    }

    let severe: Vec<&str> = affected
        .iter()
        .filter(|a| a.severity >= Severity::High)
        .map(|a| a.id.as_str())
        .collect();
    if !severe.is_empty() {
        recommendations.push(format!(
            "Prioritize revalidation of: {}",
            severe.join(", ")
        ));
    }

    if affected.len() > 2 {
        recommendations.push(format!(
            "Run the full cascade test plan; {} components are affected",
            affected.len()
        ));
    }

    if source.is_foundational() {
        recommendations.push(format!(
            "Rebuild all dependents of {} after the fix",
            source.id
        ));
    }

    if source.criticality > MANUAL_REVIEW_CRITICALITY {
        recommendations.push(format!(
            "Schedule a manual review; {} is a high-criticality component",
            source.id
        ));
    }

    recommendations
}
