//! Grouping errors by normalized message and inferring root causes.
//!
//! Exact normalized match is the primary grouping mechanism; edit-distance
//! similarity only enters secondarily, inside confidence scoring, to
//! measure how close the raw messages of an already-formed group are.

use ripple_core::errors::CorrelationError;
use ripple_core::types::FxHashMap;
use tracing::debug;

use crate::cache::SimilarityCache;
use crate::graph::types::id_is_foundational;

use super::normalize::normalize_message;
use super::types::{CorrelatedGroup, CorrelationOutcome, ErrorLocation, ErrorReport};

/// Correlate a batch of error reports into shared root-cause groups.
///
/// Malformed records are rejected individually; the rest of the batch
/// still correlates. Groups of size 1 are dropped.
pub fn correlate(
    reports: &[ErrorReport],
    similarity: &mut SimilarityCache,
) -> CorrelationOutcome {
    let mut outcome = CorrelationOutcome::default();

    // Bucket by normalized message, single pass, first-seen group order.
    let mut group_order: Vec<String> = Vec::new();
    let mut buckets: FxHashMap<String, Vec<&ErrorReport>> = FxHashMap::default();

    for report in reports {
        if report.component.trim().is_empty() {
            outcome.rejected.push(CorrelationError::EmptyComponent);
            continue;
        }
        if report.message.trim().is_empty() {
            outcome.rejected.push(CorrelationError::EmptyMessage {
                component: report.component.clone(),
            });
            continue;
        }

        let normalized = normalize_message(&report.message);
        let bucket = buckets.entry(normalized.clone()).or_insert_with(|| {
            group_order.push(normalized);
            Vec::new()
        });
        bucket.push(report);
    }

    for normalized in group_order {
        let members = &buckets[&normalized];
        if members.len() < 2 {
            continue;
        }

        let locations: Vec<ErrorLocation> = members
            .iter()
            .map(|r| ErrorLocation {
                component: r.component.clone(),
                file: r.file.clone(),
                line: r.line,
            })
            .collect();

        let root_cause = infer_root_cause(members, &normalized);
        let suggested_fix = suggest_fix(members, &normalized);
        let confidence = group_confidence(members, similarity);

        debug!(
            normalized = normalized.as_str(),
            members = members.len(),
            confidence,
            "correlated error group"
        );

        outcome.groups.push(CorrelatedGroup {
            normalized_message: normalized,
            locations,
            root_cause,
            confidence,
            suggested_fix,
        });
    }

    outcome
}

/// Ordered root-cause rules; first match wins.
fn infer_root_cause(members: &[&ErrorReport], normalized: &str) -> String {
    if let Some(core) = foundational_member(members) {
        return format!(
            "Likely caused by foundational component '{core}'; changes there propagate to its dependents"
        );
    }
    if normalized.contains("type") {
        return "Shared type definition mismatch across the affected components".to_string();
    }
    if normalized.contains("import") {
        return "Import or module path resolution failure shared across components".to_string();
    }
    format!(
        "Common failure pattern observed across {} components",
        members.len()
    )
}

/// Suggested fix following the same rule priority as root-cause inference.
fn suggest_fix(members: &[&ErrorReport], normalized: &str) -> String {
    if let Some(core) = foundational_member(members) {
        return format!("Fix '{core}' first, then rebuild its dependents");
    }
    if normalized.contains("type") {
        return "Align the shared type definitions and rebuild the affected components"
            .to_string();
    }
    if normalized.contains("import") {
        return "Verify import paths and module resolution configuration in each affected component"
            .to_string();
    }
    "Inspect the shared pattern; one underlying change likely affects all listed components"
        .to_string()
}

fn foundational_member(members: &[&ErrorReport]) -> Option<String> {
    members
        .iter()
        .find(|r| id_is_foundational(&r.component))
        .map(|r| r.component.clone())
}

/// Confidence from group size (capped contribution) plus average pairwise
/// similarity of raw messages.
fn group_confidence(members: &[&ErrorReport], similarity: &mut SimilarityCache) -> u8 {
    let size_bonus = (members.len() * 10).min(40) as f64;

    let mut pair_count = 0usize;
    let mut similarity_sum = 0.0f64;
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            similarity_sum += similarity.similarity(&members[i].message, &members[j].message);
            pair_count += 1;
        }
    }
    let avg_similarity = if pair_count == 0 {
        1.0
    } else {
        similarity_sum / pair_count as f64
    };

    ((avg_similarity * 60.0) + size_bonus).round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(component: &str, message: &str) -> ErrorReport {
        ErrorReport {
            component: component.to_string(),
            message: message.to_string(),
            file: format!("{component}/src/index.ts"),
            line: Some(10),
        }
    }

    #[test]
    fn test_identical_errors_across_components_form_one_group() {
        let reports = vec![
            report("billing", "TypeError: x is undefined"),
            report("checkout", "TypeError: x is undefined"),
            report("account", "TypeError: x is undefined"),
        ];
        let mut cache = SimilarityCache::new(64);
        let outcome = correlate(&reports, &mut cache);

        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.groups[0].locations.len(), 3);
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn test_single_error_produces_no_group() {
        let reports = vec![report("billing", "TypeError: x is undefined")];
        let mut cache = SimilarityCache::new(64);
        let outcome = correlate(&reports, &mut cache);
        assert!(outcome.groups.is_empty());
    }

    #[test]
    fn test_normalization_groups_varying_details() {
        let reports = vec![
            report("billing", "Cannot find module 'money' at line 10"),
            report("checkout", "Cannot find module 'cart' at line 42"),
        ];
        let mut cache = SimilarityCache::new(64);
        let outcome = correlate(&reports, &mut cache);
        assert_eq!(outcome.groups.len(), 1);
        // Raw messages differ, so similarity drags confidence below a
        // same-message group of equal size.
        assert!(outcome.groups[0].confidence < 80);
    }

    #[test]
    fn test_foundational_member_wins_root_cause() {
        let reports = vec![
            report("shared-core", "TypeError: x is undefined"),
            report("checkout", "TypeError: x is undefined"),
        ];
        let mut cache = SimilarityCache::new(64);
        let outcome = correlate(&reports, &mut cache);
        assert!(outcome.groups[0].root_cause.contains("shared-core"));
        assert!(outcome.groups[0].suggested_fix.contains("shared-core"));
    }

    #[test]
    fn test_type_rule_when_no_foundational_member() {
        let reports = vec![
            report("billing", "Type 'A' is not assignable to type 'B'"),
            report("checkout", "Type 'C' is not assignable to type 'D'"),
        ];
        let mut cache = SimilarityCache::new(64);
        let outcome = correlate(&reports, &mut cache);
        assert!(outcome.groups[0].root_cause.contains("type definition"));
    }

    #[test]
    fn test_import_rule() {
        let reports = vec![
            report("billing", "import failed from <pkg>"),
            report("checkout", "import failed from <pkg>"),
        ];
        let mut cache = SimilarityCache::new(64);
        let outcome = correlate(&reports, &mut cache);
        assert!(outcome.groups[0].root_cause.contains("Import"));
    }

    #[test]
    fn test_malformed_records_rejected_individually() {
        let reports = vec![
            report("billing", "TypeError: x is undefined"),
            report("", "TypeError: x is undefined"),
            report("checkout", "   "),
            report("account", "TypeError: x is undefined"),
        ];
        let mut cache = SimilarityCache::new(64);
        let outcome = correlate(&reports, &mut cache);

        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.groups[0].locations.len(), 2);
    }
}
