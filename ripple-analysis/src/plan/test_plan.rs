//! Ordered validation sequence.

use crate::cascade::types::AffectedComponent;

/// Build the validation plan for one analysis.
///
/// Step 1 always tests the source. Subsequent steps cover only the direct
/// consumers (path length exactly 2), sorted by severity descending with
/// stable order among equals. A final integration step is added when the
/// full affected list exceeds two entries.
pub fn build_validation_plan(source_id: &str, affected: &[AffectedComponent]) -> Vec<String> {
    let mut plan = Vec::new();
    plan.push(format!("1. Test {source_id} in isolation"));

    let mut direct: Vec<&AffectedComponent> =
        affected.iter().filter(|a| a.is_direct()).collect();
    direct.sort_by(|a, b| b.severity.cmp(&a.severity));

    for entry in direct {
        plan.push(format!(
            "{}. Test {} ({} impact)",
            plan.len() + 1,
            entry.id,
            entry.severity
        ));
    }

    if affected.len() > 2 {
        plan.push(format!(
            "{}. Run the full integration suite across all affected components",
            plan.len() + 1
        ));
    }

    plan
}
