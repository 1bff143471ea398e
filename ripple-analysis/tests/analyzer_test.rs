//! End-to-end analyzer scenarios.

use ripple_analysis::cascade::types::ErrorContext;
use ripple_analysis::graph::{Component, GraphBuilder};
use ripple_analysis::{ErrorReport, ImpactAnalyzer, Severity};
use ripple_core::config::{ComponentOverride, RippleConfig};
use ripple_core::errors::AnalysisError;

fn chain_analyzer() -> ImpactAnalyzer {
    // A -> B -> C, criticality 95 / 60 / 50.
    let mut builder = GraphBuilder::new();
    builder.upsert(
        Component::new("A")
            .with_criticality(95)
            .with_consumers(&["B"]),
    );
    builder.upsert(
        Component::new("B")
            .with_criticality(60)
            .with_consumers(&["C"]),
    );
    builder.upsert(Component::new("C").with_criticality(50));
    ImpactAnalyzer::with_graph(builder.freeze(), &RippleConfig::default())
}

#[test]
fn chain_scenario_produces_expected_report() {
    let analyzer = chain_analyzer();
    let analysis = analyzer.analyze_deep_impact("A", None).unwrap();

    assert_eq!(analysis.cascade_depth, 3);
    assert_eq!(analysis.affected.len(), 2);

    let b = &analysis.affected[0];
    assert_eq!(b.id, "B");
    assert!(b.severity >= Severity::Medium);
    assert_eq!(b.path, vec!["A", "B"]);

    let c = &analysis.affected[1];
    assert_eq!(c.id, "C");
    assert_eq!(c.path, vec!["A", "B", "C"]);

    // Source criticality 95 forces the aggregate to critical.
    assert_eq!(analysis.overall_severity, Severity::Critical);

    assert!(analysis
        .recommendations
        .iter()
        .any(|r| r.contains("Verify A has no errors")));
    assert!(analysis
        .recommendations
        .iter()
        .any(|r| r.contains("manual review")));

    assert_eq!(analysis.validation_plan[0], "1. Test A in isolation");
    assert!(analysis.validation_plan[1].contains("Test B"));
}

#[test]
fn unknown_source_is_a_hard_failure() {
    let analyzer = chain_analyzer();
    let result = analyzer.analyze_deep_impact("unknown-id", None);
    assert!(matches!(
        result,
        Err(AnalysisError::UnknownSourceComponent { ref id }) if id == "unknown-id"
    ));
}

#[test]
fn empty_source_id_is_rejected() {
    let analyzer = chain_analyzer();
    assert!(matches!(
        analyzer.analyze_deep_impact("  ", None),
        Err(AnalysisError::EmptySourceId)
    ));
}

#[test]
fn repeat_call_is_served_from_cache_bit_identical() {
    let analyzer = chain_analyzer();
    let first = analyzer.analyze_deep_impact("A", None).unwrap();
    let second = analyzer.analyze_deep_impact("A", None).unwrap();

    // Identical including the timestamp: the second call is the cached value.
    assert_eq!(first, second);

    let stats = analyzer.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn error_context_changes_the_cache_key() {
    let analyzer = chain_analyzer();
    let ctx = ErrorContext {
        message: "TypeError: x is undefined".to_string(),
        file: Some("src/index.ts".to_string()),
        severity: Severity::Critical,
    };
    analyzer.analyze_deep_impact("A", None).unwrap();
    analyzer.analyze_deep_impact("A", Some(&ctx)).unwrap();

    let stats = analyzer.cache_stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 0);
}

#[test]
fn clear_caches_forces_recomputation() {
    let analyzer = chain_analyzer();
    analyzer.analyze_deep_impact("A", None).unwrap();
    analyzer.clear_caches();
    analyzer.analyze_deep_impact("A", None).unwrap();

    let stats = analyzer.cache_stats();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 2);
}

#[test]
fn default_catalog_analyzes_core() {
    let analyzer = ImpactAnalyzer::new();
    let analysis = analyzer.analyze_deep_impact("core", None).unwrap();

    // core fans out to every product surface.
    assert!(analysis.affected.len() >= 5);
    assert_eq!(analysis.overall_severity, Severity::Critical);
    assert!(!analysis.cascade_tree.is_empty());

    let report = analyzer.render_report(&analysis);
    assert!(report.contains("Impact analysis: core"));
    assert!(report.contains("Recommendations:"));
    assert!(report.contains("Validation plan:"));
}

#[test]
fn configured_override_is_observed_by_analysis() {
    let config = RippleConfig {
        components: vec![ComponentOverride {
            id: "website".to_string(),
            criticality: Some(99),
            consumers: Some(vec!["cli".to_string()]),
            ..Default::default()
        }],
        ..Default::default()
    };
    let analyzer = ImpactAnalyzer::with_config(&config);
    let analysis = analyzer.analyze_deep_impact("website", None).unwrap();

    // Criticality 99 > 90 forces critical; the injected consumer edge is
    // traversed.
    assert_eq!(analysis.overall_severity, Severity::Critical);
    assert!(analysis.affected.iter().any(|a| a.id == "cli"));
}

#[test]
fn custom_component_can_be_injected() {
    let config = RippleConfig {
        components: vec![ComponentOverride {
            id: "billing-plugin".to_string(),
            criticality: Some(50),
            dependencies: Some(vec!["core".to_string()]),
            ..Default::default()
        }],
        ..Default::default()
    };
    let analyzer = ImpactAnalyzer::with_config(&config);
    let analysis = analyzer.analyze_deep_impact("billing-plugin", None).unwrap();
    assert_eq!(analysis.source, "billing-plugin");
}

#[test]
fn correlation_through_the_facade() {
    let analyzer = ImpactAnalyzer::new();
    let reports: Vec<ErrorReport> = ["cli", "extension", "guard-app"]
        .iter()
        .map(|component| ErrorReport {
            component: component.to_string(),
            message: "TypeError: x is undefined".to_string(),
            file: format!("{component}/src/main.ts"),
            line: Some(7),
        })
        .collect();

    let outcome = analyzer.correlate_errors(&reports);
    assert_eq!(outcome.groups.len(), 1);
    assert_eq!(outcome.groups[0].locations.len(), 3);
}

#[test]
fn analyzer_is_usable_across_threads() {
    let analyzer = std::sync::Arc::new(chain_analyzer());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = analyzer.clone();
            std::thread::spawn(move || analyzer.analyze_deep_impact("A", None).unwrap())
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results[1..] {
        assert_eq!(result.affected.len(), results[0].affected.len());
    }
}
