//! Top-level analyzer facade.
//!
//! Owns the frozen graph snapshot and both caches. Traversal itself is
//! synchronous and CPU-bound; the caches are the only shared mutable
//! state, guarded so concurrent callers cannot corrupt eviction
//! bookkeeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::debug;

use ripple_core::config::RippleConfig;
use ripple_core::errors::AnalysisError;

use crate::cache::{BoundedCache, SimilarityCache};
use crate::cascade::{flatten_cascade, CascadeBuilder, ErrorContext, ImpactAnalysis};
use crate::catalog;
use crate::correlation::{self, CorrelationOutcome, ErrorReport};
use crate::graph::ComponentGraph;
use crate::plan;
use crate::report;
use crate::scoring::{self, PairingRules};

/// Snapshot of result-cache hit/miss counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Hit rate in [0.0, 1.0]; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cross-component impact analyzer.
pub struct ImpactAnalyzer {
    graph: ComponentGraph,
    rules: PairingRules,
    max_depth: u32,
    result_cache: Mutex<BoundedCache<String, ImpactAnalysis>>,
    similarity: Mutex<SimilarityCache>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ImpactAnalyzer {
    /// Analyzer over the built-in catalog with default knobs.
    pub fn new() -> Self {
        Self::with_config(&RippleConfig::default())
    }

    /// Analyzer over the built-in catalog plus configured overrides.
    ///
    /// Overrides are applied while building the snapshot, so every
    /// subsequent analysis observes them.
    pub fn with_config(config: &RippleConfig) -> Self {
        let mut builder = catalog::default_catalog();
        for ov in &config.components {
            builder.apply_override(ov);
        }
        Self::with_graph(builder.freeze(), config)
    }

    /// Analyzer over an explicit graph snapshot.
    pub fn with_graph(graph: ComponentGraph, config: &RippleConfig) -> Self {
        let ttl = Duration::from_secs(config.cache.effective_result_cache_ttl_minutes() * 60);
        Self {
            graph,
            rules: PairingRules::builtin(),
            max_depth: config.cascade.effective_max_depth(),
            result_cache: Mutex::new(BoundedCache::with_ttl(
                config.cache.effective_result_cache_max_entries(),
                Some(ttl),
            )),
            similarity: Mutex::new(SimilarityCache::new(
                config.cache.effective_similarity_cache_max_entries(),
            )),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The frozen graph snapshot this analyzer traverses.
    pub fn graph(&self) -> &ComponentGraph {
        &self.graph
    }

    /// Compute the full downstream impact of a change in `source_id`.
    ///
    /// Hard failure when the source itself is unregistered; unknown
    /// downstream consumers degrade softly inside the cascade instead.
    /// Results are cached by source id and error context; a repeat call
    /// within the TTL returns the identical cached value.
    pub fn analyze_deep_impact(
        &self,
        source_id: &str,
        error_context: Option<&ErrorContext>,
    ) -> Result<ImpactAnalysis, AnalysisError> {
        if source_id.trim().is_empty() {
            return Err(AnalysisError::EmptySourceId);
        }
        let Some(source) = self.graph.get(source_id) else {
            return Err(AnalysisError::UnknownSourceComponent {
                id: source_id.to_string(),
            });
        };

        let key = cache_key(source_id, error_context);
        if let Some(cached) = lock(&self.result_cache).get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(source = source_id, "impact analysis served from cache");
            return Ok(cached.clone());
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let tree = CascadeBuilder::new(&self.graph, &self.rules, self.max_depth)
            .build(source_id, error_context);
        let affected = flatten_cascade(&tree);

        let overall_severity = scoring::aggregate_severity(&affected, source.criticality);
        let confidence = scoring::aggregate_confidence(&affected);
        let recommendations = plan::build_recommendations(source, &affected, error_context);
        let validation_plan = plan::build_validation_plan(source_id, &affected);

        debug!(
            source = source_id,
            affected = affected.len(),
            severity = overall_severity.name(),
            confidence,
            "impact analysis computed"
        );

        let analysis = ImpactAnalysis {
            source: source_id.to_string(),
            cascade_depth: tree.depth(),
            cascade_tree: report::render_tree(&tree),
            affected,
            overall_severity,
            confidence,
            recommendations,
            validation_plan,
            timestamp_ms: now_ms(),
        };

        lock(&self.result_cache).set(key, analysis.clone());
        Ok(analysis)
    }

    /// Correlate a batch of cross-component errors into root-cause groups.
    ///
    /// Independent of any cascade run; operates on an arbitrary batch.
    pub fn correlate_errors(&self, reports: &[ErrorReport]) -> CorrelationOutcome {
        correlation::correlate(reports, &mut lock(&self.similarity))
    }

    /// Render the full human-readable report for an analysis.
    pub fn render_report(&self, analysis: &ImpactAnalysis) -> String {
        report::render_report(analysis)
    }

    /// Drop all cached results and distances.
    pub fn clear_caches(&self) {
        lock(&self.result_cache).clear();
        lock(&self.similarity).clear();
    }

    /// Result-cache hit/miss counters.
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ImpactAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

// A poisoned cache mutex only ever loses cached work; recover the guard
// rather than propagating the panic to unrelated callers.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn cache_key(source_id: &str, error_context: Option<&ErrorContext>) -> String {
    let ctx = error_context
        .and_then(|ctx| serde_json::to_string(ctx).ok())
        .unwrap_or_default();
    format!("{source_id}::{ctx}")
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_distinguishes_contexts() {
        let ctx = ErrorContext {
            message: "boom".to_string(),
            file: None,
            severity: crate::scoring::Severity::High,
        };
        let bare = cache_key("core", None);
        let with_ctx = cache_key("core", Some(&ctx));
        assert_ne!(bare, with_ctx);
        assert_eq!(with_ctx, cache_key("core", Some(&ctx)));
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats { hits: 3, misses: 1 };
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
        let empty = CacheStats { hits: 0, misses: 0 };
        assert_eq!(empty.hit_rate(), 0.0);
    }
}
