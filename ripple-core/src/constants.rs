//! Shared constants for the Ripple impact analysis engine.

/// Ripple version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default maximum cascade traversal depth.
pub const DEFAULT_MAX_CASCADE_DEPTH: u32 = 5;

/// Default maximum number of entries in the result cache.
pub const DEFAULT_RESULT_CACHE_MAX_ENTRIES: usize = 100;

/// Default time-to-live for result cache entries, in minutes.
pub const DEFAULT_RESULT_CACHE_TTL_MINUTES: u64 = 15;

/// Default maximum number of entries in the similarity cache.
pub const DEFAULT_SIMILARITY_CACHE_MAX_ENTRIES: usize = 500;

/// Maximum criticality score a component can carry.
pub const MAX_CRITICALITY: u8 = 100;

/// Criticality assigned to components registered without an explicit score.
pub const DEFAULT_CRITICALITY: u8 = 50;

// ---- Scoring ----

/// Base confidence for any classified edge.
pub const CONFIDENCE_BASE: u8 = 50;

/// Confidence bonus for direct-dependency and api-consumer edges.
pub const CONFIDENCE_DECLARED_EDGE_BONUS: u8 = 30;

/// Confidence bonus when an error context accompanies the analysis.
pub const CONFIDENCE_ERROR_CONTEXT_BONUS: u8 = 10;

/// Source criticality above which api-consumer edges escalate to high severity.
pub const HIGH_SEVERITY_SOURCE_CRITICALITY: u8 = 85;

/// Target criticality above which a critical error context escalates the edge.
pub const CRITICAL_TARGET_CRITICALITY: u8 = 80;

/// Source criticality above which the aggregate severity is forced to critical.
pub const CRITICAL_SOURCE_CRITICALITY: u8 = 90;

/// Source criticality above which a manual review is recommended.
pub const MANUAL_REVIEW_CRITICALITY: u8 = 85;
