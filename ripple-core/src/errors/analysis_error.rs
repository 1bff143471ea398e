//! Impact analysis errors.

use super::error_code::{self, RippleErrorCode};

/// Hard failures of `analyze_deep_impact`.
///
/// Traversal-time degradations (unknown downstream consumers, cycles,
/// depth caps) are not errors; they surface as low-confidence leaves in
/// the cascade instead.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Unknown source component: {id}")]
    UnknownSourceComponent { id: String },

    #[error("Source component id must not be empty")]
    EmptySourceId,
}

impl RippleErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        error_code::ANALYSIS_ERROR
    }
}
