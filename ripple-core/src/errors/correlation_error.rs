//! Error correlation rejections.

use super::error_code::{self, RippleErrorCode};

/// Per-record rejection reasons for malformed error reports.
///
/// Correlation is best-effort over a noisy batch: a bad record is
/// rejected individually and the rest of the batch still correlates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorrelationError {
    #[error("Error report from {component} has an empty message")]
    EmptyMessage { component: String },

    #[error("Error report has an empty component id")]
    EmptyComponent,
}

impl RippleErrorCode for CorrelationError {
    fn error_code(&self) -> &'static str {
        error_code::CORRELATION_ERROR
    }
}
