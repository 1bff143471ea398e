//! Error correlation input and output types.

use serde::{Deserialize, Serialize};

use ripple_core::errors::CorrelationError;

/// One observed error, as reported by an external tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorReport {
    /// Component the error was observed in.
    pub component: String,
    /// Raw error message.
    pub message: String,
    /// File the error points at.
    pub file: String,
    /// Line number, when the tool reports one.
    pub line: Option<u32>,
}

/// Where a correlated error was observed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorLocation {
    pub component: String,
    pub file: String,
    pub line: Option<u32>,
}

/// A cluster of error observations believed to share one root cause.
///
/// Only emitted for clusters spanning at least two observations;
/// correlation is meaningless for a single occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelatedGroup {
    /// The normalized message shared by every member.
    pub normalized_message: String,
    /// All observation sites, in input order.
    pub locations: Vec<ErrorLocation>,
    /// Inferred shared root cause.
    pub root_cause: String,
    /// Confidence in the correlation, 0-100.
    pub confidence: u8,
    /// Suggested remediation matching the root-cause inference.
    pub suggested_fix: String,
}

/// Result of one correlation run: groups found plus per-record rejections.
#[derive(Debug, Default)]
pub struct CorrelationOutcome {
    pub groups: Vec<CorrelatedGroup>,
    /// Malformed records, rejected individually without aborting the batch.
    pub rejected: Vec<CorrelationError>,
}
