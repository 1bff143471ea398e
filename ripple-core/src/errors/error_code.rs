//! RippleErrorCode trait for embedding hosts.

/// Trait for converting Ripple errors to structured error codes.
/// Every error enum implements this so an embedding host (CLI, editor
/// extension) can dispatch on a stable code string.
pub trait RippleErrorCode {
    /// Returns the stable error code string (e.g., "ANALYSIS_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const ANALYSIS_ERROR: &str = "ANALYSIS_ERROR";
pub const CORRELATION_ERROR: &str = "CORRELATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
