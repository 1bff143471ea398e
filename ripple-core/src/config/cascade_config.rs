//! Cascade traversal configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for cascade traversal bounds.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CascadeConfig {
    /// Maximum cascade traversal depth. Default: 5.
    ///
    /// Bounds worst-case traversal cost on wide fan-out graphs; nodes at
    /// the cap become terminal leaves rather than errors.
    pub max_depth: Option<u32>,
}

impl CascadeConfig {
    /// Returns the effective maximum depth, defaulting to 5.
    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth
            .unwrap_or(constants::DEFAULT_MAX_CASCADE_DEPTH)
    }
}
