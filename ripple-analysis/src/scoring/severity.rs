//! Ordinal severity ratings.

use serde::{Deserialize, Serialize};

/// How serious an impact is, per node or aggregate.
///
/// Ordered: `Low < Medium < High < Critical`, so severity values sort
/// directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Glyph used by the text report renderer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Low => "·",
            Self::Medium => "▪",
            Self::High => "▲",
            Self::Critical => "✖",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
