//! Component overrides and custom component definitions.

use serde::{Deserialize, Serialize};

/// An externally supplied component record.
///
/// Serves two purposes: overriding fields of a component already in the
/// catalog (criticality tuning), and registering entirely new custom
/// components with their own edge lists. Overrides must be applied before
/// any analysis run that should observe them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ComponentOverride {
    /// Component id; matches an existing component or defines a new one.
    pub id: String,
    /// Criticality override, 0-100.
    pub criticality: Option<u8>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Upstream dependency ids. Replaces the existing list when present.
    pub dependencies: Option<Vec<String>>,
    /// Downstream consumer ids. Replaces the existing list when present.
    pub consumers: Option<Vec<String>>,
}
