//! Top-level Ripple configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CacheConfig, CascadeConfig, ComponentOverride};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RIPPLE_*`)
/// 2. Project config (`ripple.toml` in project root)
/// 3. Compiled defaults
///
/// An absent or partially populated config file is not an error; missing
/// fields fall back to the next layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RippleConfig {
    pub cache: CacheConfig,
    pub cascade: CascadeConfig,
    /// Component criticality overrides and custom component definitions.
    pub components: Vec<ComponentOverride>,
}

impl RippleConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("ripple.toml");
        if project_config_path.exists() {
            let contents = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::Io {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
            debug!(
                path = %project_config_path.display(),
                overrides = config.components.len(),
                "loaded project config"
            );
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Apply `RIPPLE_*` environment variable overrides.
    fn apply_env_overrides(config: &mut RippleConfig) {
        if let Ok(v) = std::env::var("RIPPLE_MAX_DEPTH") {
            if let Ok(depth) = v.parse::<u32>() {
                config.cascade.max_depth = Some(depth);
            }
        }
        if let Ok(v) = std::env::var("RIPPLE_RESULT_CACHE_TTL_MINUTES") {
            if let Ok(ttl) = v.parse::<u64>() {
                config.cache.result_cache_ttl_minutes = Some(ttl);
            }
        }
        if let Ok(v) = std::env::var("RIPPLE_RESULT_CACHE_MAX_ENTRIES") {
            if let Ok(max) = v.parse::<usize>() {
                config.cache.result_cache_max_entries = Some(max);
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &RippleConfig) -> Result<(), ConfigError> {
        if let Some(depth) = config.cascade.max_depth {
            if depth == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "cascade.max_depth".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(max) = config.cache.result_cache_max_entries {
            if max == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "cache.result_cache_max_entries".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(max) = config.cache.similarity_cache_max_entries {
            if max == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "cache.similarity_cache_max_entries".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        for component in &config.components {
            if component.id.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "components.id".to_string(),
                    message: "component id must not be empty".to_string(),
                });
            }
            if let Some(criticality) = component.criticality {
                if criticality > 100 {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("components.{}.criticality", component.id),
                        message: "must be between 0 and 100".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = RippleConfig::from_toml("").unwrap();
        assert_eq!(config.cascade.effective_max_depth(), 5);
        assert_eq!(config.cache.effective_result_cache_max_entries(), 100);
        assert_eq!(config.cache.effective_result_cache_ttl_minutes(), 15);
        assert!(config.components.is_empty());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = RippleConfig::from_toml(
            r#"
            [cascade]
            max_depth = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.cascade.effective_max_depth(), 3);
        assert_eq!(config.cache.effective_result_cache_max_entries(), 100);
    }

    #[test]
    fn test_component_overrides_parse() {
        let config = RippleConfig::from_toml(
            r#"
            [[components]]
            id = "billing-service"
            criticality = 90
            dependencies = ["core"]
            consumers = ["billing-ui"]
            "#,
        )
        .unwrap();
        assert_eq!(config.components.len(), 1);
        assert_eq!(config.components[0].id, "billing-service");
        assert_eq!(config.components[0].criticality, Some(90));
    }

    #[test]
    fn test_rejects_out_of_range_criticality() {
        let result = RippleConfig::from_toml(
            r#"
            [[components]]
            id = "x"
            criticality = 101
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_depth() {
        let result = RippleConfig::from_toml("[cascade]\nmax_depth = 0\n");
        assert!(result.is_err());
    }
}
