//! Cache sizing and expiry configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the result and similarity caches.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum entries in the result cache. Default: 100.
    pub result_cache_max_entries: Option<usize>,
    /// Time-to-live for result cache entries, in minutes. Default: 15.
    pub result_cache_ttl_minutes: Option<u64>,
    /// Maximum entries in the string similarity cache. Default: 500.
    pub similarity_cache_max_entries: Option<usize>,
}

impl CacheConfig {
    /// Returns the effective result cache capacity, defaulting to 100.
    pub fn effective_result_cache_max_entries(&self) -> usize {
        self.result_cache_max_entries
            .unwrap_or(constants::DEFAULT_RESULT_CACHE_MAX_ENTRIES)
    }

    /// Returns the effective result cache TTL in minutes, defaulting to 15.
    pub fn effective_result_cache_ttl_minutes(&self) -> u64 {
        self.result_cache_ttl_minutes
            .unwrap_or(constants::DEFAULT_RESULT_CACHE_TTL_MINUTES)
    }

    /// Returns the effective similarity cache capacity, defaulting to 500.
    pub fn effective_similarity_cache_max_entries(&self) -> usize {
        self.similarity_cache_max_entries
            .unwrap_or(constants::DEFAULT_SIMILARITY_CACHE_MAX_ENTRIES)
    }
}
