//! Generic bounded cache with optional TTL.
//!
//! One primitive serves both the result cache (size + TTL) and the
//! similarity cache (size only). Eviction pops the oldest entry that has
//! not been touched since insertion; a read refreshes the entry to the
//! most-recently-used end, and a TTL-expired entry is evicted on access.

use std::collections::VecDeque;
use std::hash::Hash;
use std::time::{Duration, Instant};

use ripple_core::types::FxHashMap;

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

/// Size-bounded map with combined LRU/TTL behavior.
pub struct BoundedCache<K, V> {
    map: FxHashMap<K, Entry<V>>,
    // Front = next eviction candidate.
    order: VecDeque<K>,
    max_entries: usize,
    ttl: Option<Duration>,
}

impl<K: Eq + Hash + Clone, V> BoundedCache<K, V> {
    /// Size-bounded cache without time expiry.
    pub fn new(max_entries: usize) -> Self {
        Self::with_ttl(max_entries, None)
    }

    /// Size-bounded cache whose entries expire `ttl` after insertion.
    /// The TTL clock is not reset by reads.
    pub fn with_ttl(max_entries: usize, ttl: Option<Duration>) -> Self {
        Self {
            map: FxHashMap::default(),
            order: VecDeque::new(),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    /// Look up a key. A hit refreshes the entry's eviction position; an
    /// expired entry is evicted and reported as a miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let expired = match self.map.get(key) {
            Some(entry) => self
                .ttl
                .is_some_and(|ttl| entry.inserted_at.elapsed() > ttl),
            None => return None,
        };
        if expired {
            self.remove(key);
            return None;
        }

        self.touch(key);
        self.map.get(key).map(|entry| &entry.value)
    }

    /// Insert a value, evicting the oldest entry first when at capacity.
    /// Re-inserting an existing key replaces the value and restarts its
    /// TTL clock.
    pub fn set(&mut self, key: K, value: V) {
        if self.map.contains_key(&key) {
            self.touch(&key);
        } else {
            if self.map.len() >= self.max_entries {
                self.evict_oldest();
            }
            self.order.push_back(key.clone());
        }
        self.map.insert(
            key,
            Entry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    /// Current entry count.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether a key is present, ignoring expiry and without refreshing.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn touch(&mut self, key: &K) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }

    fn remove(&mut self, key: &K) {
        self.map.remove(key);
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.order.pop_front() {
            self.map.remove(&oldest);
        }
    }
}
