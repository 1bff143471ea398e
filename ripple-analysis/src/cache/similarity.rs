//! Memoized Levenshtein distance between strings.
//!
//! The cache exists to avoid recomputing distances for repeated pairs
//! within a correlation run, not for cross-run persistence. Keys are
//! order-independent: `(a, b)` and `(b, a)` resolve to the same entry.
//! Size-bounded, no TTL; distances do not go stale.

use super::bounded::BoundedCache;

/// Order-independent pairwise distance cache.
pub struct SimilarityCache {
    cache: BoundedCache<(String, String), usize>,
}

impl SimilarityCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: BoundedCache::new(max_entries),
        }
    }

    /// Cached distance for the pair, if present.
    pub fn get(&mut self, a: &str, b: &str) -> Option<usize> {
        self.cache.get(&pair_key(a, b)).copied()
    }

    /// Record a distance for the pair; inserting once serves both orderings.
    pub fn set(&mut self, a: &str, b: &str, distance: usize) {
        self.cache.set(pair_key(a, b), distance);
    }

    /// Edit distance through the cache, computing on miss.
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        if let Some(d) = self.get(a, b) {
            return d;
        }
        let d = levenshtein(a, b);
        self.set(a, b, d);
        d
    }

    /// Similarity ratio in [0.0, 1.0]: `1 - distance / max_len`.
    /// Two empty strings are identical.
    pub fn similarity(&mut self, a: &str, b: &str) -> f64 {
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return 1.0;
        }
        1.0 - self.distance(a, b) as f64 / max_len as f64
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Levenshtein edit distance, two-row dynamic programming.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_symmetric_keys() {
        let mut cache = SimilarityCache::new(16);
        cache.set("alpha", "beta", 4);
        assert_eq!(cache.get("beta", "alpha"), Some(4));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distance_memoizes() {
        let mut cache = SimilarityCache::new(16);
        let d1 = cache.distance("kitten", "sitting");
        assert_eq!(d1, 3);
        assert_eq!(cache.len(), 1);
        let d2 = cache.distance("sitting", "kitten");
        assert_eq!(d2, 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_similarity_ratio() {
        let mut cache = SimilarityCache::new(16);
        assert!((cache.similarity("abcd", "abcd") - 1.0).abs() < f64::EPSILON);
        assert!((cache.similarity("", "") - 1.0).abs() < f64::EPSILON);
        // One of four characters differs.
        assert!((cache.similarity("abcd", "abce") - 0.75).abs() < 1e-10);
    }
}
