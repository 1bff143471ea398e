//! Bounded caching for analysis results and string distances.

pub mod bounded;
pub mod similarity;

pub use bounded::BoundedCache;
pub use similarity::{levenshtein, SimilarityCache};
