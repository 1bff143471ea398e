//! Data structures shared across the Ripple crates.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet};
