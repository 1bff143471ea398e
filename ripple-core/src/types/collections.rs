//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for cascade paths (usually <8 hops).
pub type SmallVec8<T> = SmallVec<[T; 8]>;

/// SmallVec optimized for component edge lists (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
