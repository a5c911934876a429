//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec optimized for name-collision lists (usually 1 entry).
pub type SmallVec2<T> = SmallVec<[T; 2]>;

/// SmallVec optimized for select options (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
