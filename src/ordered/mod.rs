//! Insertion-ordered map with bulk-query operations.
//!
//! This module provides [`OrderedMap`], a hash map that remembers the order
//! in which keys were first inserted, together with queries that walk its
//! values in that order.
//!
//! # Ordering Rules
//!
//! - Inserting a new key appends it at the end.
//! - Overwriting an existing key keeps it at its original position.
//! - Removing a key shifts the following entries down by one, so the
//!   relative order of the remaining entries never changes.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity       |
//! |----------------------------|------------------|
//! | `insert`                   | O(1) amortized   |
//! | `get` / `contains_key`     | O(1)             |
//! | `remove`                   | O(n)             |
//! | `get_index`                | O(1)             |
//! | `every` / `some` / `find`  | O(n) worst case  |
//! | `filter` / `map` / `fold`  | O(n)             |
//! | `reverse`                  | O(n)             |
//! | `random`                   | O(1)             |
//!
//! # Examples
//!
//! ```rust
//! use extended_map::ordered::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//! map.insert("c", 3);
//!
//! // Iteration follows insertion order, not key order
//! let keys: Vec<&str> = map.keys().copied().collect();
//! assert_eq!(keys, vec!["b", "a", "c"]);
//!
//! // Queries see values only
//! assert_eq!(map.filter(|value| value % 2 == 1), vec![&1, &3]);
//! ```

mod map;
mod query;

pub use map::{OrderedMap, OrderedMapIntoIterator, OrderedMapIterMut, OrderedMapIterator};

/// An [`OrderedMap`] hashed with `rustc-hash`'s Fx hasher.
///
/// Faster than the default SipHash for small keys, but not resistant to
/// hash flooding.
#[cfg(feature = "fxhash")]
pub type FxOrderedMap<K, V> = OrderedMap<K, V, rustc_hash::FxBuildHasher>;

/// An [`OrderedMap`] hashed with `ahash`.
#[cfg(feature = "ahash")]
pub type AHashOrderedMap<K, V> = OrderedMap<K, V, ahash::RandomState>;
