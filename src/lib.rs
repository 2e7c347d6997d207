//! # extended-map
//!
//! An insertion-ordered key-value map with bulk-query operations over its
//! values.
//!
//! ## Overview
//!
//! [`OrderedMap`](ordered::OrderedMap) behaves like a hash map whose
//! iteration order is the order in which keys were first inserted. On top of
//! the usual map operations it offers a small set of queries that walk the
//! values in that order:
//!
//! - **Predicates**: `every`, `some`
//! - **Selection**: `filter`, `find`, `random`
//! - **Transformation**: `map`, `reverse`
//! - **Folding**: `reduce`, `fold`, `try_fold`
//!
//! ## Feature Flags
//!
//! - `random` (default): uniform sampling through `rand`
//! - `fxhash`: [`FxOrderedMap`](ordered::FxOrderedMap) backed by `rustc-hash`
//! - `ahash`: [`AHashOrderedMap`](ordered::AHashOrderedMap) backed by `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use extended_map::prelude::*;
//!
//! let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
//!
//! assert_eq!(map.map(|value| value * 2), vec![2, 4, 6]);
//! assert_eq!(map.filter(|value| *value > 1), vec![&2, &3]);
//! assert_eq!(map.fold(0, |accumulator, value| accumulator + value), 6);
//! assert_eq!(map.reverse(), vec![&3, &2, &1]);
//! assert_eq!(map.find(|value| *value == 2), Some(&2));
//! assert!(map.every(|value| *value > 0));
//! assert!(map.some(|value| *value > 2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use extended_map::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::ordered::*;
}

pub mod error;
pub mod ordered;
