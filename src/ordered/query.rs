//! Bulk queries over the values of an [`OrderedMap`].
//!
//! Every query visits values in insertion order and never sees keys. None of
//! them mutate the map, and only [`OrderedMap::reduce`] can fail on its own.
//!
//! Closures are run on the caller's thread. A panic inside a closure unwinds
//! through the query untouched; fallible closures go through
//! [`OrderedMap::try_fold`] or [`OrderedMap::try_map`], which hand back the
//! closure's own error.

use super::OrderedMap;
use crate::error::OrderedMapError;

impl<K, V, S> OrderedMap<K, V, S> {
    /// Returns `true` if `predicate` holds for every value.
    ///
    /// Stops at the first value that fails. An empty map returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert!(map.every(|value| *value > 0));
    /// assert!(!map.every(|value| *value > 1));
    ///
    /// let empty: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert!(empty.every(|_| false));
    /// ```
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        self.values().all(predicate)
    }

    /// Returns `true` if `predicate` holds for at least one value.
    ///
    /// Stops at the first value that passes. An empty map returns `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert!(map.some(|value| *value > 2));
    /// assert!(!map.some(|value| *value > 3));
    /// ```
    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        self.values().any(predicate)
    }

    /// Collects every value for which `predicate` holds, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.filter(|value| *value > 1), vec![&2, &3]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&V>
    where
        P: FnMut(&V) -> bool,
    {
        self.values().filter(|&value| predicate(value)).collect()
    }

    /// Returns the first value in insertion order that satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.find(|value| *value >= 2), Some(&2));
    /// assert_eq!(map.find(|value| *value > 3), None);
    /// ```
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Option<&V>
    where
        P: FnMut(&V) -> bool,
    {
        self.values().find(|&value| predicate(value))
    }

    /// Applies `transform` to every value and collects the results in
    /// insertion order.
    ///
    /// The result always has `self.len()` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.map(|value| value * 2), vec![2, 4, 6]);
    /// assert_eq!(map.map(|value| value.to_string()), vec!["1", "2", "3"]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&V) -> U,
    {
        self.values().map(transform).collect()
    }

    /// Applies a fallible `transform` to every value.
    ///
    /// Stops at the first error and returns it as produced by `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", "1"), ("b", "x"), ("c", "3")]);
    /// assert!(map.try_map(|value| value.parse::<i32>()).is_err());
    ///
    /// let map = OrderedMap::from([("a", "1"), ("b", "2")]);
    /// assert_eq!(map.try_map(|value| value.parse::<i32>()), Ok(vec![1, 2]));
    /// ```
    pub fn try_map<U, E, F>(&self, transform: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&V) -> Result<U, E>,
    {
        self.values().map(transform).collect()
    }

    /// Folds the values into one, seeding the accumulator with the first
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedMapError::InvalidOperation`] if the map is empty,
    /// since there is no value to seed the accumulator with. Use
    /// [`OrderedMap::fold`] to supply a seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.reduce(|accumulator, value| accumulator + value), Ok(6));
    ///
    /// let empty: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert!(empty.reduce(|accumulator, value| accumulator + value).is_err());
    /// ```
    pub fn reduce<F>(&self, combine: F) -> Result<V, OrderedMapError>
    where
        V: Clone,
        F: FnMut(V, &V) -> V,
    {
        let mut values = self.values();
        let Some(first) = values.next() else {
            tracing::debug!(method = "reduce", "reduce called on an empty map without a seed");
            return Err(OrderedMapError::empty_reduce());
        };
        Ok(values.fold(first.clone(), combine))
    }

    /// Folds every value into `seed` from left to right.
    ///
    /// The accumulator type may differ from the value type. An empty map
    /// returns `seed` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.fold(0, |accumulator, value| accumulator + value), 6);
    ///
    /// let joined = map.fold(String::new(), |mut accumulator, value| {
    ///     accumulator.push_str(&value.to_string());
    ///     accumulator
    /// });
    /// assert_eq!(joined, "123");
    /// ```
    pub fn fold<B, F>(&self, seed: B, combine: F) -> B
    where
        F: FnMut(B, &V) -> B,
    {
        self.values().fold(seed, combine)
    }

    /// Folds every value into `seed`, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `combine`, unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 200_u8), ("b", 100)]);
    /// let checked = map.try_fold(0_u8, |accumulator, value| {
    ///     accumulator.checked_add(*value).ok_or("overflow")
    /// });
    /// assert_eq!(checked, Err("overflow"));
    /// ```
    pub fn try_fold<B, E, F>(&self, seed: B, combine: F) -> Result<B, E>
    where
        F: FnMut(B, &V) -> Result<B, E>,
    {
        self.values().try_fold(seed, combine)
    }

    /// Returns every value in reverse insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.reverse(), vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Vec<&V> {
        self.values().rev().collect()
    }

    /// Returns a uniformly chosen value, or `None` if the map is empty.
    ///
    /// Uses the thread-local generator from `rand`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let value = map.random().copied();
    /// assert!(matches!(value, Some(1..=3)));
    ///
    /// let empty: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert_eq!(empty.random(), None);
    /// ```
    #[cfg(feature = "random")]
    #[must_use]
    pub fn random(&self) -> Option<&V> {
        self.random_with(&mut rand::rng())
    }

    /// Returns a uniformly chosen value using the supplied generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let mut first = StdRng::seed_from_u64(7);
    /// let mut second = StdRng::seed_from_u64(7);
    /// assert_eq!(map.random_with(&mut first), map.random_with(&mut second));
    /// ```
    #[cfg(feature = "random")]
    pub fn random_with<R>(&self, rng: &mut R) -> Option<&V>
    where
        R: rand::Rng,
    {
        if self.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.len());
        tracing::trace!(index, length = self.len(), "sampled random position");
        self.get_index(index).map(|(_, value)| value)
    }
}
