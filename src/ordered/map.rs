//! Storage and standard map operations for [`OrderedMap`].

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::ops::Index;

/// A hash map that iterates in insertion order.
///
/// Entries live in an owned [`IndexMap`]. Removal always shifts the tail so
/// that insertion order survives deletes.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Hash` and `Eq` for lookups.
/// * `V` - The value type.
/// * `S` - The hash builder. Defaults to the standard `RandomState`.
///
/// # Examples
///
/// ```rust
/// use extended_map::ordered::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("one".to_string(), 1);
/// map.insert("two".to_string(), 2);
///
/// assert_eq!(map.get("one"), Some(&1));
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, S = RandomState> {
    entries: IndexMap<K, V, S>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map: OrderedMap<String, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for at least `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut map = OrderedMap::with_hasher(RandomState::new());
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: IndexMap::with_hasher(hasher),
        }
    }

    /// Creates an empty map with room for `capacity` entries that hashes
    /// keys with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert("key", 42);
    /// assert!(!map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entry at `index` in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// assert_eq!(map.get_index(1), Some((&"b", &2)));
    /// assert_eq!(map.get_index(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get_index(index)
    }

    /// Returns an iterator over key-value pairs in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{}: {}", key, value);
    /// }
    /// ```
    #[must_use]
    pub fn iter(&self) -> OrderedMapIterator<'_, K, V> {
        OrderedMapIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over key-value pairs with mutable values.
    pub fn iter_mut(&mut self) -> OrderedMapIterMut<'_, K, V> {
        OrderedMapIterMut {
            inner: self.entries.iter_mut(),
        }
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.keys()
    }

    /// Returns an iterator over values in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    ///
    /// let sum: i32 = map.values().sum();
    /// assert_eq!(sum, 3);
    /// ```
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.values()
    }

    /// Returns an iterator over mutable values in insertion order.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator {
        self.entries.values_mut()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> OrderedMap<K, V, S> {
    /// Creates a map containing a single key-value pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = OrderedMap::singleton("key".to_string(), 42);
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get("key"), Some(&42));
    /// ```
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self
    where
        S: Default,
    {
        let mut map = Self::default();
        map.insert(key, value);
        map
    }

    /// Inserts a key-value pair.
    ///
    /// A new key is appended at the end of the iteration order. An existing
    /// key keeps its position and its previous value is returned.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// map.insert("b", 2);
    /// assert_eq!(map.insert("a", 10), Some(1));
    ///
    /// let keys: Vec<&str> = map.keys().copied().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but `Hash` and
    /// `Eq` on the borrowed form must match those for the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("hello".to_string(), 42);
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// Entries after the removed one move up a position, so the relative
    /// order of everything else is unchanged.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.remove("b"), Some(2));
    /// assert_eq!(map.remove("b"), None);
    ///
    /// let values: Vec<i32> = map.values().copied().collect();
    /// assert_eq!(values, vec![1, 3]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.shift_remove(key)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over key-value pairs of an [`OrderedMap`].
pub struct OrderedMapIterator<'a, K, V> {
    inner: indexmap::map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for OrderedMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedMapIterator<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIterator<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for OrderedMapIterator<'_, K, V> {}

/// An iterator over key-value pairs of an [`OrderedMap`] with mutable values.
pub struct OrderedMapIterMut<'a, K, V> {
    inner: indexmap::map::IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for OrderedMapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedMapIterMut<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIterMut<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for OrderedMapIterMut<'_, K, V> {}

/// An owning iterator over key-value pairs of an [`OrderedMap`].
pub struct OrderedMapIntoIterator<K, V> {
    inner: indexmap::map::IntoIter<K, V>,
}

impl<K, V> Iterator for OrderedMapIntoIterator<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedMapIntoIterator<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIntoIterator<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for OrderedMapIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self {
            entries: IndexMap::default(),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for OrderedMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for OrderedMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = OrderedMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedMapIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut OrderedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = OrderedMapIterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Panics if the key is not present, like the standard maps.
impl<K, V, Q, S> Index<&Q> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        &self.entries[key]
    }
}

// Order-sensitive: the same entries inserted in a different order compare unequal.
impl<K: PartialEq, V: PartialEq, S> PartialEq for OrderedMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, S> Eq for OrderedMap<K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for OrderedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for OrderedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let map: OrderedMap<&str, i32> = OrderedMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.iter().next(), None);
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut map = OrderedMap::new();
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);

        let entries: Vec<(&str, i32)> = map.iter().map(|(key, value)| (*key, *value)).collect();
        assert_eq!(entries, vec![("c", 3), ("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(map.insert("a", 100), Some(1));

        let entries: Vec<(&str, i32)> = map.iter().map(|(key, value)| (*key, *value)).collect();
        assert_eq!(entries, vec![("a", 100), ("b", 2), ("c", 3)]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut map = OrderedMap::from([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);
        assert_eq!(map.remove(&2), Some('b'));

        let keys: Vec<i32> = map.keys().copied().collect();
        assert_eq!(keys, vec![1, 3, 4]);
        assert_eq!(map.get_index(1), Some((&3, &'c')));
    }

    #[test]
    fn test_reinsert_after_remove_goes_to_end() {
        let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
        map.remove("a");
        map.insert("a", 1);

        let keys: Vec<&str> = map.keys().copied().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_clear() {
        let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains_key("a"));
    }

    #[test]
    fn test_get_mut_and_values_mut() {
        let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
        if let Some(value) = map.get_mut("a") {
            *value = 10;
        }
        for value in map.values_mut() {
            *value += 1;
        }
        assert_eq!(map["a"], 11);
        assert_eq!(map["b"], 3);
    }

    #[test]
    fn test_iter_is_double_ended_and_exact_size() {
        let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let mut iterator = map.iter();
        assert_eq!(iterator.len(), 3);
        assert_eq!(iterator.next_back(), Some((&"c", &3)));
        assert_eq!(iterator.next(), Some((&"a", &1)));
        assert_eq!(iterator.len(), 1);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let forward = OrderedMap::from([("a", 1), ("b", 2)]);
        let backward = OrderedMap::from([("b", 2), ("a", 1)]);
        let same = OrderedMap::from([("a", 1), ("b", 2)]);

        assert_eq!(forward, same);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_debug_uses_map_form() {
        let map = OrderedMap::from([("a", 1), ("b", 2)]);
        assert_eq!(format!("{map:?}"), r#"{"a": 1, "b": 2}"#);
    }

    #[test]
    #[should_panic]
    fn test_index_missing_key_panics() {
        let map = OrderedMap::from([("a", 1)]);
        let _value = map["missing"];
    }
}
