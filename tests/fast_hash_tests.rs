//! Tests for fast hash feature flags.
//!
//! This module checks that the `fxhash` and `ahash` builds of OrderedMap
//! keep the same insertion-order semantics as the default hasher.

#![cfg(any(feature = "fxhash", feature = "ahash"))]

use extended_map::ordered::OrderedMap;
use rstest::rstest;
use std::hash::BuildHasher;

fn exercise<S: BuildHasher + Default>() {
    let mut map: OrderedMap<String, i32, S> = OrderedMap::default();
    for (index, key) in ["gamma", "alpha", "delta", "beta"].into_iter().enumerate() {
        map.insert(key.to_string(), i32::try_from(index).unwrap_or(i32::MAX));
    }
    map.remove("alpha");

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["gamma", "delta", "beta"]);
    assert_eq!(map.get("delta"), Some(&2));
    assert_eq!(map.map(|value| value * 10), vec![0, 20, 30]);
    assert_eq!(map.reduce(|accumulator, value| accumulator + value), Ok(5));
}

fn exercise_large_scale<S: BuildHasher + Default>() {
    let map: OrderedMap<i32, i32, S> = (0..10_000).rev().map(|key| (key, key * 2)).collect();

    assert_eq!(map.len(), 10_000);
    for key in 0..10_000 {
        assert_eq!(map.get(&key), Some(&(key * 2)));
    }
    assert_eq!(map.get_index(0), Some((&9_999, &19_998)));
    assert_eq!(map.find(|value| *value < 10), Some(&8));
}

#[cfg(feature = "fxhash")]
#[rstest]
fn test_fx_ordered_map_semantics() {
    exercise::<rustc_hash::FxBuildHasher>();
    exercise_large_scale::<rustc_hash::FxBuildHasher>();
}

#[cfg(feature = "fxhash")]
#[rstest]
fn test_fx_ordered_map_alias() {
    use extended_map::ordered::FxOrderedMap;

    let mut map: FxOrderedMap<&str, i32> = FxOrderedMap::default();
    map.insert("b", 2);
    map.insert("a", 1);
    assert_eq!(map.reverse(), vec![&1, &2]);
}

#[cfg(feature = "ahash")]
#[rstest]
fn test_ahash_ordered_map_semantics() {
    exercise::<ahash::RandomState>();
    exercise_large_scale::<ahash::RandomState>();
}

#[cfg(feature = "ahash")]
#[rstest]
fn test_ahash_ordered_map_alias() {
    use extended_map::ordered::AHashOrderedMap;

    let mut map: AHashOrderedMap<&str, i32> = AHashOrderedMap::default();
    map.insert("b", 2);
    map.insert("a", 1);
    assert_eq!(map.filter(|value| *value > 1), vec![&2]);
}
