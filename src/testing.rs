//! Test support for map-stream pipelines.
//!
//! Builders for test data and assertion functions with detailed mismatch
//! diagnostics:
//!
//! - [`mapping_of`] / [`pairs_of`]: build mappings and pair vectors from
//!   `(key, value)` tuples
//! - [`assert_mapping_equal`]: compare two mappings, reporting missing,
//!   extra, and differing entries
//! - [`assert_pairs_equal_by_key`]: compare pair vectors after sorting by key
//!
//! ```
//! use mapstream::from_map;
//! use mapstream::testing::{assert_mapping_equal, mapping_of};
//!
//! let doubled = from_map(mapping_of(vec![("a", 1), ("b", 2)]))
//!     .map_values(|v| v * 2)
//!     .to_map()
//!     .unwrap();
//! assert_mapping_equal(&doubled, &mapping_of(vec![("a", 2), ("b", 4)]));
//! ```

use crate::pair::Pair;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Build a mapping from `(key, value)` tuples.
pub fn mapping_of<K, V, T>(entries: T) -> HashMap<K, V>
where
    K: Eq + Hash,
    T: IntoIterator<Item = (K, V)>,
{
    entries.into_iter().collect()
}

/// Build a pair vector from `(key, value)` tuples.
pub fn pairs_of<K, V, T>(entries: T) -> Vec<Pair<K, V>>
where
    T: IntoIterator<Item = (K, V)>,
{
    entries.into_iter().map(Pair::from).collect()
}

/// Assert that two mappings are equal.
///
/// # Panics
///
/// Panics with a breakdown of missing keys, extra keys, and entries whose
/// values differ.
pub fn assert_mapping_equal<K, V>(actual: &HashMap<K, V>, expected: &HashMap<K, V>)
where
    K: Debug + Eq + Hash,
    V: Debug + PartialEq,
{
    let missing: Vec<_> = expected
        .keys()
        .filter(|&k| !actual.contains_key(k))
        .collect();
    let extra: Vec<_> = actual
        .keys()
        .filter(|&k| !expected.contains_key(k))
        .collect();
    let differing: Vec<_> = expected
        .iter()
        .filter(|&(k, v)| actual.get(k).is_some_and(|av| av != v))
        .collect();

    assert!(
        missing.is_empty() && extra.is_empty() && differing.is_empty(),
        "Mapping mismatch:\n  Missing keys: {missing:?}\n  Extra keys: {extra:?}\n  Differing entries (key, expected value): {differing:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that two pair vectors are equal after sorting both by key.
///
/// Useful for comparing streams whose pair order is not meaningful (e.g.
/// anything derived from a `HashMap` source).
///
/// # Panics
///
/// Panics if the vectors differ in length or content.
pub fn assert_pairs_equal_by_key<K, V>(mut actual: Vec<Pair<K, V>>, mut expected: Vec<Pair<K, V>>)
where
    K: Debug + Ord,
    V: Debug + PartialEq,
{
    actual.sort_by(|a, b| a.key.cmp(&b.key));
    expected.sort_by(|a, b| a.key.cmp(&b.key));

    assert_eq!(
        actual.len(),
        expected.len(),
        "Pair count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a.key == e.key && a.value == e.value,
            "Pair mismatch at index {i} after sorting by key:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}
