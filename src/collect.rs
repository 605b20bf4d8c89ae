//! Collection of a pair stream into a finalized mapping.
//!
//! This is the one stop in a pipeline where key collisions become observable.
//! [`MapStream::to_map`] is strict: a duplicate key fails the whole collection
//! with [`DuplicateKeyError`]. [`MapStream::to_map_merging`] resolves
//! collisions instead, combining colliding values with a caller-supplied
//! merge function applied in encounter order.

use crate::pair::Pair;
use crate::stream::MapStream;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

/// Error raised when a strict collection encounters a key twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError<K> {
    /// The colliding key.
    pub key: K,
}

impl<K: fmt::Debug> fmt::Display for DuplicateKeyError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate key {:?} in pair stream (collect with a merge function to combine colliding values)",
            self.key
        )
    }
}

impl<K: fmt::Debug> std::error::Error for DuplicateKeyError<K> {}

impl<K, V, I> MapStream<I>
where
    K: Eq + Hash,
    I: Iterator<Item = Pair<K, V>>,
{
    /// Collect the stream into a mapping, failing fast on the first duplicate
    /// key. Silent overwrite is deliberately not an option; callers with
    /// colliding keys either supply a merge function via
    /// [`to_map_merging`](Self::to_map_merging) or feed distinct-key data.
    ///
    /// An empty stream yields an empty mapping.
    ///
    /// ```
    /// use mapstream::from_entries;
    ///
    /// let m = from_entries(vec![("a", 1), ("b", 2)]).to_map().unwrap();
    /// assert_eq!(m["a"], 1);
    ///
    /// let err = from_entries(vec![("a", 1), ("a", 2)]).to_map().unwrap_err();
    /// assert_eq!(err.key, "a");
    /// ```
    pub fn to_map(self) -> Result<HashMap<K, V>, DuplicateKeyError<K>> {
        let mut out = HashMap::with_capacity(self.iter.size_hint().0);
        for p in self.iter {
            match out.entry(p.key) {
                Entry::Vacant(e) => {
                    e.insert(p.value);
                }
                Entry::Occupied(e) => {
                    // the stored key equals the incoming one; surrender it to the error
                    let (key, _) = e.remove_entry();
                    return Err(DuplicateKeyError { key });
                }
            }
        }
        Ok(out)
    }

    /// Collect the stream into a mapping, resolving key collisions with
    /// `merge`. The first pair seen for a key inserts its value directly;
    /// every later pair with the same key replaces the stored value with
    /// `merge(stored, incoming)`, strictly in encounter order.
    ///
    /// Never fails, and always produces exactly one entry per distinct key.
    /// `merge` should be pure; it only needs to be associative or commutative
    /// if the caller wants the result to be independent of collision order.
    ///
    /// ```
    /// use mapstream::{from_entries, merge};
    ///
    /// let m = from_entries(vec![("a", 1), ("a", 5), ("b", 2)])
    ///     .to_map_merging(merge::max);
    /// assert_eq!(m["a"], 5);
    /// assert_eq!(m["b"], 2);
    /// ```
    pub fn to_map_merging<F>(self, mut merge: F) -> HashMap<K, V>
    where
        F: FnMut(V, V) -> V,
    {
        let mut out: HashMap<K, V> = HashMap::with_capacity(self.iter.size_hint().0);
        for p in self.iter {
            match out.remove(&p.key) {
                Some(stored) => {
                    let merged = merge(stored, p.value);
                    out.insert(p.key, merged);
                }
                None => {
                    out.insert(p.key, p.value);
                }
            }
        }
        out
    }

    /// Collect every pair, grouping values under their key in encounter
    /// order. Never fails.
    pub fn to_grouped_map(self) -> HashMap<K, Vec<V>> {
        let mut out: HashMap<K, Vec<V>> = HashMap::new();
        for p in self.iter {
            out.entry(p.key).or_default().push(p.value);
        }
        out
    }
}
