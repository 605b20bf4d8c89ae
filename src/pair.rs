//! The immutable key/value pair flowing through a map stream.

use serde::{Deserialize, Serialize};

/// An immutable key-value pair.
///
/// `Pair` is the element type of every [`MapStream`]. Two pairs are equal iff
/// both components are equal; transformations produce fresh pairs rather than
/// mutating existing ones.
///
/// [`MapStream`]: crate::MapStream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

/// Shorthand constructor, handy inside `map`/`flat_map` closures.
///
/// ```
/// use mapstream::pair;
///
/// let p = pair("a", 1);
/// assert_eq!((p.key, p.value), ("a", 1));
/// ```
pub fn pair<K, V>(key: K, value: V) -> Pair<K, V> {
    Pair { key, value }
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Flip the components: the key becomes the value and vice versa.
    pub fn swap(self) -> Pair<V, K> {
        Pair {
            key: self.value,
            value: self.key,
        }
    }

    pub fn as_tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    fn from(p: Pair<K, V>) -> Self {
        (p.key, p.value)
    }
}
