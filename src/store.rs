#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// A single resolved application of a relation's function.
///
/// A pair records that the relation observed `value` as the image of `key`.
/// Pairs are immutable once appended to a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair from its two components.
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Swaps the two components.
    ///
    /// Codomain views yield flipped pairs so that the key position always
    /// holds the element being looked up.
    pub fn flip(self) -> Pair<V, K> {
        Pair {
            key: self.value,
            value: self.key,
        }
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    fn from(pair: Pair<K, V>) -> Self {
        (pair.key, pair.value)
    }
}

/// The insertion-ordered record of every resolved pair.
///
/// The store is append-only: pairs are never reordered, replaced, or removed
/// for the lifetime of the owning relation. The store performs no
/// deduplication of its own; callers look a key up before appending, so a
/// key appears at most once.
#[derive(Debug, Clone)]
pub(crate) struct Store<K, V> {
    pairs: Vec<Pair<K, V>>,
}

impl<K, V> Store<K, V> {
    pub(crate) const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Adds a pair at the end of the store.
    pub(crate) fn append(&mut self, pair: Pair<K, V>) {
        self.pairs.push(pair);
    }

    pub(crate) fn count(&self) -> usize {
        self.pairs.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Pair<K, V>> {
        self.pairs.get(index)
    }
}

impl<K: PartialEq, V> Store<K, V> {
    /// Returns the index of the first pair whose key equals `key`, if any.
    pub(crate) fn find_by_key(&self, key: &K) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.key == *key)
    }
}

impl<K, V: PartialEq> Store<K, V> {
    /// Returns the index of the first pair whose value equals `value`, if any.
    pub(crate) fn find_by_value(&self, value: &V) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.value == *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = Store::new();
        store.append(Pair::new(1, "one"));
        store.append(Pair::new(2, "two"));
        store.append(Pair::new(3, "three"));

        assert_eq!(store.count(), 3);
        assert_eq!(store.get(0), Some(&Pair::new(1, "one")));
        assert_eq!(store.get(1), Some(&Pair::new(2, "two")));
        assert_eq!(store.get(2), Some(&Pair::new(3, "three")));
        assert_eq!(store.get(3), None);
    }

    #[test]
    fn find_by_key_returns_first_match() {
        let mut store = Store::new();
        store.append(Pair::new('a', 1));
        store.append(Pair::new('b', 2));

        assert_eq!(store.find_by_key(&'a'), Some(0));
        assert_eq!(store.find_by_key(&'b'), Some(1));
        assert_eq!(store.find_by_key(&'c'), None);
    }

    #[test]
    fn find_by_value_returns_first_match() {
        let mut store = Store::new();
        store.append(Pair::new(3, 9));
        store.append(Pair::new(-3, 9));

        // Insertion order breaks the tie.
        assert_eq!(store.find_by_value(&9), Some(0));
        assert_eq!(store.find_by_value(&4), None);
    }

    #[test]
    fn flip_swaps_components() {
        let pair = Pair::new("key", 42);
        assert_eq!(pair.flip(), Pair::new(42, "key"));
    }

    #[test]
    fn pair_converts_into_tuple() {
        let (key, value): (i32, i32) = Pair::new(2, 4).into();
        assert_eq!((key, value), (2, 4));
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn pair_round_trips_through_json() {
        let pair = Pair::new(3, 9);

        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"key":3,"value":9}"#);

        let parsed: Pair<i32, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pair);
    }
}
