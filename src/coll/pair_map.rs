//! An insertion-ordered map backed by a pair vector.

use crate::engine::{Pairs, Reducer, Reduction};

/// A map that remembers the order in which keys first arrived.
///
/// Entries live in a plain vector, so iteration replays insertion order
/// exactly and equality is order-sensitive. Updating an existing key
/// replaces the value in place without moving the entry; removal closes
/// the gap. Lookup scans linearly, which favors the small, ordered
/// records this library shapes rather than large hash workloads.
///
/// # Examples
///
/// ```rust
/// use xduce::pair_map;
///
/// let mut scores = pair_map! {
///     "alice" => 10,
///     "bob" => 7,
/// };
///
/// scores.insert("alice", 12);
/// scores.insert("carol", 3);
///
/// let names: Vec<&str> = scores.keys().copied().collect();
/// assert_eq!(names, vec!["alice", "bob", "carol"]);
/// assert_eq!(scores.get(&"alice"), Some(&12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> PairMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the map holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates values mutably in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, value)| value)
    }
}

impl<K: PartialEq, V> PairMap<K, V> {
    /// Inserts a pair, keeping an existing key at its original position.
    ///
    /// Returns the value the key previously held, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(held, _)| *held == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(held, _)| held == key)
            .map(|(_, value)| value)
    }

    /// Looks up the value stored under `key`, mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(held, _)| *held == *key)
            .map(|(_, value)| value)
    }

    /// Returns `true` when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.iter().any(|(held, _)| held == key)
    }

    /// Removes `key` and closes the gap, preserving the relative order of
    /// the remaining entries.
    ///
    /// Returns the removed value, or `None` when the key was absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let position = self.entries.iter().position(|(held, _)| held == key)?;
        Some(self.entries.remove(position).1)
    }

    /// Returns the value under `key`, inserting `default()` first when the
    /// key is new.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let position = match self.entries.iter().position(|(held, _)| *held == key) {
            Some(position) => position,
            None => {
                self.entries.push((key, default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    /// Folds another map into this one.
    ///
    /// Keys new to `self` are appended in `other`'s order. For keys present
    /// on both sides, `combine` receives the existing value and the
    /// incoming one, and its result stays at the existing key's position.
    pub fn merge_with<F>(&mut self, other: Self, mut combine: F)
    where
        F: FnMut(V, V) -> V,
    {
        for (key, incoming) in other {
            match self.entries.iter().position(|(held, _)| *held == key) {
                Some(position) => {
                    let (held, existing) = self.entries.remove(position);
                    self.entries.insert(position, (held, combine(existing, incoming)));
                }
                None => self.entries.push((key, incoming)),
            }
        }
    }
}

impl<K, V> Default for PairMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for PairMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for PairMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for PairMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a PairMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = PairMapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        PairMapIter {
            entries: self.entries.iter(),
        }
    }
}

/// Borrowing iterator over a [`PairMap`] in insertion order.
#[derive(Debug, Clone)]
pub struct PairMapIter<'a, K, V> {
    entries: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for PairMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for PairMapIter<'_, K, V> {}

impl<K, V> Pairs for PairMap<K, V> {
    type Key = K;
    type Value = V;
    type IntoPairs = std::vec::IntoIter<(K, V)>;

    fn into_pairs(self) -> Self::IntoPairs {
        self.entries.into_iter()
    }
}

impl<'a, K: Clone, V: Clone> Pairs for &'a PairMap<K, V> {
    type Key = K;
    type Value = V;
    type IntoPairs = ClonedPairs<'a, K, V>;

    fn into_pairs(self) -> Self::IntoPairs {
        ClonedPairs {
            entries: self.entries.iter(),
        }
    }
}

/// Cloning pair iterator used when a [`PairMap`] is traversed by reference.
#[derive(Debug, Clone)]
pub struct ClonedPairs<'a, K, V> {
    entries: std::slice::Iter<'a, (K, V)>,
}

impl<K: Clone, V: Clone> Iterator for ClonedPairs<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for PairMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Assoc step
// =============================================================================

/// A base step that stores every pair into a [`PairMap`] keyed as given.
///
/// The keyed counterpart of [`Append`](crate::engine::Append): where
/// `Append` discards keys and grows a vector, `Assoc` keeps them and
/// grows an insertion-ordered map. Repeated keys overwrite in place, so
/// the last value for a key wins while the key holds its first position.
///
/// # Examples
///
/// ```rust
/// use xduce::coll::{Assoc, PairMap};
/// use xduce::engine::{IterPairs, identity, transduce};
///
/// let source = IterPairs::new([("a", 1), ("b", 2), ("a", 3)].into_iter());
/// let map: PairMap<&str, i32> = transduce(identity(), Assoc::new(), PairMap::new(), source);
///
/// assert_eq!(map.get(&"a"), Some(&3));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Assoc;

impl Assoc {
    /// Creates the step.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<K: PartialEq, V> Reducer<K, V> for Assoc {
    type Acc = PairMap<K, V>;

    fn step(&mut self, mut accumulated: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        accumulated.insert(key, value);
        Reduction::Continue(accumulated)
    }
}

/// Builds a [`PairMap`] from `key => value` entries in writing order.
///
/// Later entries overwrite earlier ones with the same key, exactly as
/// repeated [`PairMap::insert`] calls would.
///
/// # Examples
///
/// ```rust
/// use xduce::pair_map;
///
/// let config = pair_map! {
///     "retries" => 3,
///     "timeout" => 30,
/// };
///
/// assert_eq!(config.get(&"timeout"), Some(&30));
/// ```
#[macro_export]
macro_rules! pair_map {
    () => {
        $crate::coll::PairMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::coll::PairMap::new();
        $(map.insert($key, $value);)+
        map
    }};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{identity, transduce};
    use rstest::rstest;

    #[test]
    fn insert_preserves_first_position_on_update() {
        let mut map = PairMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);

        assert_eq!(map.insert("b", 20), Some(2));

        let entries: Vec<(&str, i32)> = map.into_iter().collect();
        assert_eq!(entries, vec![("a", 1), ("b", 20), ("c", 3)]);
    }

    #[test]
    fn remove_closes_the_gap() {
        let mut map: PairMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

        assert_eq!(map.remove(&"b"), Some(2));
        assert_eq!(map.remove(&"b"), None);

        let keys: Vec<&str> = map.keys().copied().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[rstest]
    #[case::absent("z", None)]
    #[case::present("b", Some(2))]
    fn get_scans_by_key(#[case] key: &str, #[case] expected: Option<i32>) {
        let map: PairMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.get(&key).copied(), expected);
    }

    #[test]
    fn from_iterator_folds_duplicates_like_repeated_inserts() {
        let map: PairMap<&str, i32> = [("x", 1), ("y", 2), ("x", 9)].into_iter().collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"x"), Some(&9));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let forward: PairMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let backward: PairMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();

        assert_ne!(forward, backward);
        assert_eq!(forward, forward.clone());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut map: PairMap<&str, i32> = [("hits", 0)].into_iter().collect();
        if let Some(count) = map.get_mut(&"hits") {
            *count += 1;
        }
        assert_eq!(map.get(&"hits"), Some(&1));
    }

    #[test]
    fn get_or_insert_with_creates_once() {
        let mut map: PairMap<&str, Vec<i32>> = PairMap::new();
        map.get_or_insert_with("bucket", Vec::new).push(1);
        map.get_or_insert_with("bucket", Vec::new).push(2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"bucket"), Some(&vec![1, 2]));
    }

    #[test]
    fn merge_with_combines_at_the_existing_position() {
        let mut base: PairMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let overlay: PairMap<&str, i32> = [("b", 10), ("c", 4)].into_iter().collect();

        base.merge_with(overlay, |existing, incoming| existing + incoming);

        let entries: Vec<(&str, i32)> = base.into_iter().collect();
        assert_eq!(entries, vec![("a", 1), ("b", 12), ("c", 4)]);
    }

    #[test]
    fn assoc_step_collects_keyed_pairs() {
        let source: PairMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let collected = transduce(identity(), Assoc::new(), PairMap::new(), source);

        assert_eq!(collected.get(&"a"), Some(&1));
        assert_eq!(collected.get(&"b"), Some(&2));
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn borrowed_traversal_clones_pairs() {
        let map: PairMap<String, i32> = [(String::from("k"), 5)].into_iter().collect();
        let pairs: Vec<(String, i32)> = (&map).into_pairs().collect();

        assert_eq!(pairs, vec![(String::from("k"), 5)]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn macro_matches_builder_calls() {
        let by_macro = pair_map! { "a" => 1, "b" => 2 };

        let mut by_hand = PairMap::new();
        by_hand.insert("a", 1);
        by_hand.insert("b", 2);

        assert_eq!(by_macro, by_hand);

        let empty: PairMap<u8, u8> = pair_map! {};
        assert_eq!(empty, PairMap::new());
    }
}
