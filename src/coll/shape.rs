//! The shape union and the operations dispatched over it.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::coll::error::{CollectionError, InvalidArgumentError, UnsupportedShapeError};
use crate::coll::key::Key;
use crate::coll::lazy_seq::{LazyPairs, LazySeq};
use crate::coll::pair_map::{Assoc, PairMap};
use crate::engine::{Append, Emit, Pairs, Reducer, Transducer, transduce};
use crate::xform::{
    filter, flat_map, map, map_entries, partition_by, reindex, scan, skip, skip_while, split_every,
    take, take_while,
};

/// A collection of values behind one of three shapes.
///
/// Every operation is written once against the pair stream and dispatched
/// by shape: sequences run eagerly through the [`Append`] step and come
/// back densely indexed, maps run eagerly through the [`Assoc`] step and
/// keep their surviving keys in order, and lazy sequences defer the whole
/// pipeline by composing it onto their factory. No operation mutates its
/// input; each returns a fresh collection of the appropriate shape.
///
/// # Examples
///
/// ```rust
/// use xduce::coll::Coll;
/// use xduce::pair_map;
///
/// let seq: Coll<String, i32> = Coll::from(vec![1, 2, 3, 4, 5]);
/// let doubled = seq.map(|n| n * 2).take(3);
/// assert_eq!(doubled.values(), vec![2, 4, 6]);
///
/// let named: Coll<&str, i32> = Coll::from(pair_map! { "a" => 1, "b" => 2, "c" => 3 });
/// let kept = named.filter(|n| *n != 2);
/// assert_eq!(kept.keys().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub enum Coll<K, V> {
    /// A densely indexed sequence of values.
    Seq(Vec<V>),
    /// An insertion-ordered keyed map.
    Map(PairMap<K, V>),
    /// A deferred sequence described by a factory.
    Lazy(LazySeq<K, V>),
}

impl<K, V> From<Vec<V>> for Coll<K, V> {
    fn from(values: Vec<V>) -> Self {
        Self::Seq(values)
    }
}

impl<K, V> From<PairMap<K, V>> for Coll<K, V> {
    fn from(entries: PairMap<K, V>) -> Self {
        Self::Map(entries)
    }
}

impl<K, V> From<LazySeq<K, V>> for Coll<K, V> {
    fn from(lazy: LazySeq<K, V>) -> Self {
        Self::Lazy(lazy)
    }
}

// =============================================================================
// Pair traversal
// =============================================================================

type SeqPairs<K, V> =
    std::iter::Map<std::iter::Enumerate<std::vec::IntoIter<V>>, fn((usize, V)) -> (Key<K>, V)>;
type MapPairs<K, V> = std::iter::Map<std::vec::IntoIter<(K, V)>, fn((K, V)) -> (Key<K>, V)>;

/// The unified pair iterator behind a consumed [`Coll`].
///
/// Sequence elements arrive as [`Key::Index`] pairs, map entries as
/// [`Key::Name`] pairs, and a lazy collection contributes one fresh
/// traversal of its factory.
#[derive(Debug)]
pub enum CollPairs<K, V> {
    /// Pairs from a sequence, keyed by position.
    Seq(SeqPairs<K, V>),
    /// Pairs from a map, keyed by name.
    Map(MapPairs<K, V>),
    /// Pairs from one run of a lazy factory.
    Lazy(LazyPairs<K, V>),
}

impl<K, V> CollPairs<K, V> {
    fn from_seq(values: Vec<V>) -> Self {
        let tag: fn((usize, V)) -> (Key<K>, V) = |(position, value)| (Key::Index(position), value);
        Self::Seq(values.into_iter().enumerate().map(tag))
    }

    fn from_map(entries: PairMap<K, V>) -> Self {
        let tag: fn((K, V)) -> (Key<K>, V) = |(name, value)| (Key::Name(name), value);
        Self::Map(entries.into_iter().map(tag))
    }
}

impl<K, V> Iterator for CollPairs<K, V> {
    type Item = (Key<K>, V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Seq(pairs) => pairs.next(),
            Self::Map(pairs) => pairs.next(),
            Self::Lazy(pairs) => pairs.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Seq(pairs) => pairs.size_hint(),
            Self::Map(pairs) => pairs.size_hint(),
            Self::Lazy(pairs) => pairs.size_hint(),
        }
    }
}

impl<K, V> Pairs for Coll<K, V> {
    type Key = Key<K>;
    type Value = V;
    type IntoPairs = CollPairs<K, V>;

    fn into_pairs(self) -> Self::IntoPairs {
        match self {
            Self::Seq(values) => CollPairs::from_seq(values),
            Self::Map(entries) => CollPairs::from_map(entries),
            Self::Lazy(lazy) => CollPairs::Lazy(lazy.iterate()),
        }
    }
}

// =============================================================================
// Queries and conversions
// =============================================================================

impl<K, V> Coll<K, V> {
    /// Borrows the backing vector of a sequence.
    #[must_use]
    pub const fn as_seq(&self) -> Option<&Vec<V>> {
        match self {
            Self::Seq(values) => Some(values),
            _ => None,
        }
    }

    /// Borrows the backing map of a keyed collection.
    #[must_use]
    pub const fn as_map(&self) -> Option<&PairMap<K, V>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns `true` for the deferred shape.
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Counts the elements, running a lazy factory to exhaustion.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Seq(values) => values.len(),
            Self::Map(entries) => entries.len(),
            Self::Lazy(lazy) => lazy.iterate().count(),
        }
    }

    /// Returns `true` when the collection holds no elements.
    ///
    /// On a lazy collection this pulls at most one element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Seq(values) => values.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Lazy(lazy) => lazy.iterate().next().is_none(),
        }
    }

    /// The first value in traversal order, pulling at most one element
    /// from a lazy factory.
    #[must_use]
    pub fn first(&self) -> Option<V>
    where
        V: Clone,
    {
        match self {
            Self::Seq(values) => values.first().cloned(),
            Self::Map(entries) => entries.values().next().cloned(),
            Self::Lazy(lazy) => lazy.iterate().next().map(|(_, value)| value),
        }
    }

    /// The first value satisfying `predicate`, stopping as soon as one is
    /// found.
    pub fn find_first<P>(&self, mut predicate: P) -> Option<V>
    where
        P: FnMut(&V) -> bool,
        V: Clone,
    {
        match self {
            Self::Seq(values) => values.iter().find(|value| predicate(value)).cloned(),
            Self::Map(entries) => entries.values().find(|value| predicate(value)).cloned(),
            Self::Lazy(lazy) => lazy
                .iterate()
                .map(|(_, value)| value)
                .find(|value| predicate(value)),
        }
    }

    /// Returns `true` when any value satisfies `predicate`, stopping at
    /// the first hit.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        match self {
            Self::Seq(values) => values.iter().any(|value| predicate(value)),
            Self::Map(entries) => entries.values().any(|value| predicate(value)),
            Self::Lazy(lazy) => lazy.iterate().any(|(_, value)| predicate(&value)),
        }
    }

    /// Returns `true` when every value satisfies `predicate`, stopping at
    /// the first miss.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        match self {
            Self::Seq(values) => values.iter().all(|value| predicate(value)),
            Self::Map(entries) => entries.values().all(|value| predicate(value)),
            Self::Lazy(lazy) => lazy.iterate().all(|(_, value)| predicate(&value)),
        }
    }

    /// Returns `true` when `target` occurs among the values.
    pub fn contains_value(&self, target: &V) -> bool
    where
        V: PartialEq,
    {
        self.any(|value| value == target)
    }

    /// Consumes the collection into tagged pairs in traversal order.
    #[must_use]
    pub fn to_pairs(self) -> Vec<(Key<K>, V)> {
        self.into_pairs().collect()
    }

    /// Consumes the collection into its keys in traversal order.
    #[must_use]
    pub fn keys(self) -> Vec<Key<K>> {
        self.into_pairs().map(|(key, _)| key).collect()
    }

    /// Consumes the collection into its values in traversal order.
    #[must_use]
    pub fn values(self) -> Vec<V> {
        self.into_pairs().map(|(_, value)| value).collect()
    }

    /// Rebuilds the collection as a dense sequence of its values.
    #[must_use]
    pub fn to_seq(self) -> Self {
        match self {
            Self::Seq(_) => self,
            other => Self::Seq(other.values()),
        }
    }
}

// =============================================================================
// Shape-dispatched operations
// =============================================================================

impl<K: PartialEq + 'static, V: 'static> Coll<K, V> {
    /// Rewrites every value, keeping keys and shape.
    ///
    /// Sequences come back densely indexed, maps keep their keys in
    /// order, and a lazy collection stays lazy with the mapping deferred.
    #[must_use]
    pub fn map<W, F>(self, function: F) -> Coll<K, W>
    where
        W: 'static,
        F: FnMut(V) -> W + Clone + 'static,
    {
        match self {
            Self::Seq(values) => Coll::Seq(transduce(map(function), Append, Vec::new(), values)),
            Self::Map(entries) => {
                Coll::Map(transduce(map(function), Assoc, PairMap::new(), entries))
            }
            Self::Lazy(lazy) => Coll::Lazy(lazy.via(map(function))),
        }
    }

    /// Keeps the values satisfying `predicate`, preserving surviving keys
    /// on maps and reindexing sequences densely.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&V) -> bool + Clone + 'static,
    {
        match self {
            Self::Seq(values) => {
                Self::Seq(transduce(filter(predicate), Append, Vec::new(), values))
            }
            Self::Map(entries) => {
                Self::Map(transduce(filter(predicate), Assoc, PairMap::new(), entries))
            }
            Self::Lazy(lazy) => Self::Lazy(lazy.via(filter(predicate))),
        }
    }

    /// Keeps the first `count` elements.
    ///
    /// `take(0)` never touches the source; a lazy collection of any size
    /// becomes an empty one without its factory running.
    #[must_use]
    pub fn take(self, count: usize) -> Self {
        if count == 0 {
            return self.emptied();
        }
        match self {
            Self::Seq(values) => Self::Seq(transduce(take(count), Append, Vec::new(), values)),
            Self::Map(entries) => {
                Self::Map(transduce(take(count), Assoc, PairMap::new(), entries))
            }
            Self::Lazy(lazy) => Self::Lazy(lazy.via(take(count))),
        }
    }

    /// Keeps the leading run of elements satisfying `predicate`.
    #[must_use]
    pub fn take_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&V) -> bool + Clone + 'static,
    {
        match self {
            Self::Seq(values) => {
                Self::Seq(transduce(take_while(predicate), Append, Vec::new(), values))
            }
            Self::Map(entries) => {
                Self::Map(transduce(take_while(predicate), Assoc, PairMap::new(), entries))
            }
            Self::Lazy(lazy) => Self::Lazy(lazy.via(take_while(predicate))),
        }
    }

    /// Drops the first `count` elements.
    #[must_use]
    pub fn skip(self, count: usize) -> Self {
        match self {
            Self::Seq(values) => Self::Seq(transduce(skip(count), Append, Vec::new(), values)),
            Self::Map(entries) => {
                Self::Map(transduce(skip(count), Assoc, PairMap::new(), entries))
            }
            Self::Lazy(lazy) => Self::Lazy(lazy.via(skip(count))),
        }
    }

    /// Drops the leading run of elements satisfying `predicate`.
    #[must_use]
    pub fn skip_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&V) -> bool + Clone + 'static,
    {
        match self {
            Self::Seq(values) => {
                Self::Seq(transduce(skip_while(predicate), Append, Vec::new(), values))
            }
            Self::Map(entries) => {
                Self::Map(transduce(skip_while(predicate), Assoc, PairMap::new(), entries))
            }
            Self::Lazy(lazy) => Self::Lazy(lazy.via(skip_while(predicate))),
        }
    }

    /// Folds a running state over the values, emitting each intermediate
    /// state under the input's key.
    #[must_use]
    pub fn scan<B, F>(self, initial: B, function: F) -> Coll<K, B>
    where
        B: Clone + 'static,
        F: FnMut(B, V) -> B + Clone + 'static,
    {
        match self {
            Self::Seq(values) => Coll::Seq(transduce(
                scan(initial, function),
                Append,
                Vec::new(),
                values,
            )),
            Self::Map(entries) => Coll::Map(transduce(
                scan(initial, function),
                Assoc,
                PairMap::new(),
                entries,
            )),
            Self::Lazy(lazy) => Coll::Lazy(lazy.via(scan(initial, function))),
        }
    }

    /// Expands every value and splices the expansions into one densely
    /// indexed result.
    ///
    /// The output is positional for every input shape, since expansion
    /// gives a single input key to several output values.
    #[must_use]
    pub fn flat_map<W, I, F>(self, function: F) -> Coll<K, W>
    where
        K: Clone,
        W: 'static,
        I: IntoIterator<Item = W>,
        F: FnMut(V) -> I + Clone + 'static,
    {
        match self {
            Self::Seq(values) => {
                Coll::Seq(transduce(flat_map(function), Append, Vec::new(), values))
            }
            Self::Map(entries) => {
                Coll::Seq(transduce(flat_map(function), Append, Vec::new(), entries))
            }
            Self::Lazy(lazy) => {
                let stage = Transducer::<Key<K>, V>::then(
                    Transducer::<Key<K>, V>::then(flat_map(function), reindex()),
                    map_entries(|position, value| (Key::Index(position), value)),
                );
                Coll::Lazy(lazy.via(stage))
            }
        }
    }

    /// Groups consecutive values whose discriminator agrees, yielding a
    /// sequence of sub-collections.
    ///
    /// On a sequence the groups are sequences; on a map each group is a
    /// sub-map carrying the original keys; a lazy collection stays lazy
    /// and emits its groups as sequences. The trailing group is emitted
    /// when input ends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xduce::coll::Coll;
    ///
    /// let runs: Coll<String, i32> = Coll::from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    /// let grouped = runs.partition_by(|n| n / 3);
    ///
    /// let groups: Vec<Vec<i32>> = grouped
    ///     .values()
    ///     .into_iter()
    ///     .map(Coll::values)
    ///     .collect();
    /// assert_eq!(
    ///     groups,
    ///     vec![vec![1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9, 10]]
    /// );
    /// ```
    #[must_use]
    pub fn partition_by<D, F>(self, discriminator: F) -> Coll<K, Self>
    where
        D: PartialEq + 'static,
        F: FnMut(&V) -> D + Clone + 'static,
    {
        match self {
            Self::Seq(values) => {
                let groups: Vec<Vec<V>> = transduce(
                    partition_by(discriminator),
                    Append,
                    Vec::new(),
                    values,
                );
                Coll::Seq(groups.into_iter().map(Self::Seq).collect())
            }
            Self::Map(entries) => {
                let mut by_value = discriminator;
                let pairs: Vec<(K, V)> = entries.into_iter().collect();
                let groups: Vec<Vec<(K, V)>> = transduce(
                    partition_by(move |pair: &(K, V)| by_value(&pair.1)),
                    Append,
                    Vec::new(),
                    pairs,
                );
                Coll::Seq(
                    groups
                        .into_iter()
                        .map(|group| Self::Map(group.into_iter().collect()))
                        .collect(),
                )
            }
            Self::Lazy(lazy) => {
                let stage = Transducer::<Key<K>, V>::then(
                    partition_by(discriminator),
                    map_entries(|position, group| (Key::Index(position), Self::Seq(group))),
                );
                Coll::Lazy(lazy.via(stage))
            }
        }
    }

    /// Splits the collection into chunks of `size` elements, the final
    /// chunk possibly shorter.
    ///
    /// Chunk shapes follow the same rule as [`partition_by`]: sub-maps
    /// for map input, sequences otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] when `size` is zero.
    ///
    /// [`partition_by`]: Coll::partition_by
    pub fn split_every(self, size: usize) -> Result<Coll<K, Self>, CollectionError> {
        let Some(size) = NonZeroUsize::new(size) else {
            return Err(InvalidArgumentError {
                operation: "split_every",
                message: "chunk size must be positive",
            }
            .into());
        };
        Ok(match self {
            Self::Seq(values) => {
                let chunks: Vec<Vec<V>> =
                    transduce(split_every(size), Append, Vec::new(), values);
                Coll::Seq(chunks.into_iter().map(Self::Seq).collect())
            }
            Self::Map(entries) => {
                let pairs: Vec<(K, V)> = entries.into_iter().collect();
                let chunks: Vec<Vec<(K, V)>> =
                    transduce(split_every(size), Append, Vec::new(), pairs);
                Coll::Seq(
                    chunks
                        .into_iter()
                        .map(|chunk| Self::Map(chunk.into_iter().collect()))
                        .collect(),
                )
            }
            Self::Lazy(lazy) => {
                let stage = Transducer::<Key<K>, V>::then(
                    split_every(size),
                    map_entries(|position, chunk| (Key::Index(position), Self::Seq(chunk))),
                );
                Coll::Lazy(lazy.via(stage))
            }
        })
    }

    /// Buckets values by a derived key into a map of sub-collections.
    ///
    /// Unlike [`partition_by`](Coll::partition_by), grouping is global:
    /// all values sharing a discriminator land in one bucket regardless of
    /// adjacency. Buckets appear in first-seen order. Map input keeps its
    /// keys inside each bucket; other shapes produce sequence buckets.
    pub fn group_by<D, F>(self, mut discriminator: F) -> Coll<D, Self>
    where
        D: PartialEq,
        F: FnMut(&V) -> D,
    {
        let named = matches!(self, Self::Map(_));
        let mut buckets: PairMap<D, Vec<(Key<K>, V)>> = PairMap::new();
        for (key, value) in self.into_pairs() {
            let slot = discriminator(&value);
            buckets.get_or_insert_with(slot, Vec::new).push((key, value));
        }
        let wrapped: PairMap<D, Self> = buckets
            .into_iter()
            .map(|(slot, bucket)| {
                let sub = if named {
                    Self::Map(
                        bucket
                            .into_iter()
                            .filter_map(|(key, value)| {
                                key.into_name().map(|name| (name, value))
                            })
                            .collect(),
                    )
                } else {
                    Self::Seq(bucket.into_iter().map(|(_, value)| value).collect())
                };
                (slot, sub)
            })
            .collect();
        Coll::Map(wrapped)
    }

    /// Rebuilds the collection as a map keyed by a value-derived key,
    /// later values winning on collision.
    pub fn index_by<D, F>(self, mut key_of: F) -> Coll<D, V>
    where
        D: PartialEq,
        F: FnMut(&V) -> D,
    {
        let mut indexed = PairMap::new();
        for (_, value) in self.into_pairs() {
            indexed.insert(key_of(&value), value);
        }
        Coll::Map(indexed)
    }

    /// Overlays another map onto this one, the other side winning on
    /// shared keys.
    ///
    /// Shared keys keep their position in `self`; keys new to `self` are
    /// appended in `other`'s order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] unless both operands
    /// are maps.
    pub fn merge(self, other: Self) -> Result<Self, CollectionError> {
        self.merge_with(other, |_, incoming| incoming)
    }

    /// Overlays this map onto another, this side winning on shared keys.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] unless both operands
    /// are maps.
    pub fn merge_left(self, other: Self) -> Result<Self, CollectionError> {
        other.merge_with(self, |_, incoming| incoming)
    }

    /// Folds another map into this one, resolving shared keys with
    /// `combine(existing, incoming)`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] unless both operands
    /// are maps.
    pub fn merge_with<F>(self, other: Self, combine: F) -> Result<Self, CollectionError>
    where
        F: FnMut(V, V) -> V,
    {
        match (self, other) {
            (Self::Map(mut base), Self::Map(overlay)) => {
                base.merge_with(overlay, combine);
                Ok(Self::Map(base))
            }
            _ => Err(InvalidArgumentError {
                operation: "merge",
                message: "operands must both be maps",
            }
            .into()),
        }
    }

    /// Appends another collection of the same sequence shape.
    ///
    /// Two sequences concatenate densely; two lazy collections chain
    /// without running and are rekeyed by position on traversal.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] for map operands or
    /// mixed shapes.
    pub fn concat(self, other: Self) -> Result<Self, CollectionError> {
        match (self, other) {
            (Self::Seq(mut left), Self::Seq(right)) => {
                left.extend(right);
                Ok(Self::Seq(left))
            }
            (Self::Lazy(left), Self::Lazy(right)) => Ok(Self::Lazy(left.concat(&right))),
            _ => Err(InvalidArgumentError {
                operation: "concat",
                message: "operands must share a sequence shape",
            }
            .into()),
        }
    }

    /// Stores `value` under `key`.
    ///
    /// On a sequence the key must be positional: an existing position is
    /// overwritten and the position one past the end appends. On a map the
    /// key must be named; an existing name keeps its place. A lazy
    /// collection is materialized first.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedShape`] when the key kind
    /// does not match the shape, and [`CollectionError::InvalidArgument`]
    /// for a position past the end of a sequence.
    pub fn assoc(self, key: Key<K>, value: V) -> Result<Self, CollectionError> {
        match self {
            Self::Seq(mut values) => match key {
                Key::Index(position) if position < values.len() => {
                    values[position] = value;
                    Ok(Self::Seq(values))
                }
                Key::Index(position) if position == values.len() => {
                    values.push(value);
                    Ok(Self::Seq(values))
                }
                Key::Index(_) => Err(InvalidArgumentError {
                    operation: "assoc",
                    message: "index is past the end of the sequence",
                }
                .into()),
                Key::Name(_) => Err(UnsupportedShapeError {
                    operation: "assoc",
                    expected: "an index key",
                    actual: "a named key",
                }
                .into()),
            },
            Self::Map(mut entries) => match key {
                Key::Name(name) => {
                    entries.insert(name, value);
                    Ok(Self::Map(entries))
                }
                Key::Index(_) => Err(UnsupportedShapeError {
                    operation: "assoc",
                    expected: "a named key",
                    actual: "an index key",
                }
                .into()),
            },
            deferred @ Self::Lazy(_) => deferred.materialize()?.assoc(key, value),
        }
    }

    /// Removes the element under `key`, if present.
    ///
    /// A missing key of the right kind is a no-op. Removing from a
    /// sequence shifts the following elements down. A lazy collection is
    /// materialized first.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedShape`] when the key kind
    /// does not match the shape.
    pub fn dissoc(self, key: &Key<K>) -> Result<Self, CollectionError> {
        match self {
            Self::Seq(mut values) => match key {
                Key::Index(position) => {
                    if *position < values.len() {
                        values.remove(*position);
                    }
                    Ok(Self::Seq(values))
                }
                Key::Name(_) => Err(UnsupportedShapeError {
                    operation: "dissoc",
                    expected: "an index key",
                    actual: "a named key",
                }
                .into()),
            },
            Self::Map(mut entries) => match key {
                Key::Name(name) => {
                    entries.remove(name);
                    Ok(Self::Map(entries))
                }
                Key::Index(_) => Err(UnsupportedShapeError {
                    operation: "dissoc",
                    expected: "a named key",
                    actual: "an index key",
                }
                .into()),
            },
            deferred @ Self::Lazy(_) => deferred.materialize()?.dissoc(key),
        }
    }

    /// An empty collection of the same shape.
    #[must_use]
    pub fn emptied(&self) -> Self {
        match self {
            Self::Seq(_) => Self::Seq(Vec::new()),
            Self::Map(_) => Self::Map(PairMap::new()),
            Self::Lazy(_) => Self::Lazy(LazySeq::empty()),
        }
    }

    /// Forces a lazy collection into a concrete shape; eager shapes pass
    /// through unchanged.
    ///
    /// The produced pairs pick the shape: uniformly positional keys give a
    /// densely reindexed sequence, uniformly named keys give a map with
    /// later duplicates overwriting earlier ones, and no pairs at all give
    /// an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedShape`] when the traversal
    /// mixes positional and named keys.
    pub fn materialize(self) -> Result<Self, CollectionError> {
        match self {
            Self::Lazy(lazy) => Self::from_tagged_pairs(lazy.iterate(), "materialize"),
            eager => Ok(eager),
        }
    }

    /// Runs an arbitrary transducer over the tagged pair stream.
    ///
    /// The escape hatch for pipelines the named operations do not cover,
    /// including rekeying ones. A lazy collection stays lazy; eager shapes
    /// run now, with the output pairs deciding the output shape exactly as
    /// in [`materialize`](Coll::materialize).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedShape`] when an eager run
    /// emits a mix of positional and named keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xduce::coll::{Coll, Key};
    /// use xduce::xform::map_entries;
    ///
    /// // Turn a sequence into a map keyed by rank names.
    /// let seq: Coll<String, &str> = Coll::from(vec!["gold", "silver"]);
    /// let ranked = seq
    ///     .via(map_entries(|key: Key<String>, value| {
    ///         (Key::Name(format!("rank-{key}")), value)
    ///     }))
    ///     .unwrap();
    ///
    /// assert_eq!(ranked.as_map().and_then(|m| m.get(&"rank-0".to_string())), Some(&"gold"));
    /// ```
    pub fn via<T, L, W>(self, transducer: T) -> Result<Coll<L, W>, CollectionError>
    where
        T: Transducer<Key<K>, V, OutKey = Key<L>, OutValue = W> + Clone + 'static,
        T::Apply<Emit>: Reducer<Key<K>, V, Acc = VecDeque<(Key<L>, W)>>,
        L: PartialEq + 'static,
        W: 'static,
    {
        match self {
            Self::Lazy(lazy) => Ok(Coll::Lazy(lazy.via(transducer))),
            eager => {
                let pairs = transduce(transducer, Emit, VecDeque::new(), eager);
                Coll::from_tagged_pairs(pairs, "via")
            }
        }
    }

    fn from_tagged_pairs<I>(pairs: I, operation: &'static str) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = (Key<K>, V)>,
    {
        let mut values = Vec::new();
        let mut entries = PairMap::new();
        let mut saw_index = false;
        let mut saw_name = false;
        for (key, value) in pairs {
            match key {
                Key::Index(_) => {
                    saw_index = true;
                    values.push(value);
                }
                Key::Name(name) => {
                    saw_name = true;
                    entries.insert(name, value);
                }
            }
            if saw_index && saw_name {
                return Err(UnsupportedShapeError {
                    operation,
                    expected: "uniformly indexed or uniformly named keys",
                    actual: "a mix of indexed and named keys",
                }
                .into());
            }
        }
        if saw_name {
            Ok(Self::Map(entries))
        } else {
            Ok(Self::Seq(values))
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Coll<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Seq(values) => values.serialize(serializer),
            Self::Map(entries) => entries.serialize(serializer),
            Self::Lazy(lazy) => lazy.serialize(serializer),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
