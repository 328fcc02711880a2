//! A re-runnable lazy pair sequence built from an iterator factory.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

use crate::coll::Key;
use crate::engine::{Emit, Pairs, Reducer, Transducer, lazy_steps};

type PairFactory<K, V> = Rc<dyn Fn() -> Box<dyn Iterator<Item = (Key<K>, V)>>>;

/// A lazy sequence of keyed pairs described by an iterator factory.
///
/// Nothing runs at construction time. Every call to [`iterate`] invokes
/// the factory again, so the sequence can be traversed any number of
/// times, each traversal starting from scratch. Pipelines attach through
/// [`via`]: the transducer is stored next to the factory and a fresh
/// stateful copy of it is made per traversal, which keeps counters such
/// as `take` from leaking progress between runs.
///
/// The factory is reference-counted, so cloning a `LazySeq` is cheap and
/// shares the recipe rather than any produced elements. `LazySeq` is a
/// single-threaded value and deliberately neither [`Send`] nor [`Sync`].
///
/// [`iterate`]: LazySeq::iterate
/// [`via`]: LazySeq::via
///
/// # Examples
///
/// ```rust
/// use xduce::coll::{Key, LazySeq};
/// use xduce::xform::{map, take};
///
/// let naturals: LazySeq<String, u64> = LazySeq::indexed(|| 1u64..);
/// let squares = naturals.via(map(|n: u64| n * n).then(take(3)));
///
/// let first: Vec<u64> = squares.iterate().map(|(_, v)| v).collect();
/// let second: Vec<u64> = squares.iterate().map(|(_, v)| v).collect();
///
/// assert_eq!(first, vec![1, 4, 9]);
/// assert_eq!(second, first);
/// ```
pub struct LazySeq<K, V> {
    make: PairFactory<K, V>,
}

assert_not_impl_any!(LazySeq<u8, u8>: Send, Sync);

impl<K, V> LazySeq<K, V> {
    /// Wraps a factory that already yields tagged pairs.
    pub fn new<I, F>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = (Key<K>, V)> + 'static,
    {
        Self {
            make: Rc::new(move || Box::new(factory())),
        }
    }

    /// Wraps a factory of bare values, keying them by position.
    pub fn indexed<I, F>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = V> + 'static,
        K: 'static,
        V: 'static,
    {
        Self::new(move || {
            factory()
                .enumerate()
                .map(|(position, value)| (Key::Index(position), value))
        })
    }

    /// Wraps a factory of named pairs, keying them by name.
    pub fn keyed<I, F>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = (K, V)> + 'static,
        K: 'static,
        V: 'static,
    {
        Self::new(move || factory().map(|(name, value)| (Key::Name(name), value)))
    }

    /// A sequence whose every traversal is immediately exhausted.
    #[must_use]
    pub fn empty() -> Self
    where
        K: 'static,
        V: 'static,
    {
        Self::new(std::iter::empty)
    }

    /// Runs the factory and returns a fresh traversal.
    #[must_use]
    pub fn iterate(&self) -> LazyPairs<K, V> {
        LazyPairs {
            inner: (self.make)(),
        }
    }

    /// Attaches a pipeline without running anything.
    ///
    /// The returned sequence clones `transducer` once per traversal, so
    /// stateful stages start over on every [`iterate`](LazySeq::iterate).
    pub fn via<T, L, W>(&self, transducer: T) -> LazySeq<L, W>
    where
        T: Transducer<Key<K>, V, OutKey = Key<L>, OutValue = W> + Clone + 'static,
        T::Apply<Emit>: Reducer<Key<K>, V, Acc = VecDeque<(Key<L>, W)>>,
        K: 'static,
        V: 'static,
        L: 'static,
        W: 'static,
    {
        let make = Rc::clone(&self.make);
        LazySeq {
            make: Rc::new(move || Box::new(lazy_steps(transducer.clone(), (make)()))),
        }
    }

    /// Chains another lazy sequence after this one, rekeying the combined
    /// stream by position.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self
    where
        K: 'static,
        V: 'static,
    {
        let left = Rc::clone(&self.make);
        let right = Rc::clone(&other.make);
        Self::new(move || {
            (left)()
                .chain((right)())
                .map(|(_, value)| value)
                .enumerate()
                .map(|(position, value)| (Key::Index(position), value))
        })
    }
}

impl<K, V> Clone for LazySeq<K, V> {
    fn clone(&self) -> Self {
        Self {
            make: Rc::clone(&self.make),
        }
    }
}

impl<K, V> fmt::Debug for LazySeq<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LazySeq").finish_non_exhaustive()
    }
}

impl<K, V> Pairs for LazySeq<K, V> {
    type Key = Key<K>;
    type Value = V;
    type IntoPairs = LazyPairs<K, V>;

    fn into_pairs(self) -> Self::IntoPairs {
        self.iterate()
    }
}

impl<K, V> Pairs for &LazySeq<K, V> {
    type Key = Key<K>;
    type Value = V;
    type IntoPairs = LazyPairs<K, V>;

    fn into_pairs(self) -> Self::IntoPairs {
        self.iterate()
    }
}

/// A single traversal produced by [`LazySeq::iterate`].
pub struct LazyPairs<K, V> {
    inner: Box<dyn Iterator<Item = (Key<K>, V)>>,
}

impl<K, V> Iterator for LazyPairs<K, V> {
    type Item = (Key<K>, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> fmt::Debug for LazyPairs<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LazyPairs").finish_non_exhaustive()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

// One factory run per serialization. Pairs keyed 0..n-1 in arrival order
// render as an array; every other key pattern renders as a map.
#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for LazySeq<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};

        let pairs: Vec<(Key<K>, V)> = self.iterate().collect();
        let dense = pairs
            .iter()
            .enumerate()
            .all(|(position, (key, _))| key.as_index() == Some(position));
        if dense {
            let mut seq = serializer.serialize_seq(Some(pairs.len()))?;
            for (_, value) in &pairs {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(pairs.len()))?;
            for (key, value) in &pairs {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
