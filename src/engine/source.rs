//! The traversal seam between collections and the reduction engine.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::iter::Enumerate;

/// A collection viewed as a keyed pair stream.
///
/// Every driver in the engine consumes its input through this trait: a
/// source yields `(key, value)` pairs in its defined order, exactly once
/// per `into_pairs` call. Dense sequences yield positional keys
/// (`0..len`); keyed collections yield their own keys.
///
/// Shared-reference impls are provided wherever borrowing makes sense, so
/// a source can be traversed without being consumed. The two-dimensional
/// driver ([`transduce2d`](crate::join::transduce2d)) relies on this: a
/// `&C` that implements `Pairs` is `Copy`, so the inner operand can be
/// re-traversed once per outer element.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::Pairs;
///
/// let pairs: Vec<(usize, &str)> = vec!["a", "b"].into_pairs().collect();
/// assert_eq!(pairs, vec![(0, "a"), (1, "b")]);
/// ```
pub trait Pairs {
    /// The key type this source yields.
    type Key;
    /// The value type this source yields.
    type Value;
    /// The pair iterator produced by [`into_pairs`](Pairs::into_pairs).
    type IntoPairs: Iterator<Item = (Self::Key, Self::Value)>;

    /// Converts this source into its keyed pair stream.
    fn into_pairs(self) -> Self::IntoPairs;
}

// =============================================================================
// Dense sequences: positional keys
// =============================================================================

impl<V> Pairs for Vec<V> {
    type Key = usize;
    type Value = V;
    type IntoPairs = Enumerate<std::vec::IntoIter<V>>;

    fn into_pairs(self) -> Self::IntoPairs {
        self.into_iter().enumerate()
    }
}

impl<'a, V> Pairs for &'a Vec<V> {
    type Key = usize;
    type Value = &'a V;
    type IntoPairs = Enumerate<std::slice::Iter<'a, V>>;

    fn into_pairs(self) -> Self::IntoPairs {
        self.iter().enumerate()
    }
}

impl<'a, V> Pairs for &'a [V] {
    type Key = usize;
    type Value = &'a V;
    type IntoPairs = Enumerate<std::slice::Iter<'a, V>>;

    fn into_pairs(self) -> Self::IntoPairs {
        self.iter().enumerate()
    }
}

impl<V, const N: usize> Pairs for [V; N] {
    type Key = usize;
    type Value = V;
    type IntoPairs = Enumerate<std::array::IntoIter<V, N>>;

    fn into_pairs(self) -> Self::IntoPairs {
        self.into_iter().enumerate()
    }
}

// =============================================================================
// Keyed collections
// =============================================================================

impl<K, V> Pairs for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type IntoPairs = btree_map::IntoIter<K, V>;

    fn into_pairs(self) -> Self::IntoPairs {
        self.into_iter()
    }
}

impl<'a, K, V> Pairs for &'a BTreeMap<K, V> {
    type Key = &'a K;
    type Value = &'a V;
    type IntoPairs = btree_map::Iter<'a, K, V>;

    fn into_pairs(self) -> Self::IntoPairs {
        self.iter()
    }
}

// =============================================================================
// IterPairs
// =============================================================================

/// Adapts any iterator of `(key, value)` pairs into a [`Pairs`] source.
///
/// There is deliberately no blanket `Pairs` impl for iterators; wrapping is
/// explicit, so the set of source types stays unambiguous.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, IterPairs, identity, transduce};
///
/// let source = IterPairs::new((0..3).map(|n| (n, n * 10)));
/// let values = transduce(identity(), Append, Vec::new(), source);
/// assert_eq!(values, vec![0, 10, 20]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IterPairs<I> {
    iterator: I,
}

impl<I> IterPairs<I> {
    /// Wraps a pair iterator.
    pub const fn new(iterator: I) -> Self {
        Self { iterator }
    }
}

impl<K, V, I> Pairs for IterPairs<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Value = V;
    type IntoPairs = I;

    fn into_pairs(self) -> I {
        self.iterator
    }
}

// =============================================================================
// Tests
// =============================================================================
