//! Value and entry mapping transducers.

use crate::engine::{Reducer, Reduction, Transducer};

// =============================================================================
// Map
// =============================================================================

/// Rewrites each value with a function, leaving keys untouched.
///
/// Built by [`map`]. Key-preserving: on a keyed source every surviving key
/// is the input key; on a dense source positions pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    function: F,
}

/// Creates a mapping transducer from a value function.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::map;
///
/// let doubled = transduce(map(|n: i32| n * 2), Append, Vec::new(), vec![1, 2, 3]);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub const fn map<F>(function: F) -> Map<F> {
    Map { function }
}

/// The reducer built by [`Map`].
#[derive(Debug, Clone)]
pub struct MapReducer<F, R> {
    function: F,
    inner: R,
}

impl<K, V, W, F> Transducer<K, V> for Map<F>
where
    F: FnMut(V) -> W,
{
    type OutKey = K;
    type OutValue = W;

    type Apply<R>
        = MapReducer<F, R>
    where
        R: Reducer<K, W>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<K, W>,
    {
        MapReducer {
            function: self.function,
            inner,
        }
    }
}

impl<K, V, W, F, R> Reducer<K, V> for MapReducer<F, R>
where
    F: FnMut(V) -> W,
    R: Reducer<K, W>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        self.inner.step(accumulator, key, (self.function)(value))
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// MapEntries
// =============================================================================

/// Rewrites each `(key, value)` entry with a function.
///
/// Built by [`map_entries`]. The general re-keying primitive: both the key
/// and the value of every entry are produced by the function, so entries
/// can move between key spaces.
#[derive(Debug, Clone, Copy)]
pub struct MapEntries<F> {
    function: F,
}

/// Creates an entry-mapping transducer from a `(key, value) -> (key,
/// value)` function.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Emit, IterPairs, identity, transduce};
/// use xduce::xform::map_entries;
/// use std::collections::VecDeque;
///
/// let source = IterPairs::new(vec![("a", 1), ("b", 2)].into_iter());
/// let renamed = transduce(
///     map_entries(|key: &str, value: i32| (key.to_uppercase(), value * 10)),
///     Emit,
///     VecDeque::new(),
///     source,
/// );
/// let renamed: Vec<(String, i32)> = renamed.into_iter().collect();
/// assert_eq!(renamed, vec![(String::from("A"), 10), (String::from("B"), 20)]);
/// ```
pub const fn map_entries<F>(function: F) -> MapEntries<F> {
    MapEntries { function }
}

/// The reducer built by [`MapEntries`].
#[derive(Debug, Clone)]
pub struct MapEntriesReducer<F, R> {
    function: F,
    inner: R,
}

impl<K, V, K2, V2, F> Transducer<K, V> for MapEntries<F>
where
    F: FnMut(K, V) -> (K2, V2),
{
    type OutKey = K2;
    type OutValue = V2;

    type Apply<R>
        = MapEntriesReducer<F, R>
    where
        R: Reducer<K2, V2>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<K2, V2>,
    {
        MapEntriesReducer {
            function: self.function,
            inner,
        }
    }
}

impl<K, V, K2, V2, F, R> Reducer<K, V> for MapEntriesReducer<F, R>
where
    F: FnMut(K, V) -> (K2, V2),
    R: Reducer<K2, V2>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        let (out_key, out_value) = (self.function)(key, value);
        self.inner.step(accumulator, out_key, out_value)
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Append, Emit, transduce};
    use crate::engine::{IterPairs, Transducer};
    use std::collections::VecDeque;

    #[test]
    fn map_rewrites_values() {
        let out = transduce(map(|n: i32| n - 1), Append, Vec::new(), vec![1, 2, 3]);
        assert_eq!(out, vec![0, 1, 2]);
    }

    #[test]
    fn map_preserves_keys() {
        let source = IterPairs::new(vec![("a", 1), ("b", 2)].into_iter());
        let out: Vec<(&str, i32)> = transduce(
            map(|n: i32| n * 100),
            Emit,
            VecDeque::new(),
            source,
        )
        .into_iter()
        .collect();
        assert_eq!(out, vec![("a", 100), ("b", 200)]);
    }

    #[test]
    fn maps_compose_in_pipeline_order() {
        let out = transduce(
            map(|n: i32| n + 1).then(map(|n: i32| n * 10)),
            Append,
            Vec::new(),
            vec![1, 2],
        );
        assert_eq!(out, vec![20, 30]);
    }

    #[test]
    fn map_entries_rewrites_both_sides() {
        let source = IterPairs::new(vec![(1usize, "x"), (2usize, "y")].into_iter());
        let out: Vec<(usize, String)> = transduce(
            map_entries(|key: usize, value: &str| (key * 2, value.to_string())),
            Emit,
            VecDeque::new(),
            source,
        )
        .into_iter()
        .collect();
        assert_eq!(out, vec![(2, String::from("x")), (4, String::from("y"))]);
    }
}
