//! The key-replacing transducer.

use crate::engine::{Reducer, Reduction, Transducer};

/// Replaces every key with a dense position counter.
///
/// Built by [`reindex`]. Values pass through unchanged; keys become
/// `0, 1, 2, ...` in arrival order. Appended after a key-disturbing
/// transformation (filtering a dense sequence, flat-mapping, concatenating
/// two sources) it restores positional keying.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reindex;

/// Creates a transducer replacing keys with dense positions.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
///
/// use xduce::engine::{Emit, Transducer, transduce};
/// use xduce::xform::{filter, reindex};
///
/// let out: Vec<(usize, i32)> = transduce(
///     filter(|n: &i32| n % 2 == 0).then(reindex()),
///     Emit,
///     VecDeque::new(),
///     vec![1, 2, 3, 4],
/// )
/// .into_iter()
/// .collect();
/// // Without the reindex the surviving pairs would keep positions 1 and 3.
/// assert_eq!(out, vec![(0, 2), (1, 4)]);
/// ```
pub const fn reindex() -> Reindex {
    Reindex
}

/// The reducer built by [`Reindex`].
#[derive(Debug, Clone)]
pub struct ReindexReducer<R> {
    next_position: usize,
    inner: R,
}

impl<K, V> Transducer<K, V> for Reindex {
    type OutKey = usize;
    type OutValue = V;

    type Apply<R>
        = ReindexReducer<R>
    where
        R: Reducer<usize, V>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<usize, V>,
    {
        ReindexReducer {
            next_position: 0,
            inner,
        }
    }
}

impl<K, V, R> Reducer<K, V> for ReindexReducer<R>
where
    R: Reducer<usize, V>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, _key: K, value: V) -> Reduction<Self::Acc> {
        let position = self.next_position;
        self.next_position += 1;
        self.inner.step(accumulator, position, value)
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// Tests
// =============================================================================
