//! The one-to-many mapping transducer.

use crate::engine::{Reducer, Reduction, Transducer};

/// Expands each value into zero or more values.
///
/// Built by [`flat_map`]. Every expanded value is stepped downstream under
/// a clone of the parent entry's key, in expansion order. An empty
/// expansion produces no downstream step, and a downstream
/// [`Reduction::Done`] stops the expansion mid-iteration.
#[derive(Debug, Clone, Copy)]
pub struct FlatMap<F> {
    function: F,
}

/// Creates a transducer expanding each value into an iterable of values.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::flat_map;
///
/// let repeated = transduce(
///     flat_map(|n: i32| std::iter::repeat_n(n, n as usize)),
///     Append,
///     Vec::new(),
///     vec![1, 2, 3],
/// );
/// assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub const fn flat_map<F>(function: F) -> FlatMap<F> {
    FlatMap { function }
}

/// The reducer built by [`FlatMap`].
#[derive(Debug, Clone)]
pub struct FlatMapReducer<F, R> {
    function: F,
    inner: R,
}

impl<K, V, W, I, F> Transducer<K, V> for FlatMap<F>
where
    K: Clone,
    F: FnMut(V) -> I,
    I: IntoIterator<Item = W>,
{
    type OutKey = K;
    type OutValue = W;

    type Apply<R>
        = FlatMapReducer<F, R>
    where
        R: Reducer<K, W>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<K, W>,
    {
        FlatMapReducer {
            function: self.function,
            inner,
        }
    }
}

impl<K, V, W, I, F, R> Reducer<K, V> for FlatMapReducer<F, R>
where
    K: Clone,
    F: FnMut(V) -> I,
    I: IntoIterator<Item = W>,
    R: Reducer<K, W>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        let mut accumulator = accumulator;
        for expanded in (self.function)(value) {
            match self.inner.step(accumulator, key.clone(), expanded) {
                Reduction::Continue(next) => accumulator = next,
                Reduction::Done(finished) => return Reduction::Done(finished),
            }
        }
        Reduction::Continue(accumulator)
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// Tests
// =============================================================================
