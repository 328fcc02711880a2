//! The filtering transducer.

use crate::engine::{Reducer, Reduction, Transducer};

/// Keeps values satisfying a predicate, dropping the rest.
///
/// Built by [`filter`]. Key-preserving: surviving entries keep their input
/// keys in their original relative order. A rejected value produces no
/// downstream step at all, which is what a pull-based consumer observes as
/// "skipping".
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    predicate: P,
}

/// Creates a filtering transducer from a predicate on values.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::filter;
///
/// let odds = transduce(filter(|n: &i32| n % 2 == 1), Append, Vec::new(), vec![1, 2, 3, 4, 5]);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub const fn filter<P>(predicate: P) -> Filter<P> {
    Filter { predicate }
}

/// The reducer built by [`Filter`].
#[derive(Debug, Clone)]
pub struct FilterReducer<P, R> {
    predicate: P,
    inner: R,
}

impl<K, V, P> Transducer<K, V> for Filter<P>
where
    P: FnMut(&V) -> bool,
{
    type OutKey = K;
    type OutValue = V;

    type Apply<R>
        = FilterReducer<P, R>
    where
        R: Reducer<K, V>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<K, V>,
    {
        FilterReducer {
            predicate: self.predicate,
            inner,
        }
    }
}

impl<K, V, P, R> Reducer<K, V> for FilterReducer<P, R>
where
    P: FnMut(&V) -> bool,
    R: Reducer<K, V>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        if (self.predicate)(&value) {
            self.inner.step(accumulator, key, value)
        } else {
            Reduction::Continue(accumulator)
        }
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// Tests
// =============================================================================
