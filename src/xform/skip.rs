//! Prefix-dropping transducers.

use crate::engine::{Reducer, Reduction, Transducer};

// =============================================================================
// Skip
// =============================================================================

/// Drops the first `count` values, passing the rest through.
///
/// Built by [`skip`]. Key-preserving: entries after the dropped prefix
/// keep their input keys.
#[derive(Debug, Clone, Copy)]
pub struct Skip {
    count: usize,
}

/// Creates a transducer dropping the first `count` values.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::skip;
///
/// let rest = transduce(skip(2), Append, Vec::new(), vec![1, 2, 3, 4]);
/// assert_eq!(rest, vec![3, 4]);
/// ```
pub const fn skip(count: usize) -> Skip {
    Skip { count }
}

/// The reducer built by [`Skip`].
#[derive(Debug, Clone)]
pub struct SkipReducer<R> {
    remaining: usize,
    inner: R,
}

impl<K, V> Transducer<K, V> for Skip {
    type OutKey = K;
    type OutValue = V;

    type Apply<R>
        = SkipReducer<R>
    where
        R: Reducer<K, V>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<K, V>,
    {
        SkipReducer {
            remaining: self.count,
            inner,
        }
    }
}

impl<K, V, R> Reducer<K, V> for SkipReducer<R>
where
    R: Reducer<K, V>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Reduction::Continue(accumulator);
        }
        self.inner.step(accumulator, key, value)
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// SkipWhile
// =============================================================================

/// Drops values until the predicate first fails, passing the rest through.
///
/// Built by [`skip_while`]. The first failing value and everything after
/// it pass through, whether or not later values satisfy the predicate.
#[derive(Debug, Clone, Copy)]
pub struct SkipWhile<P> {
    predicate: P,
}

/// Creates a transducer dropping values while the predicate holds.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::skip_while;
///
/// let out = transduce(
///     skip_while(|n: &i32| *n < 3),
///     Append,
///     Vec::new(),
///     vec![1, 2, 3, 1, 2],
/// );
/// assert_eq!(out, vec![3, 1, 2]);
/// ```
pub const fn skip_while<P>(predicate: P) -> SkipWhile<P> {
    SkipWhile { predicate }
}

/// The reducer built by [`SkipWhile`].
#[derive(Debug, Clone)]
pub struct SkipWhileReducer<P, R> {
    predicate: P,
    skipping: bool,
    inner: R,
}

impl<K, V, P> Transducer<K, V> for SkipWhile<P>
where
    P: FnMut(&V) -> bool,
{
    type OutKey = K;
    type OutValue = V;

    type Apply<R>
        = SkipWhileReducer<P, R>
    where
        R: Reducer<K, V>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<K, V>,
    {
        SkipWhileReducer {
            predicate: self.predicate,
            skipping: true,
            inner,
        }
    }
}

impl<K, V, P, R> Reducer<K, V> for SkipWhileReducer<P, R>
where
    P: FnMut(&V) -> bool,
    R: Reducer<K, V>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        if self.skipping {
            if (self.predicate)(&value) {
                return Reduction::Continue(accumulator);
            }
            self.skipping = false;
        }
        self.inner.step(accumulator, key, value)
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// Tests
// =============================================================================
