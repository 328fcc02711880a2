//! Grouping and chunking transducers.
//!
//! Both transducers here buffer values between steps and emit whole groups
//! downstream, so their output only materializes at group boundaries or in
//! the flush phase. Composition cascades flush through the chain, which is
//! what makes the trailing group reliable even deep inside a pipeline.

use std::num::NonZeroUsize;

use smallvec::SmallVec;

use crate::engine::{Reducer, Reduction, Transducer};

// =============================================================================
// PartitionBy
// =============================================================================

/// Groups consecutive values whose discriminator agrees.
///
/// Built by [`partition_by`]. A new group starts whenever the
/// discriminator's result differs from the previous value's; the trailing
/// group is emitted during flush. Groups carry dense positional keys.
#[derive(Debug, Clone, Copy)]
pub struct PartitionBy<F> {
    discriminator: F,
}

/// Creates a transducer grouping consecutive values by a discriminator.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::partition_by;
///
/// let groups = transduce(
///     partition_by(|n: &i32| n / 3),
///     Append,
///     Vec::new(),
///     (1..=10).collect::<Vec<_>>(),
/// );
/// assert_eq!(
///     groups,
///     vec![vec![1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9, 10]],
/// );
/// ```
pub const fn partition_by<F>(discriminator: F) -> PartitionBy<F> {
    PartitionBy { discriminator }
}

/// The reducer built by [`PartitionBy`].
#[derive(Debug, Clone)]
pub struct PartitionByReducer<V, D, F, R> {
    discriminator: F,
    current: Option<D>,
    pending: SmallVec<[V; 4]>,
    emitted: usize,
    inner: R,
}

impl<K, V, D, F> Transducer<K, V> for PartitionBy<F>
where
    F: FnMut(&V) -> D,
    D: PartialEq,
{
    type OutKey = usize;
    type OutValue = Vec<V>;

    type Apply<R>
        = PartitionByReducer<V, D, F, R>
    where
        R: Reducer<usize, Vec<V>>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<usize, Vec<V>>,
    {
        PartitionByReducer {
            discriminator: self.discriminator,
            current: None,
            pending: SmallVec::new(),
            emitted: 0,
            inner,
        }
    }
}

impl<K, V, D, F, R> Reducer<K, V> for PartitionByReducer<V, D, F, R>
where
    F: FnMut(&V) -> D,
    D: PartialEq,
    R: Reducer<usize, Vec<V>>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, _key: K, value: V) -> Reduction<Self::Acc> {
        let discriminant = (self.discriminator)(&value);
        let same_group = self.current.as_ref() == Some(&discriminant);
        if same_group || self.current.is_none() {
            self.current = Some(discriminant);
            self.pending.push(value);
            return Reduction::Continue(accumulator);
        }

        let group: Vec<V> = self.pending.drain(..).collect();
        self.current = Some(discriminant);
        self.pending.push(value);
        let index = self.emitted;
        self.emitted += 1;
        self.inner.step(accumulator, index, group)
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        if self.pending.is_empty() {
            return self.inner.flush(accumulator);
        }
        let group: Vec<V> = self.pending.drain(..).collect();
        let index = self.emitted;
        self.emitted += 1;
        match self.inner.step(accumulator, index, group) {
            Reduction::Continue(accumulator) => self.inner.flush(accumulator),
            Reduction::Done(accumulator) => accumulator,
        }
    }
}

// =============================================================================
// SplitEvery
// =============================================================================

/// Splits the value stream into chunks of a fixed size.
///
/// Built by [`split_every`]. Every chunk but possibly the last holds
/// exactly `size` values; a partial trailing chunk is emitted during
/// flush. Chunks carry dense positional keys.
///
/// The chunk size is a [`NonZeroUsize`], so an impossible zero-sized
/// chunking cannot be constructed.
#[derive(Debug, Clone, Copy)]
pub struct SplitEvery {
    size: NonZeroUsize,
}

/// Creates a transducer chunking values into groups of `size`.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
///
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::split_every;
///
/// let chunks = transduce(
///     split_every(NonZeroUsize::new(2).unwrap()),
///     Append,
///     Vec::new(),
///     vec![1, 2, 3, 4, 5],
/// );
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub const fn split_every(size: NonZeroUsize) -> SplitEvery {
    SplitEvery { size }
}

/// The reducer built by [`SplitEvery`].
#[derive(Debug, Clone)]
pub struct SplitEveryReducer<V, R> {
    size: NonZeroUsize,
    pending: SmallVec<[V; 4]>,
    emitted: usize,
    inner: R,
}

impl<K, V> Transducer<K, V> for SplitEvery {
    type OutKey = usize;
    type OutValue = Vec<V>;

    type Apply<R>
        = SplitEveryReducer<V, R>
    where
        R: Reducer<usize, Vec<V>>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<usize, Vec<V>>,
    {
        SplitEveryReducer {
            size: self.size,
            pending: SmallVec::new(),
            emitted: 0,
            inner,
        }
    }
}

impl<K, V, R> Reducer<K, V> for SplitEveryReducer<V, R>
where
    R: Reducer<usize, Vec<V>>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, _key: K, value: V) -> Reduction<Self::Acc> {
        self.pending.push(value);
        if self.pending.len() < self.size.get() {
            return Reduction::Continue(accumulator);
        }
        let chunk: Vec<V> = self.pending.drain(..).collect();
        let index = self.emitted;
        self.emitted += 1;
        self.inner.step(accumulator, index, chunk)
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        if self.pending.is_empty() {
            return self.inner.flush(accumulator);
        }
        let chunk: Vec<V> = self.pending.drain(..).collect();
        let index = self.emitted;
        self.emitted += 1;
        match self.inner.step(accumulator, index, chunk) {
            Reduction::Continue(accumulator) => self.inner.flush(accumulator),
            Reduction::Done(accumulator) => accumulator,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
