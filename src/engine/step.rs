//! Base step reducers: the innermost ends of a transducer chain.
//!
//! A transducer chain always bottoms out in one of these reducers (or a
//! user-written one). Each base step decides what "accumulating" means:
//! appending into a dense sequence, buffering for a lazy consumer, folding
//! with a closure, or capturing a single value and stopping.

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::engine::reducer::Reducer;
use crate::engine::reduction::Reduction;

// =============================================================================
// Append
// =============================================================================

/// Appends each value to a `Vec`, ignoring keys.
///
/// The default step for dense, position-keyed output: results carry fresh
/// positions `0..k-1` regardless of the keys that reached this step.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::filter;
///
/// let kept = transduce(filter(|n: &i32| *n > 1), Append, Vec::new(), vec![1, 2, 3]);
/// assert_eq!(kept, vec![2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Append;

impl<K, V> Reducer<K, V> for Append {
    type Acc = Vec<V>;

    fn step(&mut self, mut accumulator: Vec<V>, _key: K, value: V) -> Reduction<Vec<V>> {
        accumulator.push(value);
        Reduction::Continue(accumulator)
    }
}

// =============================================================================
// Emit
// =============================================================================

/// Buffers `(key, value)` pairs for a pull-based consumer.
///
/// The base step of the lazy adapter: its accumulator is the output buffer
/// a [`LazySteps`](crate::engine::LazySteps) iterator drains from. Pairs
/// are yielded in exactly the order they were emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emit;

impl<K, V> Reducer<K, V> for Emit {
    type Acc = VecDeque<(K, V)>;

    fn step(
        &mut self,
        mut accumulator: VecDeque<(K, V)>,
        key: K,
        value: V,
    ) -> Reduction<VecDeque<(K, V)>> {
        accumulator.push_back((key, value));
        Reduction::Continue(accumulator)
    }
}

// =============================================================================
// First
// =============================================================================

/// Captures the first value to arrive and terminates the run.
///
/// Feeding this step through a filter gives short-circuiting search: the
/// source is read only as far as the first match.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{First, transduce};
/// use xduce::xform::filter;
///
/// let found = transduce(filter(|n: &i32| n % 2 == 0), First, None, vec![1, 3, 4, 5]);
/// assert_eq!(found, Some(4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct First;

impl<K, V> Reducer<K, V> for First {
    type Acc = Option<V>;

    fn step(&mut self, _accumulator: Option<V>, _key: K, value: V) -> Reduction<Option<V>> {
        Reduction::Done(Some(value))
    }
}

// =============================================================================
// FoldWith
// =============================================================================

/// Folds values with a closure, ignoring keys.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{FoldWith, transduce};
/// use xduce::xform::map;
///
/// let sum = transduce(
///     map(|n: i32| n * n),
///     FoldWith::new(|total: i32, n| total + n),
///     0,
///     vec![1, 2, 3],
/// );
/// assert_eq!(sum, 14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FoldWith<A, F> {
    function: F,
    accumulator: PhantomData<fn() -> A>,
}

impl<A, F> FoldWith<A, F> {
    /// Creates a folding step from a `(accumulator, value) -> accumulator`
    /// closure.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            accumulator: PhantomData,
        }
    }
}

impl<K, V, A, F> Reducer<K, V> for FoldWith<A, F>
where
    F: FnMut(A, V) -> A,
{
    type Acc = A;

    fn step(&mut self, accumulator: A, _key: K, value: V) -> Reduction<A> {
        Reduction::Continue((self.function)(accumulator, value))
    }
}

// =============================================================================
// FoldPairs
// =============================================================================

/// Folds `(key, value)` pairs with a closure.
///
/// The keyed counterpart of [`FoldWith`], for folds whose result depends on
/// where each value came from.
#[derive(Debug, Clone, Copy)]
pub struct FoldPairs<A, F> {
    function: F,
    accumulator: PhantomData<fn() -> A>,
}

impl<A, F> FoldPairs<A, F> {
    /// Creates a folding step from a `(accumulator, key, value) ->
    /// accumulator` closure.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            accumulator: PhantomData,
        }
    }
}

impl<K, V, A, F> Reducer<K, V> for FoldPairs<A, F>
where
    F: FnMut(A, K, V) -> A,
{
    type Acc = A;

    fn step(&mut self, accumulator: A, key: K, value: V) -> Reduction<A> {
        Reduction::Continue((self.function)(accumulator, key, value))
    }
}

// =============================================================================
// FoldUntil
// =============================================================================

/// Folds values with a closure that can terminate the run.
///
/// The closure returns a [`Reduction`], so a fold can stop as soon as its
/// answer is decided.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{FoldUntil, Reduction, identity, transduce};
///
/// // True as soon as any value is negative; stops reading there.
/// let any_negative = transduce(
///     identity(),
///     FoldUntil::new(|_, n: i32| {
///         if n < 0 {
///             Reduction::Done(true)
///         } else {
///             Reduction::Continue(false)
///         }
///     }),
///     false,
///     vec![3, -1, 7],
/// );
/// assert!(any_negative);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FoldUntil<A, F> {
    function: F,
    accumulator: PhantomData<fn() -> A>,
}

impl<A, F> FoldUntil<A, F> {
    /// Creates a short-circuiting folding step from a `(accumulator, value)
    /// -> Reduction<accumulator>` closure.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            accumulator: PhantomData,
        }
    }
}

impl<K, V, A, F> Reducer<K, V> for FoldUntil<A, F>
where
    F: FnMut(A, V) -> Reduction<A>,
{
    type Acc = A;

    fn step(&mut self, accumulator: A, _key: K, value: V) -> Reduction<A> {
        (self.function)(accumulator, value)
    }
}

// =============================================================================
// Tests
// =============================================================================
