//! Join transducers and their convenience entry points.

use crate::engine::{Append, Pairs, Reducer, Reduction};
use crate::join::contract::{BiReducer, BiTransducer};
use crate::join::driver::transduce2d;

// =============================================================================
// InnerJoin
// =============================================================================

/// Emits one combined row per `(outer, inner)` pair matching a predicate.
///
/// Non-matching pairs produce no output at all, so outer rows without a
/// match disappear. Rows are emitted in outer-major traversal order with
/// dense positional keys. No per-row or final flush state exists.
#[derive(Debug, Clone, Copy)]
pub struct InnerJoin<P, C> {
    predicate: P,
    combine: C,
}

impl<P, C> InnerJoin<P, C> {
    /// Creates an inner-join transducer from a match predicate and a row
    /// combinator.
    pub const fn new(predicate: P, combine: C) -> Self {
        Self { predicate, combine }
    }
}

/// The bi-reducer built by [`InnerJoin`].
#[derive(Debug, Clone)]
pub struct InnerJoinReducer<P, C, R> {
    predicate: P,
    combine: C,
    emitted: usize,
    inner: R,
}

impl<OK, OV, IK, IV, W, P, C> BiTransducer<OK, OV, IK, IV> for InnerJoin<P, C>
where
    P: FnMut(&OV, &IV) -> bool,
    C: FnMut(&OV, &IV) -> W,
{
    type OutKey = usize;
    type OutValue = W;

    type Apply<R>
        = InnerJoinReducer<P, C, R>
    where
        R: Reducer<usize, W>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<usize, W>,
    {
        InnerJoinReducer {
            predicate: self.predicate,
            combine: self.combine,
            emitted: 0,
            inner,
        }
    }
}

impl<OK, OV, IK, IV, W, P, C, R> BiReducer<OK, OV, IK, IV> for InnerJoinReducer<P, C, R>
where
    P: FnMut(&OV, &IV) -> bool,
    C: FnMut(&OV, &IV) -> W,
    R: Reducer<usize, W>,
{
    type Acc = R::Acc;

    fn step(
        &mut self,
        accumulator: Self::Acc,
        _outer_key: &OK,
        outer_value: &OV,
        _inner_key: IK,
        inner_value: IV,
    ) -> Reduction<Self::Acc> {
        if !(self.predicate)(outer_value, &inner_value) {
            return Reduction::Continue(accumulator);
        }
        let row = (self.combine)(outer_value, &inner_value);
        let position = self.emitted;
        self.emitted += 1;
        self.inner.step(accumulator, position, row)
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// LeftJoin
// =============================================================================

/// Emits every matching pair, plus one unmatched row per outer element
/// that matched nothing.
///
/// The combinator receives `Some(inner)` for matching pairs and `None`
/// when an outer element finished its inner traversal without a single
/// match, so every outer row appears in the output at least once. The
/// matched flag is per-run reducer state, reset as each outer row ends.
#[derive(Debug, Clone, Copy)]
pub struct LeftJoin<P, C> {
    predicate: P,
    combine: C,
}

impl<P, C> LeftJoin<P, C> {
    /// Creates a left-join transducer from a match predicate and a row
    /// combinator taking an optional inner value.
    pub const fn new(predicate: P, combine: C) -> Self {
        Self { predicate, combine }
    }
}

/// The bi-reducer built by [`LeftJoin`].
#[derive(Debug, Clone)]
pub struct LeftJoinReducer<P, C, R> {
    predicate: P,
    combine: C,
    matched: bool,
    emitted: usize,
    inner: R,
}

impl<OK, OV, IK, IV, W, P, C> BiTransducer<OK, OV, IK, IV> for LeftJoin<P, C>
where
    P: FnMut(&OV, &IV) -> bool,
    C: FnMut(&OV, Option<&IV>) -> W,
{
    type OutKey = usize;
    type OutValue = W;

    type Apply<R>
        = LeftJoinReducer<P, C, R>
    where
        R: Reducer<usize, W>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<usize, W>,
    {
        LeftJoinReducer {
            predicate: self.predicate,
            combine: self.combine,
            matched: false,
            emitted: 0,
            inner,
        }
    }
}

impl<OK, OV, IK, IV, W, P, C, R> BiReducer<OK, OV, IK, IV> for LeftJoinReducer<P, C, R>
where
    P: FnMut(&OV, &IV) -> bool,
    C: FnMut(&OV, Option<&IV>) -> W,
    R: Reducer<usize, W>,
{
    type Acc = R::Acc;

    fn step(
        &mut self,
        accumulator: Self::Acc,
        _outer_key: &OK,
        outer_value: &OV,
        _inner_key: IK,
        inner_value: IV,
    ) -> Reduction<Self::Acc> {
        if !(self.predicate)(outer_value, &inner_value) {
            return Reduction::Continue(accumulator);
        }
        self.matched = true;
        let row = (self.combine)(outer_value, Some(&inner_value));
        let position = self.emitted;
        self.emitted += 1;
        self.inner.step(accumulator, position, row)
    }

    fn end_outer(
        &mut self,
        accumulator: Self::Acc,
        _outer_key: &OK,
        outer_value: &OV,
    ) -> Reduction<Self::Acc> {
        let was_matched = std::mem::replace(&mut self.matched, false);
        if was_matched {
            return Reduction::Continue(accumulator);
        }
        let row = (self.combine)(outer_value, None);
        let position = self.emitted;
        self.emitted += 1;
        self.inner.step(accumulator, position, row)
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// Convenience entry points
// =============================================================================

/// Inner-joins two sources into a `Vec` of combined rows.
///
/// The inner operand is taken by shared reference because the nested-loop
/// driver re-traverses it once per outer element.
///
/// # Examples
///
/// ```rust
/// use xduce::join::inner_join;
///
/// let rows = inner_join(
///     |a, b| *a == **b,
///     |a, b| *a + **b,
///     vec![1, 2, 3],
///     &vec![2, 3],
/// );
/// assert_eq!(rows, vec![4, 6]);
/// ```
pub fn inner_join<'a, O, I, P, C, W>(predicate: P, combine: C, outer: O, inner: &'a I) -> Vec<W>
where
    O: Pairs,
    &'a I: Pairs,
    P: FnMut(&O::Value, &<&'a I as Pairs>::Value) -> bool,
    C: FnMut(&O::Value, &<&'a I as Pairs>::Value) -> W,
{
    transduce2d(
        InnerJoin::new(predicate, combine),
        Append,
        Vec::new(),
        outer,
        inner,
    )
}

/// Left-joins two sources into a `Vec` of combined rows.
///
/// Every outer row appears at least once; rows without a match are
/// combined with `None`.
///
/// # Examples
///
/// ```rust
/// use xduce::join::left_join;
///
/// let rows = left_join(
///     |a, b| *a == **b,
///     |a, b| (*a, b.map(|n| **n)),
///     vec![1, 2],
///     &vec![2],
/// );
/// assert_eq!(rows, vec![(1, None), (2, Some(2))]);
/// ```
pub fn left_join<'a, O, I, P, C, W>(predicate: P, combine: C, outer: O, inner: &'a I) -> Vec<W>
where
    O: Pairs,
    &'a I: Pairs,
    P: FnMut(&O::Value, &<&'a I as Pairs>::Value) -> bool,
    C: FnMut(&O::Value, Option<&<&'a I as Pairs>::Value>) -> W,
{
    transduce2d(
        LeftJoin::new(predicate, combine),
        Append,
        Vec::new(),
        outer,
        inner,
    )
}

/// Right-joins two sources into a `Vec` of combined rows.
///
/// Implemented as a left join with the operands swapped, so all rows of
/// `inner` (the preserved side) appear at least once, combined with
/// `None` when nothing in `outer` matched. Output rows are grouped by the
/// preserved side's rows, in the preserved side's order; this operand
/// inversion is the intended semantics, matching a SQL right join that
/// keeps every row of the syntactic right operand.
///
/// # Examples
///
/// ```rust
/// use xduce::join::right_join;
///
/// let rows = right_join(
///     |a, b| **a == *b,
///     |a, b| (a.map(|n| **n), *b),
///     &vec![2],
///     vec![1, 2],
/// );
/// assert_eq!(rows, vec![(None, 1), (Some(2), 2)]);
/// ```
pub fn right_join<'a, O, I, P, C, W>(
    mut predicate: P,
    mut combine: C,
    outer: &'a O,
    inner: I,
) -> Vec<W>
where
    I: Pairs,
    &'a O: Pairs,
    P: FnMut(&<&'a O as Pairs>::Value, &I::Value) -> bool,
    C: FnMut(Option<&<&'a O as Pairs>::Value>, &I::Value) -> W,
{
    left_join(
        move |preserved: &I::Value, candidate: &<&'a O as Pairs>::Value| {
            predicate(candidate, preserved)
        },
        move |preserved: &I::Value, candidate: Option<&<&'a O as Pairs>::Value>| {
            combine(candidate, preserved)
        },
        inner,
        outer,
    )
}

// =============================================================================
// Tests
// =============================================================================
