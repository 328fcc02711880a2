//! The two-dimensional reduction contracts.

use crate::engine::{Reducer, Reduction};

/// A step function over `(outer, inner)` element pairs.
///
/// Where a [`Reducer`](crate::engine::Reducer) folds one stream, a
/// `BiReducer` folds the cross product of two: the driver calls
/// [`step`](BiReducer::step) once per `(outer element, inner element)`
/// pair, in outer-major order. The outer element is borrowed because it
/// stays live across a whole inner traversal; inner elements arrive by
/// value, one per step.
///
/// Two finalization hooks exist:
///
/// - [`end_outer`](BiReducer::end_outer) runs after each completed inner
///   traversal, while the outer element is still at hand. This is where a
///   left join decides that an outer row matched nothing. The default
///   passes the accumulator through.
/// - [`flush`](BiReducer::flush) runs once after the outer loop, exactly
///   like the one-dimensional flush phase. The default is the identity.
///
/// As in one dimension, [`Reduction::Done`] from any hook ends the whole
/// run immediately and skips the remaining hooks.
pub trait BiReducer<OK, OV, IK, IV> {
    /// The accumulator threaded through the reduction.
    type Acc;

    /// Folds one `(outer, inner)` pair into the accumulator.
    fn step(
        &mut self,
        accumulator: Self::Acc,
        outer_key: &OK,
        outer_value: &OV,
        inner_key: IK,
        inner_value: IV,
    ) -> Reduction<Self::Acc>;

    /// Finalizes one outer element after its inner traversal completes.
    fn end_outer(
        &mut self,
        accumulator: Self::Acc,
        outer_key: &OK,
        outer_value: &OV,
    ) -> Reduction<Self::Acc> {
        let _ = (outer_key, outer_value);
        Reduction::Continue(accumulator)
    }

    /// Finalizes the accumulator after the outer source is exhausted.
    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        accumulator
    }
}

/// A reusable description of a two-dimensional transformation.
///
/// A bi-transducer maps an ordinary downstream
/// [`Reducer`](crate::engine::Reducer) to a [`BiReducer`]: whatever
/// consumes joined rows (appending, folding, buffering for a lazy
/// consumer) needs no knowledge that the rows came from a nested loop.
/// Like the one-dimensional [`Transducer`](crate::engine::Transducer), the
/// value holds configuration only; per-run state (match flags, row
/// counters) is minted inside [`apply`](BiTransducer::apply).
pub trait BiTransducer<OK, OV, IK, IV> {
    /// The key type emitted downstream for joined rows.
    type OutKey;
    /// The value type emitted downstream for joined rows.
    type OutValue;

    /// The bi-reducer produced by wrapping a downstream reducer `R`.
    type Apply<R>: BiReducer<OK, OV, IK, IV, Acc = R::Acc>
    where
        R: Reducer<Self::OutKey, Self::OutValue>;

    /// Wraps a downstream reducer, minting this transducer's per-run state.
    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<Self::OutKey, Self::OutValue>;
}

// =============================================================================
// Tests
// =============================================================================
