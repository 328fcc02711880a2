//! The step-function contract driven by every reduction.

use crate::engine::reduction::Reduction;

/// A step function with explicit init, step, and flush phases.
///
/// A reducer consumes a keyed pair stream one `(key, value)` pair at a time,
/// threading an accumulator of type [`Reducer::Acc`] through the run. The
/// three phases are:
///
/// - [`init`](Reducer::init): produce a starting accumulator. Provided for
///   accumulators with a [`Default`]; drivers that take an explicit initial
///   value never call it.
/// - [`step`](Reducer::step): fold one pair into the accumulator, returning
///   [`Reduction::Continue`] to request more input or [`Reduction::Done`]
///   to terminate the run early.
/// - [`flush`](Reducer::flush): finalize the accumulator after the source
///   is exhausted. The default is the identity, so reducers without
///   pending state simply omit it. Flush is *not* called after an early
///   termination; a reducer that returns [`Reduction::Done`] hands back a
///   complete result.
///
/// Reducers wrapping another reducer (everything built by
/// [`Transducer::apply`](crate::engine::Transducer::apply)) must forward
/// `flush` to the wrapped reducer after emitting any pending output of
/// their own, so finalization cascades through the whole chain.
///
/// Mutable per-run state (counters, buffers, flags) belongs in `&mut self`;
/// the accumulator is owned by the driver and passed through by value.
///
/// # Examples
///
/// A reducer that sums values and stops as soon as the sum exceeds a bound:
///
/// ```rust
/// use xduce::engine::{Reducer, Reduction};
///
/// struct SumUpTo {
///     bound: i64,
/// }
///
/// impl<K> Reducer<K, i64> for SumUpTo {
///     type Acc = i64;
///
///     fn step(&mut self, accumulator: i64, _key: K, value: i64) -> Reduction<i64> {
///         let next = accumulator + value;
///         if next > self.bound {
///             Reduction::Done(next)
///         } else {
///             Reduction::Continue(next)
///         }
///     }
/// }
/// ```
pub trait Reducer<K, V> {
    /// The accumulator threaded through the reduction.
    type Acc;

    /// Produces a starting accumulator.
    ///
    /// Available whenever the accumulator type has a [`Default`]. Reducers
    /// seeded some other way (an explicit initial value handed to the
    /// driver) never need this.
    fn init(&mut self) -> Self::Acc
    where
        Self::Acc: Default,
    {
        Self::Acc::default()
    }

    /// Folds one `(key, value)` pair into the accumulator.
    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc>;

    /// Finalizes the accumulator after the source is exhausted.
    ///
    /// Called exactly once per run, and only when the run was not
    /// terminated early. The default implementation returns the
    /// accumulator unchanged.
    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        accumulator
    }
}

// =============================================================================
// Tests
// =============================================================================
