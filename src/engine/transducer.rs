//! The transducer contract and its composition.

use crate::engine::reducer::Reducer;

/// A reusable description of a transformation step.
///
/// A transducer maps a downstream [`Reducer`] to a wrapped reducer: given
/// somewhere for `(OutKey, OutValue)` pairs to go, it produces a step
/// function accepting `(K, V)` pairs. Because the wrapping happens at
/// [`apply`](Transducer::apply) time, a transducer value itself carries
/// configuration only; counters, buffers, and flags are minted fresh inside
/// the reducer it builds, once per reduction run.
///
/// Transducers know nothing about the collection that feeds them or the
/// accumulation that consumes them. The same value drives the eager driver
/// ([`transduce`](crate::engine::transduce)), the lazy adapter
/// ([`LazySteps`](crate::engine::LazySteps)), and every collection shape.
///
/// ## Composition
///
/// [`then`](Transducer::then) chains two transducers in pipeline order:
/// `a.then(b)` feeds `a`'s output to `b`. In the applied reducer chain the
/// wrapping nests the other way around (`a` wraps `b` wraps the base step),
/// which is what makes pipeline order read left to right.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, Transducer, transduce};
/// use xduce::xform::{map, take};
///
/// let pipeline = map(|n: i32| n + 1).then(take(2));
/// let out = transduce(pipeline, Append, Vec::new(), vec![10, 20, 30]);
/// assert_eq!(out, vec![11, 21]);
/// ```
pub trait Transducer<K, V> {
    /// The key type this transducer emits downstream.
    type OutKey;
    /// The value type this transducer emits downstream.
    type OutValue;

    /// The reducer produced by wrapping a downstream reducer `R`.
    ///
    /// The wrapped reducer accepts this transducer's input pairs and shares
    /// `R`'s accumulator type, so accumulators flow through a whole chain
    /// untouched by the wrapping.
    type Apply<R>: Reducer<K, V, Acc = R::Acc>
    where
        R: Reducer<Self::OutKey, Self::OutValue>;

    /// Wraps a downstream reducer, minting this transducer's per-run state.
    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<Self::OutKey, Self::OutValue>;

    /// Chains `next` after this transducer, in pipeline order.
    fn then<B>(self, next: B) -> Composed<Self, B>
    where
        Self: Sized,
        B: Transducer<Self::OutKey, Self::OutValue>,
    {
        Composed {
            first: self,
            second: next,
        }
    }
}

// =============================================================================
// Composed
// =============================================================================

/// Two transducers chained in pipeline order.
///
/// Built by [`Transducer::then`]; the first transducer's output feeds the
/// second. Composition is associative, so chains of any length flatten to
/// the same behavior regardless of grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composed<A, B> {
    first: A,
    second: B,
}

impl<K, V, A, B> Transducer<K, V> for Composed<A, B>
where
    A: Transducer<K, V>,
    B: Transducer<A::OutKey, A::OutValue>,
{
    type OutKey = B::OutKey;
    type OutValue = B::OutValue;

    type Apply<R>
        = A::Apply<B::Apply<R>>
    where
        R: Reducer<B::OutKey, B::OutValue>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<B::OutKey, B::OutValue>,
    {
        self.first.apply(self.second.apply(inner))
    }
}

// =============================================================================
// Identity
// =============================================================================

/// The transducer that changes nothing.
///
/// Applying it returns the downstream reducer as-is. It is the identity of
/// [`Transducer::then`] on both sides, and useful wherever an operation
/// takes a transducer but the caller wants the source passed through
/// unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Creates the identity transducer.
pub const fn identity() -> Identity {
    Identity
}

impl<K, V> Transducer<K, V> for Identity {
    type OutKey = K;
    type OutValue = V;

    type Apply<R>
        = R
    where
        R: Reducer<K, V>;

    fn apply<R>(self, inner: R) -> R
    where
        R: Reducer<K, V>,
    {
        inner
    }
}

// =============================================================================
// Tests
// =============================================================================
