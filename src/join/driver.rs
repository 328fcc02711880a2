//! The nested-loop driver for two-dimensional reductions.

use crate::engine::{Pairs, Reducer, Reduction};
use crate::join::contract::{BiReducer, BiTransducer};

/// Runs a bi-transducer over the cross product of two sources.
///
/// For each outer element, in outer source order, the entire inner source
/// is traversed in its order, stepping the bi-reducer once per pair;
/// [`end_outer`](crate::join::BiReducer::end_outer) then runs with the
/// outer element still at hand. After the outer loop, the flush phase runs
/// exactly once. [`Reduction::Done`] from any step or hook ends the run
/// immediately, skipping both remaining loops and the flush.
///
/// The inner operand is taken by shared reference and must implement
/// [`Pairs`] as a reference (`&I: Pairs`), so it can be re-traversed once
/// per outer element without being consumed. The cost is always
/// `O(|outer| x |inner|)` steps; no index is built and the predicate can
/// be arbitrary.
///
/// # Examples
///
/// Counting matching pairs with a plain folding step:
///
/// ```rust
/// use xduce::engine::FoldWith;
/// use xduce::join::{InnerJoin, transduce2d};
///
/// let left = vec![1, 2, 3];
/// let right = vec![2, 3, 4];
///
/// let matches = transduce2d(
///     InnerJoin::new(|a, b| a == *b, |a, b| (*a, **b)),
///     FoldWith::new(|count: usize, _pair| count + 1),
///     0,
///     left,
///     &right,
/// );
/// assert_eq!(matches, 2);
/// ```
pub fn transduce2d<'a, O, I, T, Step>(
    bi_transducer: T,
    step: Step,
    initial: Step::Acc,
    outer: O,
    inner: &'a I,
) -> Step::Acc
where
    O: Pairs,
    &'a I: Pairs,
    T: BiTransducer<O::Key, O::Value, <&'a I as Pairs>::Key, <&'a I as Pairs>::Value>,
    Step: Reducer<T::OutKey, T::OutValue>,
{
    let mut reducer = bi_transducer.apply(step);
    let mut accumulator = initial;
    for (outer_key, outer_value) in outer.into_pairs() {
        for (inner_key, inner_value) in inner.into_pairs() {
            match reducer.step(accumulator, &outer_key, &outer_value, inner_key, inner_value) {
                Reduction::Continue(next) => accumulator = next,
                Reduction::Done(finished) => return finished,
            }
        }
        match reducer.end_outer(accumulator, &outer_key, &outer_value) {
            Reduction::Continue(next) => accumulator = next,
            Reduction::Done(finished) => return finished,
        }
    }
    reducer.flush(accumulator)
}

// =============================================================================
// Tests
// =============================================================================
