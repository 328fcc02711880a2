//! The eager reduction driver.

use crate::engine::reducer::Reducer;
use crate::engine::reduction::Reduction;
use crate::engine::source::Pairs;
use crate::engine::transducer::Transducer;

/// Runs a transducer eagerly over a source, in one pass.
///
/// Builds the combined reducer with [`Transducer::apply`], walks the source
/// in its defined order, and threads the accumulator through every step.
/// A step returning [`Reduction::Done`] ends the run immediately: the
/// carried accumulator is returned as-is and the flush phase is skipped.
/// When the source is exhausted normally, [`Reducer::flush`] runs exactly
/// once so stateful transducers can emit pending output.
///
/// Panics from user closures propagate; the driver neither catches nor
/// retries.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, Transducer, transduce};
/// use xduce::xform::{map, take};
///
/// let out = transduce(
///     map(|n: i32| n * 2).then(take(3)),
///     Append,
///     Vec::new(),
///     vec![1, 2, 3, 4, 5],
/// );
/// assert_eq!(out, vec![2, 4, 6]);
/// ```
///
/// Early termination skips the flush phase:
///
/// ```rust
/// use xduce::engine::{First, transduce};
/// use xduce::xform::partition_by;
///
/// // `First` terminates after one group; the pending group that
/// // `partition_by` is still buffering is never flushed.
/// let group = transduce(
///     partition_by(|n: &i32| n / 3),
///     First,
///     None,
///     vec![1, 2, 3, 4, 5],
/// );
/// assert_eq!(group, Some(vec![1, 2]));
/// ```
pub fn transduce<S, T, Step>(
    transducer: T,
    step: Step,
    initial: Step::Acc,
    source: S,
) -> Step::Acc
where
    S: Pairs,
    T: Transducer<S::Key, S::Value>,
    Step: Reducer<T::OutKey, T::OutValue>,
{
    run(transducer.apply(step), initial, source)
}

/// Runs a transducer eagerly, seeding the accumulator from
/// [`Reducer::init`].
///
/// Identical to [`transduce`] except the starting accumulator comes from
/// the step's own init phase, available whenever the accumulator type has
/// a [`Default`].
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce_init};
/// use xduce::xform::filter;
///
/// let kept = transduce_init(filter(|n: &i32| *n != 2), Append, vec![1, 2, 3]);
/// assert_eq!(kept, vec![1, 3]);
/// ```
pub fn transduce_init<S, T, Step>(transducer: T, step: Step, source: S) -> Step::Acc
where
    S: Pairs,
    T: Transducer<S::Key, S::Value>,
    Step: Reducer<T::OutKey, T::OutValue>,
    Step::Acc: Default,
{
    let mut reducer = transducer.apply(step);
    let initial = reducer.init();
    run(reducer, initial, source)
}

fn run<S, R>(mut reducer: R, initial: R::Acc, source: S) -> R::Acc
where
    S: Pairs,
    R: Reducer<S::Key, S::Value>,
{
    let mut accumulator = initial;
    for (key, value) in source.into_pairs() {
        match reducer.step(accumulator, key, value) {
            Reduction::Continue(next) => accumulator = next,
            Reduction::Done(finished) => return finished,
        }
    }
    reducer.flush(accumulator)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reduction::Reduction;
    use crate::engine::step::{Append, First, FoldWith};
    use crate::engine::transducer::Identity;
    use std::cell::Cell;

    #[test]
    fn identity_transduce_collects_the_source() {
        let out = transduce(Identity, Append, Vec::new(), vec![1, 2, 3]);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn transduce_init_seeds_from_default() {
        let out = transduce_init(Identity, Append, vec![7, 8]);
        assert_eq!(out, vec![7, 8]);
    }

    #[test]
    fn done_stops_reading_the_source() {
        let reads = Cell::new(0);
        let source = IterCounter {
            values: vec![1, 2, 3, 4],
            reads: &reads,
        };
        let found = transduce(Identity, First, None, source);
        assert_eq!(found, Some(1));
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn flush_runs_once_on_normal_exhaustion() {
        struct TrailingZero;

        impl<K> Reducer<K, i32> for TrailingZero {
            type Acc = Vec<i32>;

            fn step(&mut self, mut accumulator: Vec<i32>, _key: K, value: i32) -> Reduction<Vec<i32>> {
                accumulator.push(value);
                Reduction::Continue(accumulator)
            }

            fn flush(&mut self, mut accumulator: Vec<i32>) -> Vec<i32> {
                accumulator.push(0);
                accumulator
            }
        }

        let out = transduce(Identity, TrailingZero, Vec::new(), vec![5, 6]);
        assert_eq!(out, vec![5, 6, 0]);
    }

    #[test]
    fn done_skips_flush() {
        struct FirstWithMarkerFlush;

        impl<K> Reducer<K, i32> for FirstWithMarkerFlush {
            type Acc = Vec<i32>;

            fn step(&mut self, mut accumulator: Vec<i32>, _key: K, value: i32) -> Reduction<Vec<i32>> {
                accumulator.push(value);
                Reduction::Done(accumulator)
            }

            fn flush(&mut self, mut accumulator: Vec<i32>) -> Vec<i32> {
                accumulator.push(-1);
                accumulator
            }
        }

        let out = transduce(Identity, FirstWithMarkerFlush, Vec::new(), vec![9, 10]);
        assert_eq!(out, vec![9]);
    }

    #[test]
    fn fold_with_reaches_a_scalar() {
        let total = transduce(Identity, FoldWith::new(|acc: i32, n| acc + n), 0, vec![1, 2, 3, 4]);
        assert_eq!(total, 10);
    }

    /// A source that counts how many pairs were actually pulled.
    struct IterCounter<'a> {
        values: Vec<i32>,
        reads: &'a Cell<usize>,
    }

    impl<'a> Pairs for IterCounter<'a> {
        type Key = usize;
        type Value = i32;
        type IntoPairs = CountingIter<'a>;

        fn into_pairs(self) -> Self::IntoPairs {
            CountingIter {
                inner: self.values.into_iter().enumerate(),
                reads: self.reads,
            }
        }
    }

    struct CountingIter<'a> {
        inner: std::iter::Enumerate<std::vec::IntoIter<i32>>,
        reads: &'a Cell<usize>,
    }

    impl Iterator for CountingIter<'_> {
        type Item = (usize, i32);

        fn next(&mut self) -> Option<Self::Item> {
            let next = self.inner.next();
            if next.is_some() {
                self.reads.set(self.reads.get() + 1);
            }
            next
        }
    }
}
