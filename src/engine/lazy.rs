//! The pull-based adapter from push-style reducers to iterators.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::mem;

use crate::engine::reducer::Reducer;
use crate::engine::reduction::Reduction;
use crate::engine::step::Emit;
use crate::engine::transducer::Transducer;

/// Which part of the drain cycle a [`LazySteps`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Still willing to pull from the source.
    Running,
    /// The source is exhausted or the reducer terminated; only the buffer
    /// remains.
    Terminated,
}

/// A lazy, pull-based view of a transducer run.
///
/// `LazySteps` drives a transducer chain whose base step is [`Emit`], whose
/// accumulator is the output buffer this iterator drains from. Each
/// [`next`](Iterator::next) call:
///
/// 1. yields a buffered output pair if one is waiting;
/// 2. otherwise pulls exactly one pair from the source and steps it
///    through the reducer, which may buffer zero, one, or many output
///    pairs;
/// 3. on [`Reduction::Done`], stops pulling; buffered output is still
///    drained, and the flush phase is skipped;
/// 4. on source exhaustion, runs the flush phase once (stateful
///    transducers emit pending output here), then drains what remains.
///
/// No source element is ever read before a `next` call requires it, which
/// is what makes short-circuiting transducers effective on infinite
/// sources. Dropping the iterator mid-drain is cancellation; there is
/// nothing to release.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Transducer, lazy_steps};
/// use xduce::xform::{map, take};
///
/// // An endless source; only three elements are ever evaluated.
/// let naturals = (0u64..).map(|n| (n, n));
/// let steps = lazy_steps(map(|n: u64| n * n).then(take(3)), naturals);
///
/// let squares: Vec<(u64, u64)> = steps.collect();
/// assert_eq!(squares, vec![(0, 0), (1, 1), (2, 4)]);
/// ```
#[derive(Debug)]
pub struct LazySteps<I, R, K2, V2> {
    source: I,
    reducer: R,
    buffer: VecDeque<(K2, V2)>,
    phase: Phase,
}

/// Builds a [`LazySteps`] iterator from a transducer and a pair source.
///
/// The base [`Emit`] step is supplied here, so callers hand over only the
/// transformation and the source iterator.
pub fn lazy_steps<T, I, K, V>(
    transducer: T,
    source: I,
) -> LazySteps<I, T::Apply<Emit>, T::OutKey, T::OutValue>
where
    I: Iterator<Item = (K, V)>,
    T: Transducer<K, V>,
    T::Apply<Emit>: Reducer<K, V, Acc = VecDeque<(T::OutKey, T::OutValue)>>,
{
    LazySteps {
        source,
        reducer: transducer.apply(Emit),
        buffer: VecDeque::new(),
        phase: Phase::Running,
    }
}

impl<I, R, K, V, K2, V2> Iterator for LazySteps<I, R, K2, V2>
where
    I: Iterator<Item = (K, V)>,
    R: Reducer<K, V, Acc = VecDeque<(K2, V2)>>,
{
    type Item = (K2, V2);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.buffer.pop_front() {
                return Some(pair);
            }
            if self.phase == Phase::Terminated {
                return None;
            }
            match self.source.next() {
                Some((key, value)) => {
                    let buffer = mem::take(&mut self.buffer);
                    match self.reducer.step(buffer, key, value) {
                        Reduction::Continue(buffer) => self.buffer = buffer,
                        Reduction::Done(buffer) => {
                            self.buffer = buffer;
                            self.phase = Phase::Terminated;
                        }
                    }
                }
                None => {
                    let buffer = mem::take(&mut self.buffer);
                    self.buffer = self.reducer.flush(buffer);
                    self.phase = Phase::Terminated;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Terminated => (self.buffer.len(), Some(self.buffer.len())),
            Phase::Running => (self.buffer.len(), None),
        }
    }
}

impl<I, R, K, V, K2, V2> FusedIterator for LazySteps<I, R, K2, V2>
where
    I: Iterator<Item = (K, V)>,
    R: Reducer<K, V, Acc = VecDeque<(K2, V2)>>,
{
}

// =============================================================================
// Tests
// =============================================================================
