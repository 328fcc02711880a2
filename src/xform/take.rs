//! Prefix-limiting transducers.

use crate::engine::{Reducer, Reduction, Transducer};

// =============================================================================
// Take
// =============================================================================

/// Passes the first `count` values through, then terminates the run.
///
/// Built by [`take`]. The termination signal is raised *on* the final
/// accepted step, not on the step after it, so a driver never reads source
/// element `count + 1`. This is what makes `take` safe on endless sources.
///
/// `take(0)` is the one place the step protocol cannot act before input
/// arrives: the run terminates on the first step, after one source element
/// has been read (and discarded). Collection-level wrappers short-circuit
/// that case before reaching the engine.
#[derive(Debug, Clone, Copy)]
pub struct Take {
    count: usize,
}

/// Creates a transducer passing through the first `count` values.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::take;
///
/// let prefix = transduce(take(2), Append, Vec::new(), vec![7, 8, 9]);
/// assert_eq!(prefix, vec![7, 8]);
/// ```
pub const fn take(count: usize) -> Take {
    Take { count }
}

/// The reducer built by [`Take`].
#[derive(Debug, Clone)]
pub struct TakeReducer<R> {
    remaining: usize,
    inner: R,
}

impl<K, V> Transducer<K, V> for Take {
    type OutKey = K;
    type OutValue = V;

    type Apply<R>
        = TakeReducer<R>
    where
        R: Reducer<K, V>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<K, V>,
    {
        TakeReducer {
            remaining: self.count,
            inner,
        }
    }
}

impl<K, V, R> Reducer<K, V> for TakeReducer<R>
where
    R: Reducer<K, V>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        if self.remaining == 0 {
            return Reduction::Done(accumulator);
        }
        self.remaining -= 1;
        let stepped = self.inner.step(accumulator, key, value);
        if self.remaining == 0 {
            stepped.saturate()
        } else {
            stepped
        }
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// TakeWhile
// =============================================================================

/// Passes values through until the predicate first fails, then terminates.
///
/// Built by [`take_while`]. The failing value is not passed downstream,
/// and nothing after it is read.
#[derive(Debug, Clone, Copy)]
pub struct TakeWhile<P> {
    predicate: P,
}

/// Creates a transducer passing values through while the predicate holds.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::take_while;
///
/// let ascending_prefix = transduce(
///     take_while(|n: &i32| *n < 4),
///     Append,
///     Vec::new(),
///     vec![1, 2, 3, 4, 1],
/// );
/// assert_eq!(ascending_prefix, vec![1, 2, 3]);
/// ```
pub const fn take_while<P>(predicate: P) -> TakeWhile<P> {
    TakeWhile { predicate }
}

/// The reducer built by [`TakeWhile`].
#[derive(Debug, Clone)]
pub struct TakeWhileReducer<P, R> {
    predicate: P,
    inner: R,
}

impl<K, V, P> Transducer<K, V> for TakeWhile<P>
where
    P: FnMut(&V) -> bool,
{
    type OutKey = K;
    type OutValue = V;

    type Apply<R>
        = TakeWhileReducer<P, R>
    where
        R: Reducer<K, V>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<K, V>,
    {
        TakeWhileReducer {
            predicate: self.predicate,
            inner,
        }
    }
}

impl<K, V, P, R> Reducer<K, V> for TakeWhileReducer<P, R>
where
    P: FnMut(&V) -> bool,
    R: Reducer<K, V>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        if (self.predicate)(&value) {
            self.inner.step(accumulator, key, value)
        } else {
            Reduction::Done(accumulator)
        }
    }

    fn flush(&mut self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.flush(accumulator)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Append, Emit, IterPairs, Transducer, lazy_steps, transduce};
    use crate::xform::map;
    use std::cell::Cell;
    use std::collections::VecDeque;

    #[test]
    fn take_stops_after_count() {
        let out = transduce(take(3), Append, Vec::new(), vec![1, 2, 3, 4, 5]);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn take_longer_than_source_is_the_whole_source() {
        let out = transduce(take(10), Append, Vec::new(), vec![1, 2]);
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn take_never_reads_past_its_count() {
        let reads = Cell::new(0usize);
        let source = (0..).map(|n| {
            reads.set(reads.get() + 1);
            (n, n)
        });
        let out: Vec<(i32, i32)> = lazy_steps(take(3), source).collect();
        assert_eq!(out, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(reads.get(), 3);
    }

    #[test]
    fn take_preserves_keys() {
        let source = IterPairs::new(vec![("a", 1), ("b", 2), ("c", 3)].into_iter());
        let out: Vec<(&str, i32)> = transduce(take(2), Emit, VecDeque::new(), source)
            .into_iter()
            .collect();
        assert_eq!(out, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn saturated_take_still_respects_inner_termination() {
        // The downstream take(1) finishes first; the outer take(5) must
        // propagate its Done rather than overwrite it with Continue.
        let out = transduce(take(5).then(take(1)), Append, Vec::new(), vec![1, 2, 3]);
        assert_eq!(out, vec![1]);
    }

    #[test]
    fn take_while_cuts_at_first_failure() {
        let out = transduce(
            take_while(|n: &i32| *n != 3),
            Append,
            Vec::new(),
            vec![1, 2, 3, 2, 1],
        );
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn take_while_never_reads_past_the_failure() {
        let reads = Cell::new(0usize);
        let source = (1..).map(|n| {
            reads.set(reads.get() + 1);
            (n, n)
        });
        let out: Vec<(i32, i32)> = lazy_steps(take_while(|n: &i32| *n < 3), source).collect();
        assert_eq!(out, vec![(1, 1), (2, 2)]);
        // Elements 1, 2 pass; 3 fails and is the last read.
        assert_eq!(reads.get(), 3);
    }

    #[test]
    fn take_composes_after_map() {
        let out = transduce(
            map(|n: i32| n * n).then(take(2)),
            Append,
            Vec::new(),
            vec![2, 3, 4],
        );
        assert_eq!(out, vec![4, 9]);
    }
}
