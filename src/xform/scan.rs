//! The running-fold transducer.

use crate::engine::{Reducer, Reduction, Transducer};

/// Emits the running accumulation of a fold, one output per input.
///
/// Built by [`scan`]. Each input value is folded into a running state and
/// the updated state is emitted downstream under the input's key, so the
/// output stream has exactly the input's length and keys. The seed itself
/// is not emitted.
#[derive(Debug, Clone, Copy)]
pub struct Scan<B, F> {
    initial: B,
    function: F,
}

/// Creates a running-fold transducer from a seed and a fold function.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::{Append, transduce};
/// use xduce::xform::scan;
///
/// let running_totals = transduce(
///     scan(0, |total: i32, n: i32| total + n),
///     Append,
///     Vec::new(),
///     vec![1, 2, 3, 4],
/// );
/// assert_eq!(running_totals, vec![1, 3, 6, 10]);
/// ```
pub const fn scan<B, F>(initial: B, function: F) -> Scan<B, F> {
    Scan { initial, function }
}

/// The reducer built by [`Scan`].
#[derive(Debug, Clone)]
pub struct ScanReducer<B, F, R> {
    state: B,
    function: F,
    inner: R,
}

impl<K, V, B, F> Transducer<K, V> for Scan<B, F>
where
    B: Clone,
    F: FnMut(B, V) -> B,
{
    type OutKey = K;
    type OutValue = B;

    type Apply<R>
        = ScanReducer<B, F, R>
    where
        R: Reducer<K, B>;

    fn apply<R>(self, inner: R) -> Self::Apply<R>
    where
        R: Reducer<K, B>,
    {
        ScanReducer {
            state: self.initial,
            function: self.function,
            inner,
        }
    }
}

impl<K, V, B, F, R> Reducer<K, V> for ScanReducer<B, F, R>
where
    B: Clone,
    F: FnMut(B, V) -> B,
    R: Reducer<K, B>,
{
    type Acc = R::Acc;

    fn step(&mut self, accumulator: Self::Acc, key: K, value: V) -> Reduction<Self::Acc> {
        let next = (self.function)(self.state.clone(), value);
        self.state = next.clone();
        self.inner.step(accumulator, key, next)
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
    use crate::engine::{Append, Emit, IterPairs, Transducer, transduce};
    use crate::xform::take;
    use std::collections::VecDeque;

    #[test]
    fn scan_emits_each_running_state() {
        let out = transduce(
            scan(1, |product: i32, n: i32| product * n),
            Append,
            Vec::new(),
            vec![2, 3, 4],
        );
        assert_eq!(out, vec![2, 6, 24]);
    }

    #[test]
    fn scan_over_empty_emits_nothing() {
        let out = transduce(
            scan(0, |total: i32, n: i32| total + n),
            Append,
            Vec::new(),
            Vec::<i32>::new(),
        );
        assert_eq!(out, Vec::<i32>::new());
    }

    #[test]
    fn scan_preserves_keys() {
        let source = IterPairs::new(vec![("a", 1), ("b", 2), ("c", 3)].into_iter());
        let out: Vec<(&str, i32)> = transduce(
            scan(0, |total: i32, n: i32| total + n),
            Emit,
            VecDeque::new(),
            source,
        )
        .into_iter()
        .collect();
        assert_eq!(out, vec![("a", 1), ("b", 3), ("c", 6)]);
    }

    #[test]
    fn scan_composes_with_take() {
        let out = transduce(
            scan(0, |total: i32, n: i32| total + n).then(take(2)),
            Append,
            Vec::new(),
            vec![5, 5, 5, 5],
        );
        assert_eq!(out, vec![5, 10]);
    }
}
