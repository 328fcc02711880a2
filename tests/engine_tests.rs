#![cfg(feature = "engine")]
//! Integration tests for the reduction engine.
//!
//! Tests cover:
//! - Eager runs through `transduce` and `transduce_init`
//! - Early termination via `Reduction::Done` from base steps
//! - Pull-based consumption through `lazy_steps`
//! - The keyed pair sources behind both drivers

use std::cell::Cell;
use std::collections::VecDeque;

use rstest::rstest;
use xduce::engine::{
    Append, Emit, First, FoldPairs, FoldUntil, FoldWith, IterPairs, Reduction, identity,
    lazy_steps, transduce, transduce_init,
};

// =============================================================================
// Eager Driving
// =============================================================================

#[rstest]
fn transduce_collects_values_in_source_order() {
    let out = transduce(identity(), Append, Vec::new(), vec![3, 1, 4, 1, 5]);
    assert_eq!(out, vec![3, 1, 4, 1, 5]);
}

#[rstest]
fn transduce_over_an_empty_source_returns_the_seed() {
    let out = transduce(identity(), Append, vec![9], Vec::<i32>::new());
    assert_eq!(out, vec![9]);
}

#[rstest]
fn transduce_init_seeds_from_default() {
    let out: Vec<i32> = transduce_init(identity(), Append, vec![1, 2, 3]);
    assert_eq!(out, vec![1, 2, 3]);
}

#[rstest]
fn emit_preserves_keys_through_the_run() {
    let source = IterPairs::new(vec![("a", 1), ("b", 2)].into_iter());
    let out: Vec<(&str, i32)> = transduce(identity(), Emit, VecDeque::new(), source)
        .into_iter()
        .collect();
    assert_eq!(out, vec![("a", 1), ("b", 2)]);
}

#[rstest]
fn slices_and_arrays_drive_the_engine_directly() {
    let from_array = transduce(identity(), Append, Vec::new(), [10, 20, 30]);
    let values = vec![10, 20, 30];
    let from_ref = transduce(identity(), Append, Vec::new(), &values);

    assert_eq!(from_array, vec![10, 20, 30]);
    assert_eq!(from_ref, vec![&10, &20, &30]);
}

// =============================================================================
// Early Termination
// =============================================================================

#[rstest]
fn first_reads_exactly_one_element() {
    let reads = Cell::new(0usize);
    let source = IterPairs::new((0..100).map(|n| {
        reads.set(reads.get() + 1);
        (n, n * 10)
    }));

    let found = transduce(identity(), First, None, source);

    assert_eq!(found, Some(0));
    assert_eq!(reads.get(), 1);
}

#[rstest]
fn fold_until_stops_at_the_deciding_element() {
    let reads = Cell::new(0usize);
    let source = IterPairs::new(vec![2, 4, 5, 6, 8].into_iter().map(|n| {
        reads.set(reads.get() + 1);
        ((), n)
    }));

    let any_odd = transduce(
        identity(),
        FoldUntil::new(|_, n: i32| {
            if n % 2 == 1 {
                Reduction::Done(true)
            } else {
                Reduction::Continue(false)
            }
        }),
        false,
        source,
    );

    assert!(any_odd);
    // 2 and 4 fail, 5 decides; 6 and 8 are never read.
    assert_eq!(reads.get(), 3);
}

#[rstest]
fn fold_until_running_to_exhaustion_keeps_the_last_state() {
    let sum_capped = transduce(
        identity(),
        FoldUntil::new(|total: i32, n: i32| {
            let next = total + n;
            if next > 100 {
                Reduction::Done(total)
            } else {
                Reduction::Continue(next)
            }
        }),
        0,
        vec![10, 20, 30],
    );
    assert_eq!(sum_capped, 60);
}

// =============================================================================
// Folding Steps
// =============================================================================

#[rstest]
fn fold_with_ignores_keys() {
    let source = IterPairs::new(vec![("a", 1), ("b", 2), ("c", 3)].into_iter());
    let sum = transduce(identity(), FoldWith::new(|total: i32, n| total + n), 0, source);
    assert_eq!(sum, 6);
}

#[rstest]
fn fold_pairs_sees_keys() {
    let source = IterPairs::new(vec![("a", 1), ("bb", 2)].into_iter());
    let weighted = transduce(
        identity(),
        FoldPairs::new(|total: usize, key: &str, n: i32| total + key.len() * n as usize),
        0,
        source,
    );
    assert_eq!(weighted, 5);
}

// =============================================================================
// Pull-Based Consumption
// =============================================================================

#[rstest]
fn lazy_steps_yields_pairs_on_demand() {
    let reads = Cell::new(0usize);
    let source = (0..).map(|n| {
        reads.set(reads.get() + 1);
        (n, n * 2)
    });

    let mut steps = lazy_steps(identity(), source);

    assert_eq!(steps.next(), Some((0, 0)));
    assert_eq!(reads.get(), 1);
    assert_eq!(steps.next(), Some((1, 2)));
    assert_eq!(reads.get(), 2);
}

#[rstest]
fn lazy_steps_is_fused_after_exhaustion() {
    let mut steps = lazy_steps(identity(), vec![((), 1)].into_iter());

    assert_eq!(steps.next(), Some(((), 1)));
    assert_eq!(steps.next(), None);
    assert_eq!(steps.next(), None);
}

#[rstest]
fn lazy_steps_agrees_with_the_eager_driver() {
    let source = vec![("x", 1), ("y", 2), ("z", 3)];

    let eager: Vec<(&str, i32)> = transduce(
        identity(),
        Emit,
        VecDeque::new(),
        IterPairs::new(source.clone().into_iter()),
    )
    .into_iter()
    .collect();
    let pulled: Vec<(&str, i32)> = lazy_steps(identity(), source.into_iter()).collect();

    assert_eq!(eager, pulled);
}
