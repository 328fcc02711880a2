#![cfg(feature = "coll")]
//! Integration tests for shape-dispatched collection operations.
//!
//! Tests cover:
//! - The shape rule: sequences stay dense, maps keep keys, lazy stays lazy
//! - Structural edits (`assoc`, `dissoc`) and their shape errors
//! - Merging, concatenation, and the grouping family
//! - Materialization of lazy pipelines into concrete shapes

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;
use xduce::coll::{Coll, CollectionError, Key, LazySeq};
use xduce::pair_map;

fn digits() -> Coll<&'static str, i32> {
    Coll::Seq(vec![1, 2, 3, 4, 5])
}

fn scores() -> Coll<&'static str, i32> {
    Coll::Map(pair_map! { "ada" => 95, "ben" => 62, "cyd" => 88 })
}

// =============================================================================
// Shape Rule
// =============================================================================

#[rstest]
fn seq_operations_keep_the_seq_shape() {
    let out = digits().map(|n| n + 1).filter(|n| n % 2 == 0).skip(1);
    assert_eq!(out.as_seq(), Some(&vec![4, 6]));
}

#[rstest]
fn map_operations_keep_the_map_shape() {
    let passing = scores().filter(|score| *score >= 70);

    let entries = passing.as_map().expect("map in, map out");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.get(&"ada"), Some(&95));
    assert_eq!(entries.get(&"cyd"), Some(&88));
}

#[rstest]
fn lazy_operations_stay_lazy() {
    let factory_runs = Rc::new(Cell::new(0usize));
    let observed = Rc::clone(&factory_runs);

    let source: Coll<String, i32> = Coll::Lazy(LazySeq::indexed(move || {
        observed.set(observed.get() + 1);
        1..=10
    }));

    let out = source.map(|n| n * n).filter(|n| n % 2 == 1).take(2);

    assert!(out.is_lazy());
    assert_eq!(factory_runs.get(), 0);
    assert_eq!(out.values(), vec![1, 9]);
    assert_eq!(factory_runs.get(), 1);
}

#[rstest]
fn take_zero_never_runs_a_lazy_factory() {
    let factory_runs = Rc::new(Cell::new(0usize));
    let observed = Rc::clone(&factory_runs);

    let source: Coll<String, i32> = Coll::Lazy(LazySeq::indexed(move || {
        observed.set(observed.get() + 1);
        0..
    }));

    let out = source.take(0);

    assert!(out.values().is_empty());
    assert_eq!(factory_runs.get(), 0);
}

#[rstest]
fn scan_rewrites_values_in_place_on_maps() {
    let running = scores().scan(0, |total, score| total + score);

    let entries = running.as_map().expect("map in, map out");
    assert_eq!(entries.get(&"ada"), Some(&95));
    assert_eq!(entries.get(&"ben"), Some(&157));
    assert_eq!(entries.get(&"cyd"), Some(&245));
}

#[rstest]
fn flat_map_reindexes_sequences_densely() {
    let out = digits().take(3).flat_map(|n| vec![n; n as usize]);

    assert_eq!(out.as_seq(), Some(&vec![1, 2, 2, 3, 3, 3]));
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
fn queries_work_across_shapes() {
    assert_eq!(digits().count(), 5);
    assert_eq!(scores().count(), 3);
    assert!(!digits().is_empty());

    assert_eq!(digits().first(), Some(1));
    assert_eq!(digits().find_first(|n| *n > 3), Some(4));
    assert!(scores().any(|score| *score > 90));
    assert!(!scores().all(|score| *score > 90));
    assert!(digits().contains_value(&5));
    assert!(!digits().contains_value(&6));
}

#[rstest]
fn first_on_a_lazy_collection_reads_one_element() {
    let reads = Rc::new(Cell::new(0usize));
    let observed = Rc::clone(&reads);

    let source: Coll<String, i32> = Coll::Lazy(LazySeq::indexed(move || {
        let counted = Rc::clone(&observed);
        (10..).inspect(move |_| counted.set(counted.get() + 1))
    }));

    assert_eq!(source.first(), Some(10));
    assert_eq!(reads.get(), 1);
}

// =============================================================================
// Structural Edits
// =============================================================================

#[rstest]
fn assoc_overwrites_and_appends_on_sequences() {
    let overwritten = digits().assoc(Key::Index(0), 9).expect("in range");
    assert_eq!(overwritten.as_seq(), Some(&vec![9, 2, 3, 4, 5]));

    let appended = digits().assoc(Key::Index(5), 6).expect("one past end");
    assert_eq!(appended.as_seq(), Some(&vec![1, 2, 3, 4, 5, 6]));
}

#[rstest]
fn assoc_past_the_end_is_an_argument_error() {
    let error = digits().assoc(Key::Index(7), 9).unwrap_err();
    assert!(matches!(error, CollectionError::InvalidArgument(_)));
}

#[rstest]
fn assoc_rejects_a_named_key_on_a_sequence() {
    let error = digits().assoc(Key::Name("x"), 9).unwrap_err();
    assert!(matches!(error, CollectionError::UnsupportedShape(_)));
    assert!(error.to_string().contains("assoc"));
}

#[rstest]
fn assoc_on_a_map_keeps_first_insertion_position() {
    let updated = scores().assoc(Key::Name("ben"), 70).expect("named key");

    let entries = updated.as_map().expect("map in, map out");
    assert_eq!(entries.get(&"ben"), Some(&70));
    let keys: Vec<&str> = entries.keys().copied().collect();
    assert_eq!(keys, vec!["ada", "ben", "cyd"]);
}

#[rstest]
fn dissoc_shifts_sequence_elements_down() {
    let out = digits().dissoc(&Key::Index(1)).expect("index key");
    assert_eq!(out.as_seq(), Some(&vec![1, 3, 4, 5]));
}

#[rstest]
fn dissoc_of_a_missing_entry_is_a_no_op() {
    let seq = digits().dissoc(&Key::Index(99)).expect("index key");
    assert_eq!(seq.count(), 5);

    let map = scores().dissoc(&Key::Name("zed")).expect("named key");
    assert_eq!(map.count(), 3);
}

#[rstest]
fn edits_on_a_lazy_collection_materialize_first() {
    let source: Coll<String, i32> = Coll::Lazy(LazySeq::indexed(|| 1..=3));

    let out = source.assoc(Key::Index(3), 4).expect("one past end");

    assert_eq!(out.as_seq(), Some(&vec![1, 2, 3, 4]));
}

// =============================================================================
// Merging and Concatenation
// =============================================================================

#[rstest]
fn merge_prefers_the_right_operand() {
    let base: Coll<&str, i32> = Coll::Map(pair_map! { "a" => 1, "b" => 2 });
    let overlay: Coll<&str, i32> = Coll::Map(pair_map! { "b" => 20, "c" => 30 });

    let merged = base.merge(overlay).expect("two maps");

    let entries = merged.as_map().expect("map result");
    assert_eq!(entries.get(&"a"), Some(&1));
    assert_eq!(entries.get(&"b"), Some(&20));
    assert_eq!(entries.get(&"c"), Some(&30));
    let keys: Vec<&str> = entries.keys().copied().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[rstest]
fn merge_left_prefers_the_left_operand() {
    let base: Coll<&str, i32> = Coll::Map(pair_map! { "a" => 1, "b" => 2 });
    let overlay: Coll<&str, i32> = Coll::Map(pair_map! { "b" => 20 });

    let merged = base.merge_left(overlay).expect("two maps");

    assert_eq!(merged.as_map().and_then(|m| m.get(&"b")), Some(&2));
}

#[rstest]
fn merge_with_combines_collisions() {
    let base: Coll<&str, i32> = Coll::Map(pair_map! { "hits" => 3, "runs" => 1 });
    let overlay: Coll<&str, i32> = Coll::Map(pair_map! { "hits" => 4 });

    let merged = base.merge_with(overlay, |existing, incoming| existing + incoming)
        .expect("two maps");

    assert_eq!(merged.as_map().and_then(|m| m.get(&"hits")), Some(&7));
}

#[rstest]
fn merge_rejects_non_map_operands() {
    let error = digits().merge(scores()).unwrap_err();
    assert!(matches!(error, CollectionError::InvalidArgument(_)));
}

#[rstest]
fn concat_joins_sequences_densely() {
    let left: Coll<String, i32> = Coll::Seq(vec![1, 2]);
    let right: Coll<String, i32> = Coll::Seq(vec![3, 4]);

    let joined = left.concat(right).expect("two sequences");

    assert_eq!(joined.as_seq(), Some(&vec![1, 2, 3, 4]));
}

#[rstest]
fn concat_of_lazy_collections_defers_both_sides() {
    let factory_runs = Rc::new(Cell::new(0usize));
    let observed = Rc::clone(&factory_runs);

    let left: Coll<String, i32> = Coll::Lazy(LazySeq::indexed(move || {
        observed.set(observed.get() + 1);
        1..=2
    }));
    let right: Coll<String, i32> = Coll::Lazy(LazySeq::indexed(|| 3..=4));

    let joined = left.concat(right).expect("two lazy collections");

    assert!(joined.is_lazy());
    assert_eq!(factory_runs.get(), 0);
    // Chained traversal is rekeyed by overall position.
    assert_eq!(
        joined.to_pairs(),
        vec![
            (Key::Index(0), 1),
            (Key::Index(1), 2),
            (Key::Index(2), 3),
            (Key::Index(3), 4),
        ]
    );
}

#[rstest]
fn concat_rejects_mixed_shapes() {
    let error = digits().concat(scores()).unwrap_err();
    assert!(matches!(error, CollectionError::InvalidArgument(_)));
}

// =============================================================================
// Grouping Family
// =============================================================================

#[rstest]
fn partition_by_splits_contiguous_runs() {
    let source: Coll<String, i32> = Coll::Seq(vec![1, 1, 2, 2, 2, 1]);

    let grouped = source.partition_by(|n| *n);
    let groups: Vec<Vec<i32>> = grouped.values().into_iter().map(Coll::values).collect();

    assert_eq!(groups, vec![vec![1, 1], vec![2, 2, 2], vec![1]]);
}

#[rstest]
fn partition_by_on_a_map_yields_sub_maps() {
    let source: Coll<&str, i32> = Coll::Map(pair_map! {
        "a" => 1, "b" => 1, "c" => 2,
    });

    let grouped = source.partition_by(|n| *n);
    let groups = grouped.values();

    assert_eq!(groups.len(), 2);
    let first = groups[0].as_map().expect("map input gives sub-maps");
    assert_eq!(first.get(&"a"), Some(&1));
    assert_eq!(first.get(&"b"), Some(&1));
}

#[rstest]
fn split_every_chunks_with_a_ragged_tail() {
    let chunked = digits().split_every(2).expect("positive size");
    let chunks: Vec<Vec<i32>> = chunked.values().into_iter().map(Coll::values).collect();

    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[rstest]
fn split_every_zero_is_an_argument_error() {
    let error = digits().split_every(0).unwrap_err();
    assert!(matches!(error, CollectionError::InvalidArgument(_)));
    assert!(error.to_string().contains("split_every"));
}

#[rstest]
fn group_by_buckets_globally_in_first_seen_order() {
    let source: Coll<String, i32> = Coll::Seq(vec![1, 2, 3, 4, 5, 6]);

    let grouped = source.group_by(|n| n % 3);

    let buckets = grouped.as_map().expect("grouping yields a map");
    let slots: Vec<i32> = buckets.keys().copied().collect();
    assert_eq!(slots, vec![1, 2, 0]);
    assert_eq!(buckets.get(&0).map(|b| b.clone().values()), Some(vec![3, 6]));
}

#[rstest]
fn group_by_on_a_map_keeps_keys_inside_buckets() {
    let grouped = scores().group_by(|score| *score >= 70);

    let buckets = grouped.as_map().expect("grouping yields a map");
    let passing = buckets.get(&true).expect("bucket exists");
    let names: Vec<&str> = passing
        .as_map()
        .expect("map input keeps keys")
        .keys()
        .copied()
        .collect();
    assert_eq!(names, vec!["ada", "cyd"]);
}

#[rstest]
fn index_by_rekeys_with_later_values_winning() {
    let source: Coll<String, &str> = Coll::Seq(vec!["apple", "avocado", "beet"]);

    let indexed = source.index_by(|name| name.as_bytes()[0]);

    let entries = indexed.as_map().expect("indexing yields a map");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.get(&b'a'), Some(&"avocado"));
    assert_eq!(entries.get(&b'b'), Some(&"beet"));
}

// =============================================================================
// Materialization
// =============================================================================

#[rstest]
fn materialize_turns_dense_lazy_pairs_into_a_seq() {
    let source: Coll<String, i32> = Coll::Lazy(LazySeq::indexed(|| 1..=3));

    let out = source.map(|n| n * 10).materialize().expect("dense keys");

    assert!(!out.is_lazy());
    assert_eq!(out.as_seq(), Some(&vec![10, 20, 30]));
}

#[rstest]
fn materialize_turns_named_lazy_pairs_into_a_map() {
    let source: Coll<&str, i32> = Coll::Lazy(LazySeq::keyed(|| {
        vec![("a", 1), ("b", 2), ("a", 3)].into_iter()
    }));

    let out = source.materialize().expect("named keys");

    let entries = out.as_map().expect("named pairs give a map");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.get(&"a"), Some(&3));
}

#[rstest]
fn materialize_of_an_empty_traversal_is_an_empty_seq() {
    let source: Coll<String, i32> = Coll::Lazy(LazySeq::empty());

    let out = source.materialize().expect("no pairs at all");

    assert_eq!(out.as_seq(), Some(&Vec::new()));
}

#[rstest]
fn materialize_rejects_mixed_key_kinds() {
    let source: Coll<&str, i32> = Coll::Lazy(LazySeq::new(|| {
        vec![(Key::Index(0), 1), (Key::Name("a"), 2)].into_iter()
    }));

    let error = source.materialize().unwrap_err();
    assert!(matches!(error, CollectionError::UnsupportedShape(_)));
    assert!(error.to_string().contains("materialize"));
}

#[rstest]
fn emptied_keeps_the_shape_and_drops_the_contents() {
    assert_eq!(digits().emptied().as_seq(), Some(&Vec::new()));
    assert!(scores().emptied().as_map().expect("map shape").is_empty());

    let lazy: Coll<String, i32> = Coll::Lazy(LazySeq::indexed(|| 0..));
    let emptied = lazy.emptied();
    assert!(emptied.is_lazy());
    assert!(emptied.values().is_empty());
}
