#![cfg(feature = "nested")]
//! Integration tests for path operations over nested trees.
//!
//! Tests cover:
//! - Navigation through mixed sequence and map levels
//! - Auto-creation of intermediate containers on `assoc_path`
//! - The strict traversal contract of `dissoc_path`
//! - `update_path` over both present and absent targets

use rstest::rstest;
use xduce::coll::{Coll, CollectionError, Key, LazySeq};
use xduce::nested::Nested;
use xduce::pair_map;

type Tree = Nested<&'static str, i64>;

/// { "accounts": [ { "name"-less leaf layout: [balance, limit] }, ... ] }
fn ledger() -> Tree {
    Nested::map(pair_map! {
        "accounts" => Nested::seq(vec![
            Nested::map(pair_map! {
                "balance" => Nested::leaf(100),
                "limit" => Nested::leaf(500),
            }),
            Nested::map(pair_map! {
                "balance" => Nested::leaf(250),
            }),
        ]),
        "version" => Nested::leaf(3),
    })
}

fn path(segments: &[Key<&'static str>]) -> Vec<Key<&'static str>> {
    segments.to_vec()
}

// =============================================================================
// Navigation
// =============================================================================

#[rstest]
fn get_path_walks_mixed_levels() {
    let tree = ledger();

    let balance = tree.get_path(&path(&[
        Key::Name("accounts"),
        Key::Index(1),
        Key::Name("balance"),
    ]));

    assert_eq!(balance.and_then(Nested::as_leaf), Some(&250));
}

#[rstest]
fn get_path_with_an_empty_path_is_the_root() {
    let tree = ledger();
    assert!(tree.get_path(&[]).is_some());
}

#[rstest]
fn get_path_misses_return_none() {
    let tree = ledger();

    // Missing name.
    assert!(tree.get_path(&path(&[Key::Name("missing")])).is_none());
    // Kind mismatch: indexed segment into a map.
    assert!(tree.get_path(&path(&[Key::Index(0)])).is_none());
    // Walking through a leaf.
    assert!(
        tree.get_path(&path(&[Key::Name("version"), Key::Index(0)]))
            .is_none()
    );
}

// =============================================================================
// assoc_path
// =============================================================================

#[rstest]
fn assoc_path_overwrites_an_existing_leaf() {
    let updated = ledger()
        .assoc_path(
            &path(&[Key::Name("accounts"), Key::Index(0), Key::Name("balance")]),
            Nested::leaf(120),
        )
        .expect("path exists");

    let balance = updated.get_path(&path(&[
        Key::Name("accounts"),
        Key::Index(0),
        Key::Name("balance"),
    ]));
    assert_eq!(balance.and_then(Nested::as_leaf), Some(&120));
}

#[rstest]
fn assoc_path_creates_intermediates_by_segment_kind() {
    let empty: Tree = Nested::map(pair_map! {});

    let built = empty
        .assoc_path(
            &path(&[Key::Name("history"), Key::Index(0), Key::Name("note")]),
            Nested::leaf(1),
        )
        .expect("containers are created on demand");

    // A named segment created a map, an indexed one created a sequence.
    let note = built.get_path(&path(&[
        Key::Name("history"),
        Key::Index(0),
        Key::Name("note"),
    ]));
    assert_eq!(note.and_then(Nested::as_leaf), Some(&1));

    let history = built.get_path(&path(&[Key::Name("history")]));
    assert!(matches!(history, Some(Nested::Coll(Coll::Seq(_)))));
}

#[rstest]
fn assoc_path_replaces_a_leaf_standing_in_the_way() {
    let built = ledger()
        .assoc_path(
            &path(&[Key::Name("version"), Key::Name("major")]),
            Nested::leaf(4),
        )
        .expect("leaf is discarded for a container");

    let major = built.get_path(&path(&[Key::Name("version"), Key::Name("major")]));
    assert_eq!(major.and_then(Nested::as_leaf), Some(&4));
}

#[rstest]
fn assoc_path_appends_at_one_past_the_end() {
    let grown = ledger()
        .assoc_path(
            &path(&[Key::Name("accounts"), Key::Index(2)]),
            Nested::leaf(0),
        )
        .expect("append position");

    let accounts = grown.get_path(&path(&[Key::Name("accounts")])).unwrap();
    match accounts.as_coll() {
        Some(Coll::Seq(children)) => assert_eq!(children.len(), 3),
        other => panic!("expected a sequence of accounts, got {other:?}"),
    }
}

#[rstest]
fn assoc_path_rejects_gaps_and_kind_mismatches() {
    let gap = ledger()
        .assoc_path(
            &path(&[Key::Name("accounts"), Key::Index(9)]),
            Nested::leaf(0),
        )
        .unwrap_err();
    assert!(matches!(gap, CollectionError::InvalidPath(_)));

    let mismatch = ledger()
        .assoc_path(
            &path(&[Key::Index(0), Key::Name("balance")]),
            Nested::leaf(0),
        )
        .unwrap_err();
    assert!(matches!(mismatch, CollectionError::InvalidPath(_)));
    assert!(mismatch.to_string().contains("path segment 0"));
}

#[rstest]
fn assoc_path_with_an_empty_path_is_an_argument_error() {
    let error = ledger().assoc_path(&[], Nested::leaf(0)).unwrap_err();
    assert!(matches!(error, CollectionError::InvalidArgument(_)));
}

#[rstest]
fn assoc_path_materializes_lazy_levels() {
    let tree: Tree = Nested::map(pair_map! {
        "stream" => Nested::Coll(Coll::Lazy(LazySeq::indexed(|| {
            (0..2).map(Nested::leaf)
        }))),
    });

    let updated = tree
        .assoc_path(&path(&[Key::Name("stream"), Key::Index(1)]), Nested::leaf(9))
        .expect("lazy level materializes");

    let second = updated.get_path(&path(&[Key::Name("stream"), Key::Index(1)]));
    assert_eq!(second.and_then(Nested::as_leaf), Some(&9));
}

// =============================================================================
// dissoc_path
// =============================================================================

#[rstest]
fn dissoc_path_removes_and_shifts_in_sequences() {
    let trimmed = ledger()
        .dissoc_path(&path(&[Key::Name("accounts"), Key::Index(0)]))
        .expect("path exists");

    let first_balance = trimmed.get_path(&path(&[
        Key::Name("accounts"),
        Key::Index(0),
        Key::Name("balance"),
    ]));
    // The old second account is now first.
    assert_eq!(first_balance.and_then(Nested::as_leaf), Some(&250));
}

#[rstest]
fn dissoc_path_tolerates_a_missing_final_segment() {
    let unchanged = ledger()
        .dissoc_path(&path(&[Key::Name("nonexistent")]))
        .expect("final segment may be absent");

    assert!(unchanged.get_path(&path(&[Key::Name("version")])).is_some());
}

#[rstest]
fn dissoc_path_rejects_a_missing_intermediate() {
    let error = ledger()
        .dissoc_path(&path(&[Key::Name("nonexistent"), Key::Index(0)]))
        .unwrap_err();

    assert!(matches!(error, CollectionError::InvalidPath(_)));
}

#[rstest]
fn dissoc_path_rejects_walking_through_a_leaf() {
    let error = ledger()
        .dissoc_path(&path(&[Key::Name("version"), Key::Name("major")]))
        .unwrap_err();

    assert!(matches!(error, CollectionError::InvalidPath(_)));
}

// =============================================================================
// update_path
// =============================================================================

#[rstest]
fn update_path_transforms_the_present_value() {
    let target = path(&[Key::Name("accounts"), Key::Index(0), Key::Name("balance")]);

    let updated = ledger()
        .update_path(&target, |current| {
            let balance = current.and_then(Nested::as_leaf).copied().unwrap_or(0);
            Nested::leaf(balance + 50)
        })
        .expect("path exists");

    assert_eq!(
        updated.get_path(&target).and_then(Nested::as_leaf),
        Some(&150)
    );
}

#[rstest]
fn update_path_sees_none_for_an_absent_target() {
    let target = path(&[Key::Name("accounts"), Key::Index(1), Key::Name("limit")]);

    let updated = ledger()
        .update_path(&target, |current| {
            assert!(current.is_none());
            Nested::leaf(1000)
        })
        .expect("assoc semantics fill the hole");

    assert_eq!(
        updated.get_path(&target).and_then(Nested::as_leaf),
        Some(&1000)
    );
}
