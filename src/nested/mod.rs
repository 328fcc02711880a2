//! Trees of collections addressed by key paths.
//!
//! A [`Nested`] value is either a leaf or a collection of further nested
//! values, so sequences of maps of sequences nest to any depth. Path
//! operations walk a slice of [`Key`](crate::coll::Key) segments:
//! [`get_path`](Nested::get_path) borrows its way down and answers
//! `None` for anything it cannot reach, while
//! [`assoc_path`](Nested::assoc_path) and
//! [`dissoc_path`](Nested::dissoc_path) consume the tree and rebuild
//! the spine they touched.
//!
//! Writes differ in how much structure they demand. `assoc_path`
//! manufactures missing intermediates, picking a sequence for a
//! positional segment and a map for a named one; `dissoc_path` insists
//! the path already exist and only forgives a missing final key.

mod tree;

pub use tree::Nested;
