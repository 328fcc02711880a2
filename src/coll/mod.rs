//! Shape-aware collections over the reduction engine.
//!
//! This module gives the engine's pair streams a home to land in. A
//! [`Coll`] is one of three shapes behind a single operation set:
//!
//! - [`Coll::Seq`] - a densely indexed sequence backed by a vector;
//! - [`Coll::Map`] - an insertion-ordered keyed map backed by a
//!   [`PairMap`];
//! - [`Coll::Lazy`] - a deferred sequence backed by a re-runnable
//!   iterator factory ([`LazySeq`]).
//!
//! Operations dispatch by shape: eager shapes run the pipeline now with
//! the step matching their shape ([`Append`](crate::engine::Append) for
//! sequences, [`Assoc`] for maps), the lazy shape composes the pipeline
//! onto its factory and runs nothing. The [`Key`] union tags every pair
//! as positional or named so mixed streams can be detected rather than
//! silently mis-shaped; failures surface as [`CollectionError`] values.
//!
//! ```rust
//! use xduce::coll::Coll;
//! use xduce::pair_map;
//!
//! let scores: Coll<&str, i32> = Coll::from(pair_map! { "a" => 1, "b" => 2, "c" => 3 });
//! let doubled = scores.map(|n| n * 2).take(2);
//!
//! assert_eq!(
//!     doubled.as_map().and_then(|m| m.get(&"b")),
//!     Some(&4)
//! );
//! ```

mod error;
mod key;
mod lazy_seq;
mod pair_map;
mod shape;

pub use error::{CollectionError, InvalidArgumentError, InvalidPathError, UnsupportedShapeError};
pub use key::Key;
pub use lazy_seq::{LazyPairs, LazySeq};
pub use pair_map::{Assoc, ClonedPairs, PairMap, PairMapIter};
pub use shape::{Coll, CollPairs};
