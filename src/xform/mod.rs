//! The transformation library: every operation as a transducer value.
//!
//! Each operation here is a small configuration struct implementing
//! [`Transducer`](crate::engine::Transducer), built by a lowercase
//! constructor function:
//!
//! - [`map`] / [`map_entries`]: rewrite values, or keys and values together
//! - [`filter`]: keep values satisfying a predicate
//! - [`take`] / [`take_while`]: stop early, never over-reading the source
//! - [`skip`] / [`skip_while`]: drop a prefix
//! - [`partition_by`]: group consecutive values by a discriminator
//! - [`split_every`]: fixed-size chunking
//! - [`scan`]: running fold, emitting each intermediate accumulator
//! - [`flat_map`]: zero-or-more outputs per input
//! - [`reindex`]: replace keys with dense positions
//!
//! Stateful operations (take, skip, partition, chunking, scan) follow the
//! engine's state rule: the struct holds configuration, and counters or
//! pending buffers are minted inside the reducer at apply time. Pending
//! state is emitted during the flush phase, which composition cascades
//! through the whole chain.
//!
//! # Examples
//!
//! ```rust
//! use xduce::engine::{Append, Transducer, transduce};
//! use xduce::xform::{filter, map, partition_by};
//!
//! let grouped = transduce(
//!     map(|n: i32| n + 1)
//!         .then(filter(|n: &i32| *n != 4))
//!         .then(partition_by(|n: &i32| n / 3)),
//!     Append,
//!     Vec::new(),
//!     vec![1, 2, 3, 4, 5],
//! );
//! assert_eq!(grouped, vec![vec![2], vec![3, 5], vec![6]]);
//! ```

mod filter;
mod flat_map;
mod map;
mod partition;
mod reindex;
mod scan;
mod skip;
mod take;

pub use filter::{Filter, FilterReducer, filter};
pub use flat_map::{FlatMap, FlatMapReducer, flat_map};
pub use map::{Map, MapEntries, MapEntriesReducer, MapReducer, map, map_entries};
pub use partition::{
    PartitionBy, PartitionByReducer, SplitEvery, SplitEveryReducer, partition_by, split_every,
};
pub use reindex::{Reindex, ReindexReducer, reindex};
pub use scan::{Scan, ScanReducer, scan};
pub use skip::{Skip, SkipReducer, SkipWhile, SkipWhileReducer, skip, skip_while};
pub use take::{Take, TakeReducer, TakeWhile, TakeWhileReducer, take, take_while};
