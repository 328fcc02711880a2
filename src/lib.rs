//! # xduce
//!
//! A transducer-based functional collections library with unified eager and
//! lazy execution, shape-aware dispatch, and relational joins.
//!
//! ## Overview
//!
//! This library expresses collection transformations as transducers: values
//! that describe a transformation step independently of the collection that
//! feeds it and the accumulation that consumes it. One declarative pipeline
//! runs eagerly over sequences and maps, or lazily over pull-based sources,
//! without being rewritten per collection type. It includes:
//!
//! - **Reduction Engine**: `Reducer` / `Transducer` contracts with explicit
//!   init, step, and flush phases, plus the `Reduction` early-termination
//!   signal
//! - **Transformations**: map, filter, take, skip, scan, `flat_map`,
//!   partitioning and chunking as composable transducer values
//! - **Lazy Sequences**: a pull-based adapter that re-derives on-demand
//!   iteration from push-style reducers
//! - **Joins**: inner, left, and right relational joins as one
//!   two-dimensional transducer framework
//! - **Shape Dispatch**: the `Coll` union over sequences, insertion-ordered
//!   maps, and lazy sequences, selecting key-preserving or appending steps
//!   per shape
//! - **Function Composition**: `compose!`, `pipe!`, `partial!`, and currying
//!   macros
//!
//! ## Feature Flags
//!
//! - `engine`: reduction engine (`Reducer`, `Transducer`, eager and lazy
//!   drivers)
//! - `xform`: the transformation library (map, filter, take, partition, ...)
//! - `join`: two-dimensional joins
//! - `coll`: the `Coll` shape union, `PairMap`, and `LazySeq`
//! - `nested`: nested values and path operations
//! - `capability`: opt-in traits for user-defined collection types
//! - `compose`: function composition macros
//! - `serde`: serialization support for collection shapes
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use xduce::prelude::*;
//!
//! let doubled_evens = transduce(
//!     filter(|value: &i32| value % 2 == 0).then(map(|value| value * 10)),
//!     Append,
//!     Vec::new(),
//!     vec![1, 2, 3, 4, 5],
//! );
//!
//! assert_eq!(doubled_evens, vec![20, 40]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use xduce::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "engine")]
    pub use crate::engine::*;

    #[cfg(feature = "xform")]
    pub use crate::xform::*;

    #[cfg(feature = "join")]
    pub use crate::join::*;

    #[cfg(feature = "coll")]
    pub use crate::coll::*;

    #[cfg(feature = "nested")]
    pub use crate::nested::*;

    #[cfg(feature = "capability")]
    pub use crate::capability::*;
}

#[cfg(feature = "engine")]
pub mod engine;

#[cfg(feature = "xform")]
pub mod xform;

#[cfg(feature = "join")]
pub mod join;

#[cfg(feature = "coll")]
pub mod coll;

#[cfg(feature = "nested")]
pub mod nested;

#[cfg(feature = "capability")]
pub mod capability;

#[cfg(feature = "compose")]
pub mod compose;
