//! The reduction engine: reducers, transducers, and their drivers.
//!
//! This module provides the contracts every transformation in the library is
//! built from:
//!
//! - [`Reduction`]: the control-flow signal distinguishing "keep going" from
//!   "this reduction is finished early"
//! - [`Reducer`]: a step function with explicit init, step, and flush phases
//! - [`Transducer`]: a value mapping a downstream [`Reducer`] to a wrapped
//!   one, composable with [`Transducer::then`]
//! - [`Pairs`]: the traversal seam that turns a collection into a keyed
//!   pair stream
//! - [`transduce`]: the eager driver (one pass, short-circuit on
//!   [`Reduction::Done`], flush on normal exhaustion)
//! - [`LazySteps`]: the pull-based adapter that re-derives on-demand
//!   iteration from the same push-style contracts
//!
//! ## Separation of configuration and state
//!
//! A transducer value holds configuration only. All per-run mutable state
//! (counters, pending buffers, seen flags) lives in the reducer built by
//! [`Transducer::apply`], so a transducer can be reused across any number of
//! reduction runs without state leaking between them.
//!
//! # Examples
//!
//! ```rust
//! use xduce::engine::{Append, Transducer, transduce};
//! use xduce::xform::{filter, map};
//!
//! let transducer = map(|n: i32| n * n).then(filter(|n: &i32| n % 2 == 1));
//!
//! // The same transducer value drives independent runs.
//! let first = transduce(transducer.clone(), Append, Vec::new(), vec![1, 2, 3]);
//! let second = transduce(transducer, Append, Vec::new(), vec![4, 5, 6]);
//!
//! assert_eq!(first, vec![1, 9]);
//! assert_eq!(second, vec![25]);
//! ```

mod eager;
mod lazy;
mod reducer;
mod reduction;
mod source;
mod step;
mod transducer;

pub use eager::{transduce, transduce_init};
pub use lazy::{LazySteps, lazy_steps};
pub use reducer::Reducer;
pub use reduction::Reduction;
pub use source::{IterPairs, Pairs};
pub use step::{Append, Emit, First, FoldPairs, FoldUntil, FoldWith};
pub use transducer::{Composed, Identity, Transducer, identity};
