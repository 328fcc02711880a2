//! Function composition utilities.
//!
//! Transducer builders like `map(f)` and `take(n)` already follow a
//! collection-last convention: they configure a transformation and wait
//! for the data. This module supplies the glue for composing plain
//! functions around them:
//!
//! - [`compose!`]: compose functions right-to-left (mathematical order)
//! - [`pipe!`]: thread a value through functions left-to-right
//! - [`partial!`]: fix some arguments now, leave `__` placeholders open
//! - [`curry2!`] / [`curry3!`]: one-argument-at-a-time application
//! - [`identity`], [`constant`], [`flip`]: the small combinators the
//!   macros bottom out in
//!
//! # Examples
//!
//! Threading a collection through shape-preserving stages:
//!
//! ```
//! use xduce::pipe;
//! use xduce::coll::Coll;
//!
//! let out = pipe!(
//!     Coll::<String, i32>::Seq(vec![1, 2, 3, 4, 5]),
//!     |c: Coll<String, i32>| c.filter(|n| n % 2 == 1),
//!     |c: Coll<String, i32>| c.map(|n| n * n),
//! );
//! assert_eq!(out.as_seq(), Some(&vec![1, 9, 25]));
//! ```
//!
//! Building reusable stages with partial application:
//!
//! ```
//! use xduce::{compose, partial};
//!
//! fn add(amount: i32, value: i32) -> i32 { amount + value }
//!
//! let fahrenheit = compose!(partial!(add, 32, __), |celsius: i32| celsius * 9 / 5);
//! assert_eq!(fahrenheit(100), 212);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h))` behaves as
//!   `compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f)` and `compose!(f, identity)`
//!   behave as `f`
//! - **Pipe/compose duality**: `pipe!(x, f, g)` equals
//!   `compose!(g, f)(x)`
//! - **Flip involution**: `flip(flip(f))` behaves as `f`

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

// Re-export helper functions
pub use utils::{__, Placeholder, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::partial;
pub use crate::pipe;
