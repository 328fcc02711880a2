//! Two-dimensional reductions: relational joins as transducers.
//!
//! A join pairs every element of an *outer* source with every element of an
//! *inner* source and decides, pair by pair, what reaches the downstream
//! reducer. This module generalizes the one-dimensional engine to that
//! shape:
//!
//! - [`BiReducer`]: a step function over `(outer, inner)` pairs, with a
//!   per-outer-row [`end_outer`](BiReducer::end_outer) hook and a final
//!   flush
//! - [`BiTransducer`]: maps an ordinary downstream
//!   [`Reducer`](crate::engine::Reducer) to a [`BiReducer`], so join output
//!   flows into the same steps as any one-dimensional reduction
//! - [`transduce2d`]: the nested-loop driver
//! - [`InnerJoin`] / [`LeftJoin`] and the [`inner_join`], [`left_join`],
//!   [`right_join`] functions
//!
//! The driver takes the inner operand by shared reference and re-traverses
//! it once per outer element, so the cost is always
//! `O(|outer| x |inner|)`: a nested loop with an arbitrary predicate, no
//! index. Joined rows carry dense positional keys in emission order.
//!
//! # Examples
//!
//! ```rust
//! use xduce::join::inner_join;
//!
//! let users = vec![("alice", 1), ("bob", 2)];
//! let orders = vec![(1, "book"), (2, "pen"), (1, "mug")];
//!
//! let rows = inner_join(
//!     |user, order| user.1 == order.0,
//!     |user, order| (user.0, order.1),
//!     users,
//!     &orders,
//! );
//! assert_eq!(rows, vec![("alice", "book"), ("alice", "mug"), ("bob", "pen")]);
//! ```

mod contract;
mod driver;
mod ops;

pub use contract::{BiReducer, BiTransducer};
pub use driver::transduce2d;
pub use ops::{
    InnerJoin, InnerJoinReducer, LeftJoin, LeftJoinReducer, inner_join, left_join, right_join,
};
