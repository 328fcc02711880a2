//! Opt-in capability traits for collection-like types.
//!
//! The shape-dispatching operations on [`Coll`](crate::coll::Coll) are
//! closed over its three arms. These traits are the open counterpart: a
//! user-defined container implements [`Shaped`] to name its type
//! constructor, then opts into the operations it supports
//! ([`Mappable`], [`Filterable`], [`Emptied`]), and generic code written
//! against the traits treats it exactly like the built-in shapes. The
//! built-in implementations route through the reduction engine with the
//! step function each shape calls for.
//!
//! # Example
//!
//! ```rust
//! use xduce::capability::{Emptied, Mappable, Shaped};
//!
//! /// A queue that keeps at most its capacity in elements.
//! #[derive(Debug, Clone, PartialEq)]
//! struct Bounded<V> {
//!     limit: usize,
//!     items: Vec<V>,
//! }
//!
//! impl<V> Shaped for Bounded<V> {
//!     type Value = V;
//!     type WithValue<W> = Bounded<W>;
//! }
//!
//! impl<V> Mappable for Bounded<V> {
//!     fn map_values<W, F>(self, function: F) -> Bounded<W>
//!     where
//!         F: FnMut(V) -> W + Clone + 'static,
//!         W: 'static,
//!     {
//!         Bounded {
//!             limit: self.limit,
//!             items: self.items.map_values(function),
//!         }
//!     }
//! }
//!
//! impl<V> Emptied for Bounded<V> {
//!     fn emptied(&self) -> Self {
//!         Self { limit: self.limit, items: Vec::new() }
//!     }
//! }
//!
//! let queue = Bounded { limit: 4, items: vec![1, 2, 3] };
//! let doubled = queue.map_values(|n| n * 2);
//! assert_eq!(doubled.items, vec![2, 4, 6]);
//! assert_eq!(doubled.emptied().limit, 4);
//! ```

mod emptied;
mod mappable;
mod shaped;

pub use emptied::Emptied;
pub use mappable::{Filterable, Mappable};
pub use shaped::Shaped;
