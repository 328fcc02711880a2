//! Value-rewriting capabilities for containers.
//!
//! [`Mappable`] and [`Filterable`] are the opt-in surface a container
//! exposes so generic pipelines can transform it without knowing its
//! concrete shape. The built-in implementations all route through the
//! reduction engine with the step each shape calls for, so a user type
//! that implements these traits slots into the same generic code as
//! `Vec`, `PairMap`, and `Coll`.
//!
//! The closure bounds are the widest any shape needs: the lazy shapes
//! capture the closure inside a reusable factory, so it must be `Clone`
//! and `'static` everywhere even though the eager shapes would accept
//! less.
//!
//! # Examples
//!
//! ```rust
//! use xduce::capability::{Filterable, Mappable};
//! use xduce::coll::PairMap;
//! use xduce::pair_map;
//!
//! fn doubled<C>(source: C) -> C::WithValue<i32>
//! where
//!     C: Mappable<Value = i32>,
//! {
//!     source.map_values(|value| value * 2)
//! }
//!
//! assert_eq!(doubled(vec![1, 2, 3]), vec![2, 4, 6]);
//! assert_eq!(doubled(Some(21)), Some(42));
//!
//! let scores: PairMap<&str, i32> = pair_map! { "a" => 1, "b" => 2 };
//! assert_eq!(doubled(scores), pair_map! { "a" => 2, "b" => 4 });
//! ```

use crate::capability::shaped::Shaped;
use crate::coll::{Assoc, Coll, LazySeq, PairMap};
use crate::engine::{Append, transduce};
use crate::xform::{filter, map};

/// The capability to rewrite every value while keeping the shape.
///
/// Implementors decide what "keeping the shape" means for them: a map
/// keeps its keys, a sequence its length and order, a lazy sequence its
/// deferral. Element count never changes under `map_values`.
pub trait Mappable: Shaped + Sized {
    /// Applies `function` to every value, producing the same container
    /// shape over the results.
    #[must_use]
    fn map_values<W, F>(self, function: F) -> Self::WithValue<W>
    where
        F: FnMut(Self::Value) -> W + Clone + 'static,
        W: 'static;
}

/// The capability to drop values that fail a predicate, keeping the
/// shape of those that survive.
pub trait Filterable: Shaped + Sized {
    /// Keeps the values for which `predicate` answers `true`.
    #[must_use]
    fn filter_values<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Value) -> bool + Clone + 'static;
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<V> Mappable for Vec<V> {
    fn map_values<W, F>(self, function: F) -> Vec<W>
    where
        F: FnMut(V) -> W + Clone + 'static,
        W: 'static,
    {
        transduce(map(function), Append, Vec::new(), self)
    }
}

impl<V> Filterable for Vec<V> {
    fn filter_values<P>(self, predicate: P) -> Self
    where
        P: FnMut(&V) -> bool + Clone + 'static,
    {
        transduce(filter(predicate), Append, Vec::new(), self)
    }
}

impl<V> Mappable for Option<V> {
    fn map_values<W, F>(self, function: F) -> Option<W>
    where
        F: FnMut(V) -> W + Clone + 'static,
        W: 'static,
    {
        self.map(function)
    }
}

impl<V> Filterable for Option<V> {
    fn filter_values<P>(self, predicate: P) -> Self
    where
        P: FnMut(&V) -> bool + Clone + 'static,
    {
        self.filter(predicate)
    }
}

// =============================================================================
// Collection Shape Implementations
// =============================================================================

impl<K: PartialEq, V> Mappable for PairMap<K, V> {
    fn map_values<W, F>(self, function: F) -> PairMap<K, W>
    where
        F: FnMut(V) -> W + Clone + 'static,
        W: 'static,
    {
        transduce(map(function), Assoc, PairMap::new(), self)
    }
}

impl<K: PartialEq, V> Filterable for PairMap<K, V> {
    fn filter_values<P>(self, predicate: P) -> Self
    where
        P: FnMut(&V) -> bool + Clone + 'static,
    {
        transduce(filter(predicate), Assoc, PairMap::new(), self)
    }
}

impl<K: 'static, V: 'static> Mappable for LazySeq<K, V> {
    fn map_values<W, F>(self, function: F) -> LazySeq<K, W>
    where
        F: FnMut(V) -> W + Clone + 'static,
        W: 'static,
    {
        self.via(map(function))
    }
}

impl<K: 'static, V: 'static> Filterable for LazySeq<K, V> {
    fn filter_values<P>(self, predicate: P) -> Self
    where
        P: FnMut(&V) -> bool + Clone + 'static,
    {
        self.via(filter(predicate))
    }
}

impl<K: PartialEq + 'static, V: 'static> Mappable for Coll<K, V> {
    fn map_values<W, F>(self, function: F) -> Coll<K, W>
    where
        F: FnMut(V) -> W + Clone + 'static,
        W: 'static,
    {
        self.map(function)
    }
}

impl<K: PartialEq + 'static, V: 'static> Filterable for Coll<K, V> {
    fn filter_values<P>(self, predicate: P) -> Self
    where
        P: FnMut(&V) -> bool + Clone + 'static,
    {
        self.filter(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coll::Key;
    use crate::pair_map;
    use std::cell::Cell;
    use std::rc::Rc;

    fn lengths<C>(source: C) -> C::WithValue<usize>
    where
        C: Mappable<Value = String>,
    {
        source.map_values(|text| text.len())
    }

    #[test]
    fn one_generic_function_serves_every_shape() {
        let from_vec = lengths(vec!["a".to_string(), "bcd".to_string()]);
        assert_eq!(from_vec, vec![1, 3]);

        let from_option = lengths(Some("hello".to_string()));
        assert_eq!(from_option, Some(5));

        let from_map = lengths(pair_map! { "k" => "xyz".to_string() });
        assert_eq!(from_map, pair_map! { "k" => 3 });
    }

    #[test]
    fn pair_map_filtering_keeps_surviving_keys() {
        let scores: PairMap<&str, i32> = pair_map! { "a" => 1, "b" => 2, "c" => 3 };
        let odd = scores.filter_values(|score| score % 2 == 1);
        assert_eq!(odd, pair_map! { "a" => 1, "c" => 3 });
    }

    #[test]
    fn coll_routes_through_its_own_dispatch() {
        let collection: Coll<String, i32> = Coll::Seq(vec![1, 2, 3]);
        let doubled = collection.map_values(|value| value * 2);
        assert_eq!(doubled.as_seq(), Some(&vec![2, 4, 6]));
    }

    #[test]
    fn lazy_map_values_stays_deferred() {
        let touched = Rc::new(Cell::new(0));
        let observer = Rc::clone(&touched);

        let source: LazySeq<String, i32> = LazySeq::indexed(move || {
            let observer = Rc::clone(&observer);
            (1..=3).map(move |value| {
                observer.set(observer.get() + 1);
                value
            })
        });

        let mapped = source.map_values(|value| value * 10);
        assert_eq!(touched.get(), 0);

        let values: Vec<i32> = mapped.iterate().map(|(_, value)| value).collect();
        assert_eq!(values, vec![10, 20, 30]);
        assert_eq!(touched.get(), 3);
    }

    #[test]
    fn lazy_filter_values_keeps_original_positions() {
        let source: LazySeq<String, i32> = LazySeq::indexed(|| 1..=5);
        let kept: Vec<(Key<String>, i32)> =
            source.filter_values(|value| value % 2 == 0).iterate().collect();
        assert_eq!(kept, vec![(Key::Index(1), 2), (Key::Index(3), 4)]);
    }
}
