//! Shape-preserving type constructor emulation through Generic
//! Associated Types.
//!
//! Rust cannot abstract over `Vec<_>` or `Coll<K, _>` as bare type
//! constructors, so this module carries the constructor through a GAT:
//! [`Shaped::WithValue<W>`] names "the same container holding `W`
//! instead". The value-transforming capabilities build on this seam.
//!
//! # Example
//!
//! ```rust
//! use xduce::capability::Shaped;
//!
//! fn drained<C: Shaped>(_source: C) -> C::WithValue<String>
//! where
//!     C::WithValue<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let relabeled: Vec<String> = drained(vec![1, 2, 3]);
//! assert!(relabeled.is_empty());
//! ```

use crate::coll::{Coll, LazySeq, PairMap};

/// A container type viewed as a value-holding type constructor.
///
/// `Shaped` answers one question: given this container of
/// [`Value`](Shaped::Value)s, what is the same container holding `W`s?
/// The constraint on [`WithValue`](Shaped::WithValue) keeps the answer
/// itself shaped, so transformations can chain at the type level.
///
/// # Laws
///
/// `Self::WithValue<Self::Value>` names the same type as `Self`.
pub trait Shaped {
    /// The element type this container currently holds.
    type Value;

    /// The same container holding `W` instead.
    type WithValue<W>: Shaped<Value = W>;
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<V> Shaped for Vec<V> {
    type Value = V;
    type WithValue<W> = Vec<W>;
}

impl<V> Shaped for Option<V> {
    type Value = V;
    type WithValue<W> = Option<W>;
}

// =============================================================================
// Collection Shape Implementations
// =============================================================================

impl<K, V> Shaped for PairMap<K, V> {
    type Value = V;
    type WithValue<W> = PairMap<K, W>;
}

impl<K, V> Shaped for LazySeq<K, V> {
    type Value = V;
    type WithValue<W> = LazySeq<K, W>;
}

impl<K, V> Shaped for Coll<K, V> {
    type Value = V;
    type WithValue<W> = Coll<K, W>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_value_type_is_correct() {
        fn assert_value<T: Shaped<Value = i32>>() {}
        assert_value::<Vec<i32>>();
    }

    #[test]
    fn with_value_rebuilds_the_same_constructor() {
        fn assert_rebuilt<T, W>()
        where
            T: Shaped,
            T::WithValue<W>: Shaped<Value = W>,
        {
        }

        assert_rebuilt::<Option<i32>, String>();
        assert_rebuilt::<PairMap<&str, i32>, bool>();
        assert_rebuilt::<Coll<String, u8>, f64>();
    }

    #[test]
    fn chained_with_value_transformations() {
        type Step1 = <Coll<String, i32> as Shaped>::WithValue<bool>;
        type Step2 = <Step1 as Shaped>::WithValue<char>;

        fn assert_holds_chars<T: Shaped<Value = char>>() {}
        assert_holds_chars::<Step2>();
    }

    #[test]
    fn pair_map_with_value_keeps_the_key_type() {
        fn assert_keyed<K, V, W>()
        where
            PairMap<K, V>: Shaped<Value = V, WithValue<W> = PairMap<K, W>>,
        {
        }

        assert_keyed::<String, i32, bool>();
        assert_keyed::<u8, (), Vec<i32>>();
    }
}
