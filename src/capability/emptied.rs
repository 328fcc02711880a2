//! The shape-zero capability.
//!
//! [`Emptied`] derives a correctly-typed zero from a sample value: an
//! empty string from a string, zero from a number, an empty map from a
//! map, an empty lazy sequence from a lazy sequence. Operations that
//! must return "nothing, but the same kind of nothing the input was"
//! call this instead of guessing a shape.
//!
//! # Laws
//!
//! Emptying is idempotent:
//!
//! ```text
//! x.emptied().emptied() == x.emptied()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use xduce::capability::Emptied;
//!
//! assert_eq!(42_i64.emptied(), 0);
//! assert_eq!("full".to_string().emptied(), String::new());
//! assert_eq!(vec![1, 2, 3].emptied(), Vec::new());
//! ```

use crate::coll::{Coll, LazySeq, PairMap};

/// The capability to produce an empty value of the same shape.
///
/// Takes the sample by reference: the shape is read, never consumed.
/// For scalars the shape is just the type, so the sample's value is
/// ignored entirely.
pub trait Emptied {
    /// Returns the zero value shaped like `self`.
    #[must_use]
    fn emptied(&self) -> Self;
}

// =============================================================================
// Numeric Implementations
// =============================================================================

impl Emptied for i8 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for i16 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for i32 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for i64 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for i128 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for isize {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for u8 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for u16 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for u32 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for u64 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for u128 {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for usize {
    fn emptied(&self) -> Self {
        0
    }
}

impl Emptied for f32 {
    fn emptied(&self) -> Self {
        0.0
    }
}

impl Emptied for f64 {
    fn emptied(&self) -> Self {
        0.0
    }
}

// =============================================================================
// String Implementations
// =============================================================================

impl Emptied for String {
    fn emptied(&self) -> Self {
        Self::new()
    }
}

impl Emptied for &str {
    fn emptied(&self) -> Self {
        ""
    }
}

// =============================================================================
// Standard Container Implementations
// =============================================================================

impl<T> Emptied for Vec<T> {
    fn emptied(&self) -> Self {
        Self::new()
    }
}

/// The empty `Option` is `None` regardless of what the sample holds.
impl<T> Emptied for Option<T> {
    fn emptied(&self) -> Self {
        None
    }
}

impl<A: Emptied, B: Emptied> Emptied for (A, B) {
    fn emptied(&self) -> Self {
        (self.0.emptied(), self.1.emptied())
    }
}

impl<A: Emptied, B: Emptied, C: Emptied> Emptied for (A, B, C) {
    fn emptied(&self) -> Self {
        (self.0.emptied(), self.1.emptied(), self.2.emptied())
    }
}

// =============================================================================
// Collection Shape Implementations
// =============================================================================

impl<K, V> Emptied for PairMap<K, V> {
    fn emptied(&self) -> Self {
        Self::new()
    }
}

impl<K: 'static, V: 'static> Emptied for LazySeq<K, V> {
    fn emptied(&self) -> Self {
        Self::empty()
    }
}

/// A collection empties to the same arm it occupies; the lazy arm stays
/// lazy.
impl<K: PartialEq + 'static, V: 'static> Emptied for Coll<K, V> {
    fn emptied(&self) -> Self {
        Coll::emptied(self)
    }
}

#[cfg(feature = "nested")]
/// A leaf empties through its value type; an interior collection
/// empties to the same empty arm, dropping its children.
impl<K: PartialEq + 'static, V: Emptied + 'static> Emptied
    for crate::nested::Nested<K, V>
{
    fn emptied(&self) -> Self {
        match self {
            Self::Leaf(value) => Self::Leaf(value.emptied()),
            Self::Coll(collection) => Self::Coll(Coll::emptied(collection)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(17_i32, 0)]
    #[case(-4, 0)]
    #[case(0, 0)]
    fn integers_empty_to_zero(#[case] sample: i32, #[case] expected: i32) {
        assert_eq!(sample.emptied(), expected);
    }

    #[test]
    fn floats_empty_to_zero() {
        assert_eq!(2.5_f64.emptied(), 0.0);
    }

    #[test]
    fn strings_empty_to_the_empty_string() {
        assert_eq!("loaded".to_string().emptied(), String::new());
        assert_eq!("loaded".emptied(), "");
    }

    #[test]
    fn options_empty_to_none() {
        assert_eq!(Some(3).emptied(), None);
        let nothing: Option<i32> = None;
        assert_eq!(nothing.emptied(), None);
    }

    #[test]
    fn tuples_empty_componentwise() {
        assert_eq!((7_i32, "x".to_string()).emptied(), (0, String::new()));
    }

    #[test]
    fn emptying_is_idempotent() {
        let sample = vec![1, 2, 3];
        assert_eq!(sample.emptied().emptied(), sample.emptied());

        let text = "abc".to_string();
        assert_eq!(text.emptied().emptied(), text.emptied());
    }

    #[test]
    fn collections_keep_their_arm() {
        let sequence: Coll<String, i32> = Coll::Seq(vec![1, 2]);
        assert!(matches!(sequence.emptied(), Coll::Seq(values) if values.is_empty()));

        let map: Coll<&str, i32> = Coll::Map(crate::pair_map! { "a" => 1 });
        assert!(matches!(map.emptied(), Coll::Map(entries) if entries.is_empty()));

        let lazy: Coll<String, i32> = Coll::Lazy(LazySeq::indexed(|| 1..=3));
        let emptied = lazy.emptied();
        assert!(emptied.is_lazy());
        assert_eq!(emptied.count(), 0);
    }

    #[cfg(feature = "nested")]
    #[test]
    fn nested_leaves_and_containers_empty_by_their_own_shape() {
        use crate::nested::Nested;

        let leaf: Nested<&str, i32> = Nested::leaf(9);
        assert_eq!(leaf.emptied().as_leaf(), Some(&0));

        let tree: Nested<&str, i32> = Nested::map(crate::pair_map! {
            "count" => Nested::leaf(9),
        });
        let emptied = tree.emptied();
        assert!(
            matches!(emptied.as_coll(), Some(Coll::Map(entries)) if entries.is_empty())
        );
    }
}
