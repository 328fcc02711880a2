//! Small combinators used alongside the composition macros.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that ignores its input and always yields
//!   the same value
//! - [`flip`]: swaps the arguments of a binary function
//!
//! These cover the degenerate ends of pipelines: `identity` as a no-op
//! stage, `constant` to pin a value, `flip` to fix the other argument
//! of combine functions and join predicates.

/// Returns the value unchanged.
///
/// The unit of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use xduce::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring
/// its input.
///
/// Handy for replacing every value in a pipeline stage or supplying a
/// fallback combine function.
///
/// # Examples
///
/// ```
/// use xduce::compose::constant;
/// use xduce::coll::Coll;
///
/// let collection: Coll<String, i32> = Coll::Seq(vec![1, 2, 3]);
/// let blanked = collection.map(constant(0));
/// assert_eq!(blanked.as_seq(), Some(&vec![0, 0, 0]));
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T + Clone {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b)` is `f(b, a)`. Flipping twice restores the original
/// argument order. Useful when a merge or join combine function wants
/// its operands the other way around.
///
/// # Examples
///
/// ```
/// use xduce::compose::flip;
///
/// fn label(prefix: &str, body: &str) -> String {
///     format!("{prefix}:{body}")
/// }
///
/// let flipped = flip(label);
/// assert_eq!(flipped("value", "key"), "key:value");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Placeholder marker type for partial application.
///
/// Used by the [`partial!`](crate::partial) macro, which matches `__`
/// as a literal token. Do not import the constant when invoking the
/// macro; write `__` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant for partial application.
///
/// Exists for programmatic uses of [`Placeholder`]; inside
/// [`partial!`](crate::partial) invocations the `__` token is matched
/// literally and must not be imported. Named with two underscores
/// because `macro_rules!` cannot match a lone `_` as a literal token.
///
/// # Examples
///
/// ```
/// use xduce::partial;
///
/// fn between(low: i32, high: i32, value: i32) -> bool {
///     low <= value && value <= high
/// }
///
/// let valid_port = partial!(between, 1024, 65535, __);
/// assert!(valid_port(8080));
/// assert!(!valid_port(80));
/// ```
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
