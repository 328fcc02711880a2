//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs
/// first, following mathematical composition order. The result is a
/// closure awaiting its input, so composed pipelines can be named and
/// reused.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h))` behaves as
///   `compose!(compose!(f, g), h)`
/// - **Identity**: composing with
///   [`identity`](crate::compose::identity) on either side behaves as
///   the original function
///
/// # Syntax
///
/// - `compose!(f)` - returns `f` unchanged
/// - `compose!(f, g)` - returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - any number of stages
///
/// # Examples
///
/// ```
/// use xduce::compose;
///
/// fn halve(n: i32) -> i32 { n / 2 }
/// fn describe(n: i32) -> String { format!("{n} left") }
///
/// let summarize = compose!(describe, halve);
/// assert_eq!(summarize(10), "5 left");
/// ```
///
/// Collection stages compose the same way; each stage is a function
/// from collection to collection:
///
/// ```
/// use xduce::compose;
/// use xduce::coll::Coll;
///
/// let keep_even = |c: Coll<String, i32>| c.filter(|n| n % 2 == 0);
/// let scale = |c: Coll<String, i32>| c.map(|n| n * 10);
///
/// // scale runs first: compose! reads right to left.
/// let pipeline = compose!(keep_even, scale);
/// let out = pipeline(Coll::Seq(vec![1, 2, 3]));
/// assert_eq!(out.as_seq(), Some(&vec![10, 20, 30]));
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition
    ($function:expr) => {
        $function
    };

    // Two functions: compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // Three or more: compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
