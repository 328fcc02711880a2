//! The `pipe!` macro for left-to-right value threading.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`: the value enters on the left
/// and flows through the stages in the order written. Unlike
/// [`compose!`](crate::compose!), which builds a function, `pipe!`
/// applies immediately.
///
/// Each stage only needs [`FnOnce`]; stages may consume captured
/// state.
///
/// # Syntax
///
/// - `pipe!(x)` - returns `x` unchanged
/// - `pipe!(x, f)` - returns `f(x)`
/// - `pipe!(x, f, g, ...)` - threads through every stage
///
/// # Examples
///
/// ```
/// use xduce::pipe;
///
/// fn trim(text: &str) -> &str { text.trim() }
/// fn shout(text: &str) -> String { text.to_uppercase() }
///
/// let result = pipe!("  ready  ", trim, shout);
/// assert_eq!(result, "READY");
/// ```
///
/// Collections thread through shape-preserving stages the same way:
///
/// ```
/// use xduce::pipe;
/// use xduce::coll::Coll;
///
/// let out = pipe!(
///     Coll::<String, i32>::Seq(vec![1, 2, 3, 4, 5]),
///     |c: Coll<String, i32>| c.filter(|n| n % 2 == 1),
///     |c: Coll<String, i32>| c.map(|n| n * 10),
/// );
/// assert_eq!(out.as_seq(), Some(&vec![10, 30, 50]));
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
