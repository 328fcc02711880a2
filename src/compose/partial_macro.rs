//! The `partial!` macro for placeholder-based partial application.

/// Partially applies arguments to a function, with `__` marking the
/// arguments left open.
///
/// Fixed arguments are captured once and cloned per call, so the
/// resulting closure implements [`Fn`] and can be called repeatedly or
/// handed to [`compose!`](crate::compose!) and
/// [`pipe!`](crate::pipe!). The `__` is matched as a literal token; do
/// not import [`__`](crate::compose::__) at the invocation site.
///
/// # Syntax
///
/// For a binary function `f(a, b)`:
///
/// - `partial!(f, value, __)` - `|b| f(value, b)`
/// - `partial!(f, __, value)` - `|a| f(a, value)`
/// - `partial!(f, v1, v2)` - `|| f(v1, v2)` (a thunk)
/// - `partial!(f, __, __)` - `|a, b| f(a, b)`
///
/// The same patterns exist for ternary functions.
///
/// # Type Requirements
///
/// Fixed values must implement [`Clone`]; the function must implement
/// [`Fn`].
///
/// # Examples
///
/// ```
/// use xduce::partial;
///
/// fn scale(factor: i32, value: i32) -> i32 { factor * value }
///
/// let double = partial!(scale, 2, __);
/// assert_eq!(double(21), 42);
/// assert_eq!(double(5), 10);
/// ```
///
/// Fixing the trailing arguments of a path-style operation:
///
/// ```
/// use xduce::partial;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let as_percent = partial!(clamp, 0, 100, __);
/// assert_eq!(as_percent(150), 100);
/// assert_eq!(as_percent(-20), 0);
/// ```
///
/// Partially applied stages slot into pipelines:
///
/// ```
/// use xduce::{compose, partial};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
/// fn scale(factor: i32, value: i32) -> i32 { factor * value }
///
/// let double_then_add_ten = compose!(partial!(add, 10, __), partial!(scale, 2, __));
/// assert_eq!(double_then_add_ten(5), 20);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 3-argument functions (longer patterns first)
    // =========================================================================

    // (f, __, __, __) -> |a, b, c| f(a, b, c)
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    // (f, v1, __, __) -> |b, c| f(v1, b, c)
    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};

    // (f, __, v2, __) -> |a, c| f(a, v2, c)
    ($function:expr, __, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3)
    }};

    // (f, __, __, v3) -> |a, b| f(a, b, v3)
    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};

    // (f, v1, v2, __) -> |c| f(v1, v2, c)
    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};

    // (f, v1, __, v3) -> |b| f(v1, b, v3)
    ($function:expr, $arg1:expr, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2| function(arg1.clone(), arg2, arg3.clone())
    }};

    // (f, __, v2, v3) -> |a| f(a, v2, v3)
    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    // (f, v1, v2, v3) -> || f(v1, v2, v3) (thunk)
    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions (must come after the 3-argument patterns)
    // =========================================================================

    // (f, __, __) -> |a, b| f(a, b)
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    // (f, value, __) -> |b| f(value, b)
    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};

    // (f, __, value) -> |a| f(a, value)
    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};

    // (f, v1, v2) -> || f(v1, v2) (thunk, must be last)
    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};
}
