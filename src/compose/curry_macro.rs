//! The curry macro family for one-argument-at-a-time application.
//!
//! Currying turns `f(a, b)` into `f(a)(b)`: each application fixes one
//! argument and returns a closure awaiting the next. The macros share
//! the function and already-applied arguments through `std::rc::Rc`,
//! so a partially applied stage can be reused: `curried(2)` and
//! `curried(3)` coexist, and each can be called many times. The
//! returned closures implement [`Fn`] and combine freely with
//! [`compose!`](crate::compose!) and [`pipe!`](crate::pipe!).

/// Converts a 2-argument function into curried form.
///
/// # Type Requirements
///
/// The function must implement [`Fn`]; the first argument type must
/// implement [`Clone`] so partial applications stay reusable.
///
/// # Examples
///
/// ```
/// use xduce::curry2;
///
/// fn scale(factor: i32, value: i32) -> i32 { factor * value }
///
/// let curried = curry2!(scale);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(double(7), 14);
/// assert_eq!(triple(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into curried form.
///
/// # Type Requirements
///
/// The function must implement [`Fn`]; every argument type except the
/// last must implement [`Clone`].
///
/// # Examples
///
/// ```
/// use xduce::curry3;
///
/// fn weigh(factor: i32, offset: i32, value: i32) -> i32 {
///     factor * value + offset
/// }
///
/// let curried = curry3!(weigh);
/// let doubled = curried(2);
/// let doubled_plus_one = doubled(1);
///
/// assert_eq!(doubled_plus_one(10), 21);
/// assert_eq!(doubled_plus_one(3), 7);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}
