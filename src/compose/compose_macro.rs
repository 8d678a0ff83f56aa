//! The `compose!` macro: right-to-left function composition.

/// Composes functions right-to-left.
///
/// `compose!(f, g)(x)` is `f(g(x))`: the rightmost function sees the input
/// and every function to its left receives the result of its neighbour.
///
/// # Examples
///
/// ```
/// use reduct::compose;
///
/// let cube = |x: i32| x.pow(3);
/// let double = |x: i32| 2 * x;
/// let add_three = |x: i32| x + 3;
///
/// let composed = compose!(cube, double, add_three);
/// assert_eq!(composed(2), 1000);
///
/// let unchanged = compose!(double);
/// assert_eq!(unchanged(4), 8);
///
/// let nothing = compose!();
/// assert_eq!(nothing("same"), "same");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner(input))
    }};
}
