//! Combinators shared by the composition macros and the reducers.

/// Returns the value unchanged.
///
/// The unit of composition, `compose!()` itself, and the default completion
/// of [`completing`](crate::reduce::completing).
///
/// # Examples
///
/// ```
/// use reduct::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
