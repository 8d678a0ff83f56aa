//! The reduce algorithm: a strict left fold that honours [`Step::Reduced`].
//!
//! Sources are consumed one element at a time. When a step answers
//! `Reduced`, no further element is pulled, which keeps early termination
//! cheap for infinite and side-effecting sources.

use tracing::trace;

use super::reduced::Step;
use super::reducer::Reducer;
use crate::Error;

/// Folds `source` into `init` through a borrowed reducer.
///
/// Returns the unwrapped accumulator, whether the fold ran out of input or
/// was stopped by a reduced step.
pub(crate) fn fold_in<A, T, R, I>(rf: &mut R, init: A, source: I) -> A
where
    R: Reducer<A, T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    let mut accumulator = init;
    for element in source {
        match rf.step(accumulator, element) {
            Step::Continue(next) => accumulator = next,
            Step::Reduced(done) => {
                trace!("reduction stopped early");
                return done;
            }
        }
    }
    accumulator
}

/// Reduces `coll` without an initial value.
///
/// * no element: returns `rf.init()`;
/// * one element: returns it, `rf` is not called;
/// * otherwise: seeds with `rf.step(first, second)` and folds the rest.
///
/// # Errors
///
/// Returns [`Error::Arity`] when `coll` is empty and `rf` has no seed.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::{reduce, Step};
///
/// let add = |acc: i32, x: i32| Step::Continue(acc + x);
/// assert_eq!(reduce(add, [1, 2, 3, 4]).unwrap(), 10);
/// assert_eq!(reduce(add, [7]).unwrap(), 7);
/// assert!(reduce(add, Vec::<i32>::new()).is_err());
/// ```
pub fn reduce<T, R, I>(mut rf: R, coll: I) -> Result<T, Error>
where
    R: Reducer<T, T>,
    I: IntoIterator<Item = T>,
{
    let mut source = coll.into_iter();
    let Some(first) = source.next() else {
        return rf.init();
    };
    let Some(second) = source.next() else {
        return Ok(first);
    };
    match rf.step(first, second) {
        Step::Continue(seed) => Ok(fold_in(&mut rf, seed, source)),
        Step::Reduced(done) => Ok(done),
    }
}

/// Reduces `coll` into `init`.
///
/// Stops at the first reduced step and returns its unwrapped value.
/// An empty `coll` returns `init` without calling `rf`.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::{reduce_with_init, reduced, Step};
///
/// let until_ten = |acc: i32, x: i32| {
///     if acc + x >= 10 { reduced(acc + x) } else { Step::Continue(acc + x) }
/// };
/// assert_eq!(reduce_with_init(until_ten, 0, 1..), 10);
/// ```
pub fn reduce_with_init<A, T, R, I>(mut rf: R, init: A, coll: I) -> A
where
    R: Reducer<A, T>,
    I: IntoIterator<Item = T>,
{
    fold_in(&mut rf, init, coll)
}

/// Reduces a source of fallible elements into `init`.
///
/// The first `Err` element stops the fold, nothing further is pulled, and
/// the error is returned. Useful over lazy sequences, whose iteration yields
/// `Result` items.
///
/// # Errors
///
/// Returns the first error yielded by `coll`.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::{try_reduce_with_init, Step};
///
/// let add = |acc: i32, x: i32| Step::Continue(acc + x);
/// let items: Vec<Result<i32, String>> = vec![Ok(1), Err("boom".to_string()), Ok(3)];
/// assert_eq!(try_reduce_with_init(add, 0, items), Err("boom".to_string()));
/// ```
pub fn try_reduce_with_init<A, T, E, R, I>(mut rf: R, init: A, coll: I) -> Result<A, E>
where
    R: Reducer<A, T>,
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut fallible = |accumulator: Result<A, E>, element: Result<T, E>| match (
        accumulator,
        element,
    ) {
        (Ok(accumulator), Ok(element)) => rf.step(accumulator, element).map(Ok),
        (Ok(_), Err(error)) | (Err(error), _) => Step::Reduced(Err(error)),
    };
    fold_in(&mut fallible, Ok(init), coll)
}
