//! The reduced protocol: signalling early termination of a reduction.
//!
//! Every call to a reducer's `step` answers with a [`Step`]: either
//! [`Step::Continue`] with the next accumulator, or [`Step::Reduced`] with a
//! final accumulator after which the reduction must stop.
//!
//! Wrapping nests by type. `reduced(reduced(v))` is a `Step<Step<V>>`, and
//! [`unreduced`] removes exactly one layer. [`preserving_reduced`] relies on
//! this to let an inner reduction (over a nested collection) stop an outer
//! one as well.
//!
//! # Examples
//!
//! ```rust
//! use reduct::reduce::{ensure_reduced, is_reduced, reduced, unreduced, Step};
//!
//! let done = reduced("val");
//! assert!(is_reduced(&done));
//! assert_eq!(unreduced(done), "val");
//!
//! // ensure_reduced never double wraps
//! assert_eq!(ensure_reduced(reduced(1)), Step::Reduced(1));
//! assert_eq!(ensure_reduced(Step::Continue(1)), Step::Reduced(1));
//! ```

use super::reducer::Reducer;
use crate::Error;

/// The outcome of one reducing step.
///
/// `Continue` carries an accumulator that may be fed further input;
/// `Reduced` carries a final accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// Keep reducing with this accumulator.
    Continue(T),
    /// Stop reducing; this is the final accumulator.
    Reduced(T),
}

impl<T> Step<T> {
    /// Returns `true` for [`Step::Reduced`].
    #[inline]
    pub const fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced(_))
    }

    /// Removes one layer of wrapping, reduced or not.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Continue(value) | Self::Reduced(value) => value,
        }
    }

    /// Returns a reference to the wrapped accumulator.
    #[inline]
    pub const fn as_inner(&self) -> &T {
        match self {
            Self::Continue(value) | Self::Reduced(value) => value,
        }
    }

    /// Maps the wrapped accumulator, keeping the reduced flag.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Continue(value) => Step::Continue(function(value)),
            Self::Reduced(value) => Step::Reduced(function(value)),
        }
    }
}

impl<T> From<T> for Step<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Continue(value)
    }
}

/// Wraps `value` so that a reduction stops with it.
#[inline]
pub const fn reduced<T>(value: T) -> Step<T> {
    Step::Reduced(value)
}

/// Returns `true` when `step` signals termination.
#[inline]
pub const fn is_reduced<T>(step: &Step<T>) -> bool {
    step.is_reduced()
}

/// Marks `step` as reduced. An already reduced step is returned unchanged.
#[inline]
pub fn ensure_reduced<T>(step: Step<T>) -> Step<T> {
    match step {
        Step::Continue(value) => Step::Reduced(value),
        reduced @ Step::Reduced(_) => reduced,
    }
}

/// Unwraps exactly one layer of `step`.
#[inline]
pub fn unreduced<T>(step: Step<T>) -> T {
    step.into_inner()
}

/// A reducer that wraps a reduced step of the inner reducer once more.
///
/// Its accumulator is a `Step<A>`: a reduction driven by it returns
/// `Step::Reduced(a)` when the inner reducer asked to stop and
/// `Step::Continue(a)` when the input simply ran out. `cat` uses this to
/// carry a stop signal out of a nested collection.
pub struct PreservingReduced<'a, R> {
    inner: &'a mut R,
}

/// Borrows `rf` as a reducer whose reduced results survive one unwrapping.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::{preserving_reduced, reduce_with_init, reduced, Step};
///
/// let mut stop_at_two = |sum: i32, x: i32| if x == 2 { reduced(sum + x) } else { Step::Continue(sum + x) };
/// let outcome = reduce_with_init(preserving_reduced(&mut stop_at_two), Step::Continue(0), [1, 2, 3]);
/// assert_eq!(outcome, Step::Reduced(3));
/// ```
pub fn preserving_reduced<R>(rf: &mut R) -> PreservingReduced<'_, R> {
    PreservingReduced { inner: rf }
}

impl<A, T, R> Reducer<Step<A>, T> for PreservingReduced<'_, R>
where
    R: Reducer<A, T>,
{
    type Output = Step<R::Output>;

    fn init(&mut self) -> Result<Step<A>, Error> {
        self.inner.init().map(Step::Continue)
    }

    fn complete(&mut self, result: Step<A>) -> Self::Output {
        result.map(|value| self.inner.complete(value))
    }

    fn step(&mut self, result: Step<A>, input: T) -> Step<Step<A>> {
        match self.inner.step(result.into_inner(), input) {
            reduced @ Step::Reduced(_) => Step::Reduced(reduced),
            continued @ Step::Continue(_) => Step::Continue(continued),
        }
    }
}
