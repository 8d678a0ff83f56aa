//! The reducing-function contract.
//!
//! A Clojure reducing function is one callable with three arities:
//!
//! | arity | meaning | [`Reducer`] method |
//! |-------|---------|--------------------|
//! | 0 | produce a seed value | [`Reducer::init`] |
//! | 1 | complete a finished reduction | [`Reducer::complete`] |
//! | 2 | fold one input into the accumulator | [`Reducer::step`] |
//!
//! Here each arity is a named method, dispatched statically. Only the seed
//! can be missing; a reducer without one reports [`Error::Arity`].
//!
//! Any `FnMut(A, T) -> Step<A>` closure is a reducer without a seed whose
//! completion is the identity. [`completing`] and [`completing_with`] build
//! the same shape explicitly and let a seed and a completion be attached.
//!
//! # Examples
//!
//! ```rust
//! use reduct::reduce::{completing, Reducer, Step};
//!
//! let mut sum = completing(|acc: i32, x: i32| Step::Continue(acc + x)).with_init(|| 0);
//! let seed = sum.init().unwrap();
//! let total = sum.step(seed, 5).into_inner();
//! assert_eq!(sum.complete(total), 5);
//! ```

use std::marker::PhantomData;

use super::reduced::Step;
use crate::Error;

/// A reducing function over accumulator `A` and input `T`.
pub trait Reducer<A, T> {
    /// The value produced by [`Reducer::complete`].
    type Output;

    /// Produces the seed accumulator (the 0-arity call).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] when this reducer has no seed.
    fn init(&mut self) -> Result<A, Error>;

    /// Completes a finished reduction (the 1-arity call).
    ///
    /// Stateful reducers flush whatever output they still owe before
    /// delegating downstream.
    fn complete(&mut self, result: A) -> Self::Output;

    /// Folds `input` into `result` (the 2-arity call).
    fn step(&mut self, result: A, input: T) -> Step<A>;
}

impl<A, T, F> Reducer<A, T> for F
where
    F: FnMut(A, T) -> Step<A>,
{
    type Output = A;

    fn init(&mut self) -> Result<A, Error> {
        Err(Error::arity("reducing function", 0))
    }

    #[inline]
    fn complete(&mut self, result: A) -> A {
        result
    }

    #[inline]
    fn step(&mut self, result: A, input: T) -> Step<A> {
        self(result, input)
    }
}

/// Supplies the seed of a [`Completing`] reducer.
pub trait Seed<A> {
    /// Produces the seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] when no seed is available.
    fn seed(&mut self) -> Result<A, Error>;
}

/// The absent seed: [`Seed::seed`] always fails with an arity error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unseeded;

impl<A> Seed<A> for Unseeded {
    fn seed(&mut self) -> Result<A, Error> {
        Err(Error::arity("completing", 0))
    }
}

impl<A, S> Seed<A> for S
where
    S: FnMut() -> A,
{
    #[inline]
    fn seed(&mut self) -> Result<A, Error> {
        Ok(self())
    }
}

/// A 2-arity step function lifted to the full reducer shape.
///
/// Built by [`completing`] or [`completing_with`].
#[derive(Clone)]
pub struct Completing<F, C, S = Unseeded> {
    step: F,
    completion: C,
    seed: S,
}

/// Adapts a 2-arity step function into a [`Reducer`] whose completion is
/// the identity.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::{completing, reduce_with_init, Step};
///
/// let sum = completing(|acc: i32, x: i32| Step::Continue(acc + x));
/// assert_eq!(reduce_with_init(sum, 0, [1, 2, 3]), 6);
/// ```
pub fn completing<A, T, F>(step: F) -> Completing<F, fn(A) -> A>
where
    F: FnMut(A, T) -> Step<A>,
{
    Completing {
        step,
        completion: crate::compose::identity::<A>,
        seed: Unseeded,
    }
}

/// Adapts a 2-arity step function into a [`Reducer`] whose completion is
/// `completion`.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::{completing_with, Reducer, Step};
///
/// let mut rf = completing_with(|acc: i32, x: i32| Step::Continue(acc + x), |acc: i32| acc.to_string());
/// assert_eq!(rf.complete(42), "42");
/// ```
pub fn completing_with<A, T, O, F, C>(step: F, completion: C) -> Completing<F, C>
where
    F: FnMut(A, T) -> Step<A>,
    C: FnMut(A) -> O,
{
    Completing {
        step,
        completion,
        seed: Unseeded,
    }
}

impl<F, C, S> Completing<F, C, S> {
    /// Attaches a seed, used for the 0-arity call.
    pub fn with_init<A, N>(self, seed: N) -> Completing<F, C, N>
    where
        N: FnMut() -> A,
    {
        Completing {
            step: self.step,
            completion: self.completion,
            seed,
        }
    }
}

impl<A, T, O, F, C, S> Reducer<A, T> for Completing<F, C, S>
where
    F: FnMut(A, T) -> Step<A>,
    C: FnMut(A) -> O,
    S: Seed<A>,
{
    type Output = O;

    fn init(&mut self) -> Result<A, Error> {
        self.seed.seed()
    }

    fn complete(&mut self, result: A) -> O {
        (self.completion)(result)
    }

    #[inline]
    fn step(&mut self, result: A, input: T) -> Step<A> {
        (self.step)(result, input)
    }
}

/// A reducer that appends every input to a `Vec`.
///
/// Seeds with an empty vector; the usual sink for transducer pipelines.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::{reduce_with_init, Conj};
///
/// assert_eq!(reduce_with_init(Conj::new(), Vec::new(), [1, 2]), vec![1, 2]);
/// ```
pub struct Conj<T> {
    element: PhantomData<fn(T)>,
}

impl<T> Conj<T> {
    /// Creates the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: PhantomData,
        }
    }
}

impl<T> Default for Conj<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Conj<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Reducer<Vec<T>, T> for Conj<T> {
    type Output = Vec<T>;

    fn init(&mut self) -> Result<Vec<T>, Error> {
        Ok(Vec::new())
    }

    fn complete(&mut self, result: Vec<T>) -> Vec<T> {
        result
    }

    #[inline]
    fn step(&mut self, mut result: Vec<T>, input: T) -> Step<Vec<T>> {
        result.push(input);
        Step::Continue(result)
    }
}
