//! The `take` transducer.

use super::transducer::Transducer;
use crate::Error;
use crate::reduce::{Reducer, Step, ensure_reduced};

/// Transducer forwarding at most `count` inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take {
    count: isize,
}

/// Returns a transducer forwarding the first `count` inputs, then stopping
/// the reduction.
///
/// The reduction is stopped as soon as the last wanted input went through,
/// so no further input is pulled. A `count` of zero or less forwards nothing
/// and stops on the first input.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::Conj;
/// use reduct::transducer::{take, transduce};
///
/// assert_eq!(transduce(take(2), Conj::new(), 1..).unwrap(), vec![1, 2]);
/// assert_eq!(transduce(take(-1), Conj::new(), 1..).unwrap(), Vec::<i32>::new());
/// ```
#[inline]
pub const fn take(count: isize) -> Take {
    Take { count }
}

impl<R> Transducer<R> for Take {
    type Reducer = TakeReducer<R>;

    fn apply(self, rf: R) -> Self::Reducer {
        TakeReducer {
            rf,
            remaining: self.count,
        }
    }
}

/// Reducer produced by [`take`].
#[derive(Debug, Clone)]
pub struct TakeReducer<R> {
    rf: R,
    remaining: isize,
}

impl<A, T, R> Reducer<A, T> for TakeReducer<R>
where
    R: Reducer<A, T>,
{
    type Output = R::Output;

    #[inline]
    fn init(&mut self) -> Result<A, Error> {
        self.rf.init()
    }

    #[inline]
    fn complete(&mut self, result: A) -> Self::Output {
        self.rf.complete(result)
    }

    fn step(&mut self, result: A, input: T) -> Step<A> {
        let current = self.remaining;
        self.remaining = current.saturating_sub(1);
        let step = if current > 0 {
            self.rf.step(result, input)
        } else {
            Step::Continue(result)
        };
        if self.remaining <= 0 {
            ensure_reduced(step)
        } else {
            step
        }
    }
}
