//! The `filter` and `remove` transducers.

use super::transducer::Transducer;
use crate::Error;
use crate::reduce::{Reducer, Step};

/// Transducer keeping (or dropping) the inputs that satisfy a predicate.
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    predicate: P,
    keep: bool,
}

/// Returns a transducer forwarding only the inputs for which `predicate`
/// holds. Other inputs leave the accumulator untouched.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::Conj;
/// use reduct::transducer::{filter, transduce};
///
/// let odd = transduce(filter(|x: &i32| x % 2 == 1), Conj::new(), [1, 2, 3, 4]).unwrap();
/// assert_eq!(odd, vec![1, 3]);
/// ```
#[inline]
pub const fn filter<P>(predicate: P) -> Filter<P> {
    Filter {
        predicate,
        keep: true,
    }
}

/// Returns a transducer dropping the inputs for which `predicate` holds:
/// `filter` over the complement of `predicate`.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::Conj;
/// use reduct::transducer::{remove, transduce};
///
/// let odd = transduce(remove(|x: &i32| x % 2 == 0), Conj::new(), [1, 2, 3, 4]).unwrap();
/// assert_eq!(odd, vec![1, 3]);
/// ```
#[inline]
pub const fn remove<P>(predicate: P) -> Filter<P> {
    Filter {
        predicate,
        keep: false,
    }
}

impl<R, P> Transducer<R> for Filter<P> {
    type Reducer = FilterReducer<R, P>;

    fn apply(self, rf: R) -> Self::Reducer {
        FilterReducer {
            rf,
            predicate: self.predicate,
            keep: self.keep,
        }
    }
}

/// Reducer produced by [`filter`] and [`remove`].
#[derive(Debug, Clone)]
pub struct FilterReducer<R, P> {
    rf: R,
    predicate: P,
    keep: bool,
}

impl<A, T, R, P> Reducer<A, T> for FilterReducer<R, P>
where
    R: Reducer<A, T>,
    P: FnMut(&T) -> bool,
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

    #[inline]
    fn step(&mut self, result: A, input: T) -> Step<A> {
        if (self.predicate)(&input) == self.keep {
            self.rf.step(result, input)
        } else {
            Step::Continue(result)
        }
    }
}
