//! The `map` transducer.

use super::transducer::Transducer;
use crate::Error;
use crate::reduce::{Reducer, Step};

/// Transducer applying a function to every input.
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    function: F,
}

/// Returns a transducer that forwards `function(input)` for every input.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::completing;
/// use reduct::reduce::Step;
/// use reduct::transducer::{map, transduce_with_init};
///
/// let sum = completing(|acc: i32, x: i32| Step::Continue(acc + x));
/// assert_eq!(transduce_with_init(map(|x: i32| x + 10), sum, 0, [5, 2]), 27);
/// ```
#[inline]
pub const fn map<F>(function: F) -> Map<F> {
    Map { function }
}

impl<R, F> Transducer<R> for Map<F> {
    type Reducer = MapReducer<R, F>;

    fn apply(self, rf: R) -> Self::Reducer {
        MapReducer {
            rf,
            function: self.function,
        }
    }
}

/// Reducer produced by [`map`].
#[derive(Debug, Clone)]
pub struct MapReducer<R, F> {
    rf: R,
    function: F,
}

impl<A, T, U, R, F> Reducer<A, T> for MapReducer<R, F>
where
    R: Reducer<A, U>,
    F: FnMut(T) -> U,
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
        self.rf.step(result, (self.function)(input))
    }
}
