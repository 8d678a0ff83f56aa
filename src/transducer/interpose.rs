//! The `interpose` transducer.

use super::transducer::Transducer;
use crate::Error;
use crate::reduce::{Reducer, Step};

/// Transducer placing a separator between consecutive inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpose<T> {
    separator: T,
}

/// Returns a transducer forwarding `separator` before every input but the
/// first.
///
/// When the separator step is reduced, the input that followed it is not
/// forwarded.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::Conj;
/// use reduct::transducer::{interpose, transduce};
///
/// let spaced = transduce(interpose(0), Conj::new(), [1, 2, 3]).unwrap();
/// assert_eq!(spaced, vec![1, 0, 2, 0, 3]);
/// ```
#[inline]
pub const fn interpose<T>(separator: T) -> Interpose<T> {
    Interpose { separator }
}

impl<R, T> Transducer<R> for Interpose<T> {
    type Reducer = InterposeReducer<R, T>;

    fn apply(self, rf: R) -> Self::Reducer {
        InterposeReducer {
            rf,
            separator: self.separator,
            started: false,
        }
    }
}

/// Reducer produced by [`interpose`].
#[derive(Debug, Clone)]
pub struct InterposeReducer<R, T> {
    rf: R,
    separator: T,
    started: bool,
}

impl<A, T, R> Reducer<A, T> for InterposeReducer<R, T>
where
    T: Clone,
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
        if !self.started {
            self.started = true;
            return self.rf.step(result, input);
        }
        match self.rf.step(result, self.separator.clone()) {
            Step::Continue(separated) => self.rf.step(separated, input),
            stopped @ Step::Reduced(_) => stopped,
        }
    }
}
