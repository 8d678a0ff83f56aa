//! The `drop` transducer.

use super::transducer::Transducer;
use crate::Error;
use crate::reduce::{Reducer, Step};

/// Transducer suppressing the first `count` inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropping {
    count: isize,
}

/// Returns a transducer that suppresses the first `count` inputs and forwards
/// the rest. A `count` of zero or less forwards everything.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::Conj;
/// use reduct::transducer::{drop, transduce};
///
/// assert_eq!(transduce(drop(2), Conj::new(), [1, 2, 3]).unwrap(), vec![3]);
/// ```
#[inline]
pub const fn drop(count: isize) -> Dropping {
    Dropping { count }
}

impl<R> Transducer<R> for Dropping {
    type Reducer = DropReducer<R>;

    fn apply(self, rf: R) -> Self::Reducer {
        DropReducer {
            rf,
            remaining: self.count,
        }
    }
}

/// Reducer produced by [`drop`].
#[derive(Debug, Clone)]
pub struct DropReducer<R> {
    rf: R,
    remaining: isize,
}

impl<A, T, R> Reducer<A, T> for DropReducer<R>
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
        if self.remaining > 0 {
            self.remaining -= 1;
            Step::Continue(result)
        } else {
            self.rf.step(result, input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_drop_one_suppresses_first_input() {
        let mut seen = Vec::new();
        let mut rf = drop(1).apply(|acc: &'static str, x: i32| {
            seen.push((acc, x));
            Step::Continue("res")
        });
        assert_eq!(rf.step("in", 1), Step::Continue("in"));
        assert_eq!(rf.step("in", 2), Step::Continue("res"));
        std::mem::drop(rf);
        assert_eq!(seen, vec![("in", 2)]);
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn test_drop_non_positive_forwards_everything(#[case] count: isize) {
        let mut rf = drop(count).apply(|acc: i32, x: i32| Step::Continue(acc + x));
        assert_eq!(rf.step(0, 4), Step::Continue(4));
    }
}
