//! The `cat` transducer.

use super::transducer::Transducer;
use crate::Error;
use crate::reduce::{Reducer, Step, fold_in, preserving_reduced};

/// Transducer flattening one level of nesting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat;

/// Returns a transducer whose inputs are collections; each element of every
/// input is forwarded in order.
///
/// A reduced step inside a nested collection stops the enclosing reduction
/// too.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::Conj;
/// use reduct::transducer::{cat, transduce};
///
/// let flat = transduce(cat(), Conj::new(), [vec![1, 2], vec![], vec![3]]).unwrap();
/// assert_eq!(flat, vec![1, 2, 3]);
/// ```
#[inline]
pub const fn cat() -> Cat {
    Cat
}

impl<R> Transducer<R> for Cat {
    type Reducer = CatReducer<R>;

    fn apply(self, rf: R) -> Self::Reducer {
        CatReducer { rf }
    }
}

/// Reducer produced by [`cat`].
#[derive(Debug, Clone)]
pub struct CatReducer<R> {
    rf: R,
}

impl<A, C, R> Reducer<A, C> for CatReducer<R>
where
    C: IntoIterator,
    R: Reducer<A, C::Item>,
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

    fn step(&mut self, result: A, input: C) -> Step<A> {
        fold_in(
            &mut preserving_reduced(&mut self.rf),
            Step::Continue(result),
            input,
        )
    }
}
