//! The eager driver: reduce a whole collection through a transducer.

use super::transducer::Transducer;
use crate::Error;
use crate::reduce::{Reducer, fold_in};

/// Reduces `coll` through `xform` applied to `rf`, seeded by the reducer's
/// own 0-arity call.
///
/// The completion of the transformed reducer runs exactly once, also when
/// the reduction stopped early.
///
/// # Errors
///
/// Returns [`Error::Arity`] when `rf` has no seed.
///
/// # Examples
///
/// ```rust
/// use reduct::comp;
/// use reduct::reduce::Conj;
/// use reduct::transducer::{filter, map, transduce};
///
/// let xform = comp!(filter(|x: &i32| x % 2 == 0), map(|x: i32| x * x));
/// assert_eq!(transduce(xform, Conj::new(), 1..=6).unwrap(), vec![4, 16, 36]);
/// ```
pub fn transduce<A, T, X, R, I>(
    xform: X,
    rf: R,
    coll: I,
) -> Result<<X::Reducer as Reducer<A, T>>::Output, Error>
where
    X: Transducer<R>,
    X::Reducer: Reducer<A, T>,
    I: IntoIterator<Item = T>,
{
    let mut xf = xform.apply(rf);
    let init = xf.init()?;
    let result = fold_in(&mut xf, init, coll);
    Ok(xf.complete(result))
}

/// Reduces `coll` through `xform` applied to `rf`, starting from `init`.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::{completing, Step};
/// use reduct::transducer::{take, transduce_with_init};
///
/// let sum = completing(|acc: i32, x: i32| Step::Continue(acc + x));
/// assert_eq!(transduce_with_init(take(3), sum, 0, 1..), 6);
/// ```
pub fn transduce_with_init<A, T, X, R, I>(
    xform: X,
    rf: R,
    init: A,
    coll: I,
) -> <X::Reducer as Reducer<A, T>>::Output
where
    X: Transducer<R>,
    X::Reducer: Reducer<A, T>,
    I: IntoIterator<Item = T>,
{
    let mut xf = xform.apply(rf);
    let result = fold_in(&mut xf, init, coll);
    xf.complete(result)
}
