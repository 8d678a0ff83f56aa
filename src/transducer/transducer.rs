//! The transducer contract and transducer composition.
//!
//! A transducer turns a downstream reducer into a new reducer. It knows
//! nothing about where its input comes from, so the same pipeline runs
//! under [`transduce`](super::transduce) (eager) and
//! [`sequence`](super::sequence) (lazy pull).
//!
//! Composition reads like function composition: `comp!(t1, t2, t3)`
//! applied to `rf` is `t1(t2(t3(rf)))`. Input is transformed first by
//! `t1`, then `t2`, then `t3`, before reaching `rf`.

/// A transformation of reducers.
///
/// `apply` consumes the transducer; stateful transducers such as
/// [`take`](super::take) create fresh state per application, so clone the
/// transducer to apply it more than once.
///
/// Closures `FnOnce(R) -> X` are transducers.
pub trait Transducer<R> {
    /// The reducer produced for downstream `R`.
    type Reducer;

    /// Wraps `rf`.
    fn apply(self, rf: R) -> Self::Reducer;
}

impl<R, X, F> Transducer<R> for F
where
    F: FnOnce(R) -> X,
{
    type Reducer = X;

    #[inline]
    fn apply(self, rf: R) -> X {
        self(rf)
    }
}

/// The passthrough transducer: applying it returns the reducer unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Returns the passthrough transducer.
#[inline]
pub const fn identity() -> Identity {
    Identity
}

impl<R> Transducer<R> for Identity {
    type Reducer = R;

    #[inline]
    fn apply(self, rf: R) -> R {
        rf
    }
}

/// Two transducers composed: `outer` wraps what `inner` produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comp<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

/// Composes two transducers; `outer` sees the input before `inner`.
///
/// # Examples
///
/// ```rust
/// use reduct::reduce::Conj;
/// use reduct::transducer::{comp, map, take, transduce};
///
/// let xform = comp(take(2), map(|x: i32| x * 10));
/// assert_eq!(transduce(xform, Conj::new(), [1, 2, 3]).unwrap(), vec![10, 20]);
/// ```
#[inline]
pub const fn comp<Outer, Inner>(outer: Outer, inner: Inner) -> Comp<Outer, Inner> {
    Comp { outer, inner }
}

impl<R, Outer, Inner> Transducer<R> for Comp<Outer, Inner>
where
    Inner: Transducer<R>,
    Outer: Transducer<Inner::Reducer>,
{
    type Reducer = Outer::Reducer;

    #[inline]
    fn apply(self, rf: R) -> Self::Reducer {
        self.outer.apply(self.inner.apply(rf))
    }
}

/// Composes any number of transducers.
///
/// - `comp!()` is the [`Identity`] transducer
/// - `comp!(t)` is `t` unchanged
/// - `comp!(t1, t2, ..., tn)` is `comp(t1, comp!(t2, ..., tn))`
///
/// # Examples
///
/// ```rust
/// use reduct::comp;
/// use reduct::reduce::Conj;
/// use reduct::transducer::{cat, drop, filter, map, transduce};
///
/// let xform = comp!(
///     map(|word: &str| word.chars().collect::<Vec<_>>()),
///     cat(),
///     filter(|c: &char| c.is_alphabetic()),
///     drop(1),
/// );
/// let letters = transduce(xform, Conj::new(), ["a-b", "c"]).unwrap();
/// assert_eq!(letters, vec!['b', 'c']);
/// ```
#[macro_export]
macro_rules! comp {
    () => {
        $crate::transducer::identity()
    };

    ($transducer:expr $(,)?) => {
        $transducer
    };

    ($outer:expr, $($remaining:expr),+ $(,)?) => {
        $crate::transducer::comp($outer, $crate::comp!($($remaining),+))
    };
}
