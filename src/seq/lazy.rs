//! The lazy seq engine.
//!
//! A [`LazySeq`] holds a producer that is called at most once. Its outcome,
//! a realized seq or an error, is cached and replayed on every later access.
//!
//! Producers often answer with another lazy seq (`lazy_seq(|| lazy_seq(..))`,
//! or a recursive definition skipping empty input). Forcing follows such
//! chains in a loop and writes the final outcome into every link it went
//! through, so neither forcing nor later accesses grow the call stack with
//! the length of the chain.
//!
//! Dropping is flat as well. A producer that was never called usually owns
//! the next link of its chain, so the drop of an unforced producer is
//! postponed while another one is being dropped, and the outermost drop
//! works through the postponed ones in a loop.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::seq::Seq;
use crate::Error;

type Producer<T> = Box<dyn FnOnce() -> Result<Seq<T>, Error>>;

type Link<T> = Rc<RefCell<LazyState<T>>>;

enum LazyState<T> {
    /// Not forced yet.
    Pending(Producer<T>),
    /// The producer was taken and has not returned (yet).
    Realizing,
    /// Always `Seq::Empty` or `Seq::Cons`.
    Realized(Seq<T>),
    Failed(Error),
}

thread_local! {
    /// Producers waiting to be dropped. `Some` while a drop is in progress
    /// on this thread.
    static POSTPONED: RefCell<Option<Vec<Box<dyn Any>>>> = const { RefCell::new(None) };
}

/// Owns a producer until it is called, and drops it without nesting the
/// drops of the producers it captures.
struct Unwound<F: 'static> {
    producer: Option<F>,
}

impl<F: 'static> Unwound<F> {
    const fn new(producer: F) -> Self {
        Self {
            producer: Some(producer),
        }
    }

    fn into_inner(mut self) -> Option<F> {
        self.producer.take()
    }
}

impl<F: 'static> Drop for Unwound<F> {
    fn drop(&mut self) {
        let Some(producer) = self.producer.take() else {
            return;
        };
        let owned = POSTPONED.try_with(move |postponed| {
            let mut postponed = postponed.borrow_mut();
            match postponed.as_mut() {
                Some(queue) => {
                    queue.push(Box::new(producer));
                    None
                }
                None => {
                    *postponed = Some(Vec::new());
                    Some(producer)
                }
            }
        });
        if let Ok(Some(producer)) = owned {
            let _draining = Draining;
            drop(producer);
            while let Some(next) = POSTPONED
                .try_with(|postponed| postponed.borrow_mut().as_mut().and_then(Vec::pop))
                .ok()
                .flatten()
            {
                drop(next);
            }
        }
    }
}

/// Ends the drop in progress, also when a captured value panics on drop.
struct Draining;

impl Drop for Draining {
    fn drop(&mut self) {
        let leftover = POSTPONED.try_with(|postponed| postponed.borrow_mut().take());
        drop(leftover);
    }
}

impl<T> LazyState<T> {
    fn outcome(&self) -> Result<Seq<T>, Error> {
        match self {
            Self::Realized(seq) => Ok(seq.clone()),
            Self::Failed(error) => Err(error.clone()),
            Self::Pending(_) | Self::Realizing => Err(Error::Reentrant),
        }
    }
}

/// A seq whose content is computed on first access.
///
/// Clones share the same state: forcing one forces all of them.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use reduct::seq::{LazySeq, Seq};
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let lazy = LazySeq::new(move || {
///     counter.set(counter.get() + 1);
///     Ok::<_, reduct::Error>(Seq::from_iter([1, 2]))
/// });
///
/// assert!(!lazy.is_realized());
/// lazy.force().unwrap();
/// lazy.force().unwrap();
/// assert!(lazy.is_realized());
/// assert_eq!(calls.get(), 1);
/// ```
pub struct LazySeq<T> {
    state: Link<T>,
}

impl<T: 'static> LazySeq<T> {
    /// Creates a lazy seq from a fallible producer.
    ///
    /// The producer runs on the first access; an `Err` it returns is cached
    /// like a value.
    pub fn new<F, E>(producer: F) -> Self
    where
        F: FnOnce() -> Result<Seq<T>, E> + 'static,
        E: Into<Error> + 'static,
    {
        let producer = Unwound::new(producer);
        Self {
            state: Rc::new(RefCell::new(LazyState::Pending(Box::new(move || {
                match producer.into_inner() {
                    Some(producer) => producer().map_err(Into::into),
                    None => Err(Error::Reentrant),
                }
            })))),
        }
    }
}

impl<T> LazySeq<T> {
    /// Realizes this seq and returns its content: `Seq::Empty` or a
    /// `Seq::Cons`, never another lazy seq.
    ///
    /// # Errors
    ///
    /// Returns the error of the producer (the same one on every call), or
    /// [`Error::Reentrant`] when called from within its own producer.
    pub fn force(&self) -> Result<Seq<T>, Error> {
        let mut visited: SmallVec<[Link<T>; 4]> = SmallVec::new();
        let mut current = Rc::clone(&self.state);
        let outcome = loop {
            let producer = {
                let mut state = current.borrow_mut();
                match mem::replace(&mut *state, LazyState::Realizing) {
                    LazyState::Pending(producer) => producer,
                    settled => {
                        let outcome = settled.outcome();
                        *state = settled;
                        break outcome;
                    }
                }
            };
            visited.push(current);
            match producer() {
                Ok(Seq::Lazy(next)) => current = next.state,
                Ok(seq) => break Ok(seq),
                Err(error) => {
                    debug!(%error, "lazy seq producer failed");
                    break Err(error);
                }
            }
        };

        if visited.len() > 1 {
            trace!(links = visited.len(), "collapsed lazy seq chain");
        }
        for link in visited {
            *link.borrow_mut() = match &outcome {
                Ok(seq) => LazyState::Realized(seq.clone()),
                Err(error) => LazyState::Failed(error.clone()),
            };
        }
        outcome
    }

    /// Returns `true` once the producer has run successfully.
    ///
    /// A seq whose producer failed is not realized.
    pub fn is_realized(&self) -> bool {
        matches!(*self.state.borrow(), LazyState::Realized(_))
    }

    /// Returns `true` when both values share the same state.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// The cached outcome, without forcing.
    pub(crate) fn settled(&self) -> Option<Result<Seq<T>, Error>> {
        match &*self.state.borrow() {
            LazyState::Pending(_) | LazyState::Realizing => None,
            settled => Some(settled.outcome()),
        }
    }

    /// The realized content, when this is the last handle to the state.
    pub(crate) fn into_realized(self) -> Option<Seq<T>> {
        match Rc::try_unwrap(self.state).ok()?.into_inner() {
            LazyState::Realized(seq) => Some(seq),
            _ => None,
        }
    }
}

impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySeq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.settled() {
            None => formatter.write_str("LazySeq(..)"),
            Some(Ok(seq)) => formatter.debug_tuple("LazySeq").field(&seq).finish(),
            Some(Err(error)) => formatter.debug_tuple("LazySeq").field(&error).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Message;
    use crate::seq::{cons, lazy_seq};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_force_runs_producer_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let lazy = LazySeq::new(move || {
            counter.set(counter.get() + 1);
            Ok::<_, Error>(cons(1, Seq::Empty))
        });
        assert!(lazy.force().is_ok());
        assert!(lazy.force().is_ok());
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_force_caches_the_error() {
        let lazy: LazySeq<i32> = LazySeq::new(|| Err(Message::new("boom")));
        let first = lazy.force().unwrap_err();
        let second = lazy.force().unwrap_err();
        assert!(first.ptr_eq(&second));
        assert_eq!(second.to_string(), "boom");
        assert!(!lazy.is_realized());
    }

    #[rstest]
    fn test_force_collapses_chains_into_every_link() {
        let inner = match lazy_seq(|| cons(7, Seq::Empty)) {
            Seq::Lazy(lazy) => lazy,
            _ => unreachable!(),
        };
        let middle = {
            let inner = inner.clone();
            LazySeq::new(move || Ok::<_, Error>(Seq::Lazy(inner)))
        };
        let outer = {
            let middle = middle.clone();
            LazySeq::new(move || Ok::<_, Error>(Seq::Lazy(middle)))
        };

        let content = outer.force().unwrap();
        assert!(matches!(content, Seq::Cons(_)));
        assert!(middle.is_realized());
        assert!(inner.is_realized());
    }

    #[rstest]
    fn test_forcing_inside_own_producer_is_reentrant() {
        let slot: Rc<RefCell<Option<LazySeq<i32>>>> = Rc::new(RefCell::new(None));
        let seen = Rc::clone(&slot);
        let lazy = LazySeq::new(move || {
            let this = seen.borrow().clone();
            match this {
                Some(this) => this.force(),
                None => Ok(Seq::Empty),
            }
        });
        *slot.borrow_mut() = Some(lazy.clone());

        assert!(matches!(lazy.force(), Err(Error::Reentrant)));
        slot.borrow_mut().take();
    }

    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[rstest]
    fn test_unforced_chain_drops_every_producer_once() {
        let dropped = Rc::new(Cell::new(0));
        let mut coll: Seq<i32> = Seq::Empty;
        for _ in 0..1000 {
            let inner = coll;
            let tracked = Tracked(Rc::clone(&dropped));
            coll = lazy_seq(move || {
                let _tracked = tracked;
                inner
            });
        }
        assert_eq!(dropped.get(), 0);
        drop(coll);
        assert_eq!(dropped.get(), 1000);
        assert!(POSTPONED.with(|postponed| postponed.borrow().is_none()));
    }

    #[rstest]
    fn test_forced_producer_is_dropped_once() {
        let dropped = Rc::new(Cell::new(0));
        let tracked = Tracked(Rc::clone(&dropped));
        let lazy = LazySeq::new(move || {
            let _tracked = tracked;
            Ok::<_, Error>(cons(1, Seq::Empty))
        });
        assert!(lazy.force().is_ok());
        assert_eq!(dropped.get(), 1);
        drop(lazy);
        assert_eq!(dropped.get(), 1);
    }

    #[rstest]
    fn test_debug_does_not_force() {
        let lazy: LazySeq<i32> = LazySeq::new(|| Ok::<_, Error>(Seq::Empty));
        assert_eq!(format!("{lazy:?}"), "LazySeq(..)");
        assert!(!lazy.is_realized());
    }
}
