//! Error type shared by reductions and lazy sequences.
//!
//! Every fallible operation in this crate returns [`Error`]. The type is
//! cheap to clone so that a lazy sequence can cache the error raised by its
//! producer and replay the very same error on every later access.
//!
//! # Examples
//!
//! ```rust
//! use reduct::Error;
//!
//! let error = Error::arity("completing", 0);
//! assert_eq!(
//!     error.to_string(),
//!     "completing does not support a call with 0 arguments"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::rc::Rc;

/// Errors raised by reductions and lazy sequences.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A reducing function was asked for a call shape it does not support.
    ///
    /// The only shape that can be missing is the 0-argument seed call,
    /// which `reduce` and `transduce` issue when no initial value is given.
    #[error("{operation} does not support a call with {arity} arguments")]
    Arity {
        /// The operation that was invoked.
        operation: &'static str,
        /// The number of arguments of the unsupported call.
        arity: usize,
    },

    /// The producer of a lazy sequence failed.
    ///
    /// The wrapped error is reference counted; replaying a cached failure
    /// hands out the same allocation every time.
    #[error("{0}")]
    Producer(Rc<dyn StdError + 'static>),

    /// A lazy sequence was forced while its own producer was running, or
    /// after its producer panicked half-way through.
    #[error("lazy sequence was forced during its own realization")]
    Reentrant,
}

impl Error {
    /// Creates an [`Error::Arity`] for `operation` called with `arity` arguments.
    #[must_use]
    pub const fn arity(operation: &'static str, arity: usize) -> Self {
        Self::Arity { operation, arity }
    }

    /// Wraps a user error raised while producing a lazy sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reduct::Error;
    ///
    /// let error = Error::producer(std::fmt::Error);
    /// assert!(error.downcast_ref::<std::fmt::Error>().is_some());
    /// ```
    pub fn producer<E>(error: E) -> Self
    where
        E: StdError + 'static,
    {
        Self::Producer(Rc::new(error))
    }

    /// Returns the producer error as `E`, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Self::Producer(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Returns `true` when both errors are the same producer failure
    /// (the same allocation), or the same non-producer variant.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Producer(left), Self::Producer(right)) => Rc::ptr_eq(left, right),
            (
                Self::Arity {
                    operation: left_operation,
                    arity: left_arity,
                },
                Self::Arity {
                    operation: right_operation,
                    arity: right_arity,
                },
            ) => left_operation == right_operation && left_arity == right_arity,
            (Self::Reentrant, Self::Reentrant) => true,
            _ => false,
        }
    }
}

/// A plain message usable as a producer error.
///
/// Handy for producers that only have a description to report.
///
/// # Examples
///
/// ```rust
/// use reduct::{Error, error::Message};
///
/// let error = Error::producer(Message::new("upstream closed"));
/// assert_eq!(error.to_string(), "upstream closed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    /// Creates a message error.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl StdError for Message {}

impl From<Message> for Error {
    fn from(message: Message) -> Self {
        Self::producer(message)
    }
}
