//! # reduct
//!
//! Clojure-style reduction and lazy sequences for Rust.
//!
//! ## Overview
//!
//! - **Reduction**: the reduced protocol for early termination, the
//!   reducing-function contract and a strict left fold
//! - **Transducers**: composable transformations of reducing functions
//!   (`map`, `filter`, `take`, `cat`, ...) run eagerly with `transduce` or
//!   lazily with `sequence`
//! - **Seqs**: immutable sequences with memoized lazy links, realized
//!   without growing the call stack
//! - **Function composition**: the `compose!` macro
//!
//! ## Feature Flags
//!
//! - `transducer`: transducers and the `transduce`/`sequence` drivers
//! - `seq`: persistent and lazy seqs
//! - `serde`: `Serialize`/`Deserialize` for seqs
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use reduct::prelude::*;
//!
//! let xform = comp!(filter(|x: &u32| x % 2 == 1), map(|x: u32| x * x), take(3));
//! assert_eq!(transduce(xform, Conj::new(), 1..).unwrap(), vec![1, 9, 25]);
//!
//! fn squares(from: u32) -> Seq<u32> {
//!     lazy_seq(move || cons(from * from, squares(from + 1)))
//! }
//! assert_eq!(squares(3).first().unwrap(), Some(9));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the commonly used types, traits and functions. The accessors
/// of [`seq`](crate::seq) and the `drop` transducer are left out, since
/// their names collide with everyday functions.
///
/// # Usage
///
/// ```rust
/// use reduct::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Error;
    pub use crate::compose;
    pub use crate::reduce::{
        Conj, Reducer, Step, completing, completing_with, ensure_reduced, is_reduced, reduce,
        reduce_with_init, reduced, unreduced,
    };

    #[cfg(feature = "transducer")]
    pub use crate::comp;
    #[cfg(feature = "transducer")]
    pub use crate::transducer::{
        Transducer, cat, filter, interpose, map, remove, sequence, take, transduce,
        transduce_with_init,
    };

    #[cfg(feature = "seq")]
    pub use crate::seq::{LazySeq, Seq, cons, lazy_seq, try_lazy_seq};
}

pub mod error;
pub use error::Error;

pub mod compose;

pub mod reduce;

#[cfg(feature = "transducer")]
pub mod transducer;

#[cfg(feature = "seq")]
pub mod seq;
