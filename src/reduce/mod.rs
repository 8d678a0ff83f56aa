//! Reduction: the reduced protocol, the reducing-function contract and the
//! reduce algorithm.
//!
//! - [`Step`], [`reduced`], [`ensure_reduced`], [`unreduced`]: early termination
//! - [`Reducer`], [`completing`], [`completing_with`]: the 0/1/2-arity contract
//! - [`reduce`], [`reduce_with_init`]: the strict left fold
//!
//! # Examples
//!
//! ```rust
//! use reduct::reduce::{reduce_with_init, reduced, Step};
//!
//! // Sum until the total passes 5, then stop pulling from the source.
//! let total = reduce_with_init(
//!     |acc: u32, x: u32| if acc + x > 5 { reduced(acc + x) } else { Step::Continue(acc + x) },
//!     0,
//!     1..,
//! );
//! assert_eq!(total, 6);
//! ```

mod fold;
mod reduced;
mod reducer;

#[cfg_attr(not(feature = "transducer"), allow(unused_imports))]
pub(crate) use fold::fold_in;
pub use fold::{reduce, reduce_with_init, try_reduce_with_init};
pub use reduced::{
    PreservingReduced, Step, ensure_reduced, is_reduced, preserving_reduced, reduced, unreduced,
};
pub use reducer::{Completing, Conj, Reducer, Seed, Unseeded, completing, completing_with};
