//! Persistent, lazily realized sequences.
//!
//! - [`Seq`], [`cons`]: immutable sequences sharing their tails
//! - [`lazy_seq`], [`try_lazy_seq`], [`LazySeq`]: links computed once, on
//!   first access, with their outcome (value or error) cached
//! - [`first`], [`rest`], [`next`], [`seq`], [`is_realized`]: accessors
//! - [`iterate`], [`concat`], [`nthrest`], [`lazy_from_iter`],
//!   [`interleave`]: building blocks for lazy definitions
//!
//! Seqs are reference counted with `Rc` and are therefore confined to one
//! thread.
//!
//! # Examples
//!
//! ```rust
//! use reduct::seq::{cons, lazy_seq, Seq};
//!
//! fn naturals(from: u64) -> Seq<u64> {
//!     lazy_seq(move || cons(from, naturals(from + 1)))
//! }
//!
//! let first_three: Vec<u64> = naturals(0)
//!     .iter()
//!     .take(3)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(first_three, vec![0, 1, 2]);
//! ```

mod combinators;
mod iter;
mod lazy;
#[allow(clippy::module_inception)]
mod seq;

pub use combinators::{Interleave, concat, interleave, iterate, lazy_from_iter, nthrest};
pub use iter::SeqIter;
pub use lazy::LazySeq;
pub use seq::{Cons, Seq, cons, first, is_realized, lazy_seq, next, rest, seq, try_lazy_seq};

static_assertions::assert_impl_all!(Seq<i32>: Clone, Default);
static_assertions::assert_impl_all!(LazySeq<String>: Clone);
static_assertions::assert_not_impl_any!(Seq<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(LazySeq<i32>: Send, Sync);
