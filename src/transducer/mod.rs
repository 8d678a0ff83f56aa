//! Transducers: composable transformations of reducing functions.
//!
//! A transducer wraps a downstream [`Reducer`](crate::reduce::Reducer) into
//! a new one. The standard ones:
//!
//! | transducer | per input |
//! |------------|-----------|
//! | [`map`] | forward `f(input)` |
//! | [`filter`] / [`remove`] | forward when the predicate holds / fails |
//! | [`take`] | forward the first n, then stop the reduction |
//! | [`drop`] | suppress the first n |
//! | [`cat`] | forward every element of a nested collection |
//! | [`interpose`] | forward a separator between inputs |
//!
//! Pipelines are composed with [`comp`] or [`comp!`](crate::comp) and run
//! eagerly with [`transduce`] or lazily with [`sequence`].
//!
//! # Examples
//!
//! ```rust
//! use reduct::comp;
//! use reduct::reduce::Conj;
//! use reduct::transducer::{interpose, map, sequence, take, transduce};
//!
//! let xform = comp!(map(|x: i32| x + 1), take(3), interpose(0));
//!
//! assert_eq!(transduce(xform, Conj::new(), 0..).unwrap(), vec![1, 0, 2, 0, 3]);
//! assert_eq!(sequence(xform, 0..).collect::<Vec<_>>(), vec![1, 0, 2, 0, 3]);
//! ```

mod cat;
mod drop;
mod filter;
mod interpose;
mod map;
mod sequence;
mod take;
mod transduce;
#[allow(clippy::module_inception)]
mod transducer;

pub use cat::{Cat, CatReducer, cat};
pub use drop::{DropReducer, Dropping, drop};
pub use filter::{Filter, FilterReducer, filter, remove};
pub use interpose::{Interpose, InterposeReducer, interpose};
pub use map::{Map, MapReducer, map};
pub use sequence::{Buffer, Sequence, sequence, sequence_of};
pub use take::{Take, TakeReducer, take};
pub use transduce::{transduce, transduce_with_init};
pub use transducer::{Comp, Identity, Transducer, comp, identity};

pub use crate::comp;
