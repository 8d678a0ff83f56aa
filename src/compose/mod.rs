//! Plain function composition.
//!
//! Transducers are composed with [`comp!`](crate::comp); ordinary functions
//! are composed with [`compose!`], which follows the same arity rules:
//!
//! - `compose!()` is [`identity`]
//! - `compose!(f)` is `f` unchanged
//! - `compose!(f, g, h)` is `|x| f(g(h(x)))`
//!
//! # Examples
//!
//! ```
//! use reduct::compose;
//!
//! let plus_one = |x: i32| x + 1;
//! let five_times = compose!(plus_one, plus_one, plus_one, plus_one, plus_one);
//! assert_eq!(five_times(0), 5);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`

mod compose_macro;
mod utils;

pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
