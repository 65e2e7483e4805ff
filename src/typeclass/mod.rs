//! Algebraic type classes used to compose views.
//!
//! - [`Semigroup`]: an associative `combine`
//! - [`Monoid`]: a semigroup with an identity element, `empty`
//! - [`Sum`], [`Product`], [`Max`], [`Min`]: wrappers choosing a numeric monoid
//! - [`Bounded`]: least and greatest values, giving `Max` and `Min` identities
//!
//! Every `View<D, N>` requires its output `N` to be a monoid; that is the
//! whole of what makes views composable.
//!
//! # Examples
//!
//! ```rust
//! use monoview::typeclass::{Monoid, Semigroup};
//!
//! let sections: Vec<Vec<&str>> = vec![vec!["intro"], vec![], vec!["body", "outro"]];
//! assert_eq!(Vec::combine_all(sections), vec!["intro", "body", "outro"]);
//! assert_eq!(String::from("a").combine(String::empty()), "a");
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
