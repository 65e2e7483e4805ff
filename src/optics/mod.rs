//! Optics for reading and updating parts of immutable values.
//!
//! Only lenses are provided. A lens focuses on exactly one part of a
//! structure; `View::focus` uses one to run a view written for the part on
//! the whole.
//!
//! - [`Lens`]: the getter/setter trait
//! - [`FunctionLens`]: a lens from two closures, as built by [`lens!`](crate::lens)
//! - [`ComposedLens`]: two lenses chained with [`Lens::compose`]
//! - `Lenses` (with the `derive` feature): `#[derive(Lenses)]` generating
//!   `{field}_lens()` accessors

mod lens;

pub use lens::{ComposedLens, FunctionLens, Lens};

#[cfg(feature = "derive")]
pub use monoview_derive::Lenses;
