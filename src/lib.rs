//! # monoview
//!
//! Pure, monoid-composed views over a small HTML document model.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Semigroup`](typeclass::Semigroup) and
//!   [`Monoid`](typeclass::Monoid), with instances for strings, vectors,
//!   options, tuples and numeric wrappers
//! - **HTML**: a [`Node`](html::Node) tree of elements and text, typed
//!   attribute keys, and a renderer
//! - **Views**: [`View<D, N>`](view::View), a function from data to a monoid,
//!   with `map`, `contramap` and monoid combination
//! - **Optics**: lenses for focusing a view on part of its input
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup, Monoid and the numeric wrappers
//! - `html`: the node model and renderer
//! - `view`: views (enables `typeclass`)
//! - `optics`: lenses and the `lens!` macro
//! - `derive`: `#[derive(Lenses)]` (enables `optics`)
//! - `serde`: serialization of nodes and attributes
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use monoview::prelude::*;
//! use monoview::html::elements::{li, text};
//!
//! let tag = HtmlView::node(|tag: &String| li(vec![], vec![text(tag.as_str())]));
//! let tags = tag.list().wrap("ul", vec![]);
//!
//! let rendered = tags.render(&vec!["monoid".to_string(), "lens".to_string()]);
//! assert_eq!(rendered, "<ul><li>monoid</li><li>lens</li></ul>");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use monoview::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "html")]
    pub use crate::html::{
        Attribute, AttributeKey, HtmlError, Node, RenderOptions, Renderer, render, render_all,
    };

    #[cfg(feature = "view")]
    pub use crate::view::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "view")]
pub mod view;

#[cfg(feature = "optics")]
pub mod optics;
