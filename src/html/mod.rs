//! A small HTML document model.
//!
//! - [`Node`]: an element (tag, attributes, optional children) or text
//! - [`Attribute`] and [`AttributeKey`]: key/value pairs, optionally typed
//! - [`render`], [`render_all`], [`Renderer`]: turning trees into strings
//! - [`elements`] and [`attributes`]: constructors named after tags and
//!   attributes
//!
//! Trees are plain immutable values. They are built by ordinary function
//! calls and rendered once; rendering never fails.
//!
//! # Examples
//!
//! ```rust
//! use monoview::html::attributes::class;
//! use monoview::html::elements::{article, h1, p, text};
//! use monoview::html::render;
//!
//! let essay = article(vec![class("essay")], vec![
//!     h1(vec![], vec![text("Algebraic data types")]),
//!     p(vec![], vec![text("Sums and products.")]),
//! ]);
//!
//! assert_eq!(
//!     render(&essay),
//!     r#"<article class="essay"><h1>Algebraic data types</h1><p>Sums and products.</p></article>"#
//! );
//! ```

mod attribute;
pub mod attributes;
pub mod elements;
mod error;
mod node;
mod render;

pub use attribute::{
    ALT, Attribute, AttributeKey, CHARSET, CLASS, CONTENT, HEIGHT, HREF, ID, LANG, NAME, REL, SRC,
    TITLE, WIDTH,
};
pub use error::HtmlError;
pub use node::Node;
pub use render::{RenderOptions, Rendered, Renderer, render, render_all};
