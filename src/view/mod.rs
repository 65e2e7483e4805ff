//! Views: pure functions from data to a monoid, composed algebraically.
//!
//! A [`View<D, N>`] wraps a function `&D -> N`. Three operations make views
//! reusable:
//!
//! - [`View::map`] changes what a view produces
//! - [`View::contramap`] changes what a view consumes, in the opposite
//!   direction: a function from the new input to the old input
//! - [`Semigroup::combine`] feeds one input to two views and combines their
//!   outputs, and [`Monoid::empty`] is the view that contributes nothing
//!
//! [`Semigroup::combine`]: crate::typeclass::Semigroup::combine
//! [`Monoid::empty`]: crate::typeclass::Monoid::empty
//!
//! The combination laws (associativity, left and right identity) hold
//! whenever they hold for `N`.
//!
//! # Examples
//!
//! ```rust
//! use monoview::html::elements::{h1, p, text};
//! use monoview::typeclass::Semigroup;
//! use monoview::view::HtmlView;
//!
//! struct Essay {
//!     title: String,
//!     summary: String,
//! }
//!
//! let title = HtmlView::node(|title: &String| h1(vec![], vec![text(title.as_str())]))
//!     .contramap(|essay: &Essay| essay.title.clone());
//! let summary = HtmlView::node(|summary: &String| p(vec![], vec![text(summary.as_str())]))
//!     .contramap(|essay: &Essay| essay.summary.clone());
//!
//! let card = title.combine(summary);
//! let essay = Essay {
//!     title: String::from("Semigroups"),
//!     summary: String::from("Combining things."),
//! };
//! assert_eq!(card.render(&essay), "<h1>Semigroups</h1><p>Combining things.</p>");
//! ```

mod function_view;
#[cfg(feature = "html")]
mod html_view;

pub use function_view::View;
#[cfg(feature = "html")]
pub use html_view::HtmlView;
