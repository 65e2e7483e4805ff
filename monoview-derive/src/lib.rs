//! Derive macros for monoview.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates a lens accessor for every named struct field
//!
//! Lenses are how a view written against one part of a model is reused on
//! the whole model: `View::focus` takes any lens, and the derived accessors
//! save writing the getter and setter closures by hand.
//!
//! ```rust,ignore
//! use monoview::optics::{Lens, Lenses};
//!
//! #[derive(Clone, Lenses)]
//! struct Essay {
//!     title: String,
//!     draft: bool,
//! }
//!
//! // Generated methods:
//! // - Essay::title_lens() -> impl Lens<Essay, String>
//! // - Essay::draft_lens() -> impl Lens<Essay, bool>
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derives one `{field}_lens()` associated function per named field.
///
/// Each generated function returns `impl monoview::optics::Lens<Self, T> + Clone`
/// where `T` is the field type. Tuple structs, unit structs, enums and unions
/// are rejected with a compile error.
///
/// # Example
///
/// ```rust,ignore
/// use monoview::optics::{Lens, Lenses};
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Author {
///     name: String,
///     handle: String,
/// }
///
/// let author = Author { name: "Ada".to_string(), handle: "ada".to_string() };
/// let renamed = Author::name_lens().set(author, "Grace".to_string());
/// assert_eq!(renamed.name, "Grace");
/// ```
///
/// Generic structs work too; call the function on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Tagged<T> {
///     tag: String,
///     value: T,
/// }
///
/// let lens = Tagged::<u32>::value_lens();
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
