//! One constructor per tag.
//!
//! Container tags take `(attributes, children)` and always carry a child
//! list, even when it is empty. Void tags take only attributes and carry
//! none, so they render in self-closing form.
//!
//! ```rust
//! use monoview::html::attributes::{alt, src};
//! use monoview::html::elements::{div, img, p, text};
//!
//! let figure = div(vec![], vec![
//!     img(vec![src("lens.png"), alt("A lens")]),
//!     p(vec![], vec![text("Getter and setter.")]),
//! ]);
//! assert_eq!(
//!     figure.to_string(),
//!     r#"<div><img src="lens.png" alt="A lens" /><p>Getter and setter.</p></div>"#
//! );
//! ```

use super::attribute::Attribute;
use super::node::Node;

macro_rules! container_elements {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` with the given attributes and children.")]
            pub fn $name(attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
                Node::element(stringify!($name), attributes, Some(children))
            }
        )*
    };
}

macro_rules! void_elements {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Self-closing `<", stringify!($name), " />`.")]
            pub fn $name(attributes: Vec<Attribute>) -> Node {
                Node::void(stringify!($name), attributes)
            }
        )*
    };
}

container_elements!(
    html, head, body, header, footer, main, nav, article, section, div, span, p, h1, h2, h3, h4,
    a, ul, ol, li, em, strong, code, pre, title, time,
);

void_elements!(br, hr, img, meta, link, input);

/// A text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::text(content)
}

/// A complete document: `<html>` with a `<head>` and a `<body>`.
pub fn document(
    attributes: Vec<Attribute>,
    head_children: Vec<Node>,
    body_children: Vec<Node>,
) -> Node {
    html(
        attributes,
        vec![head(vec![], head_children), body(vec![], body_children)],
    )
}
