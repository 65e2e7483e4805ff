//! The document tree.

use static_assertions::assert_impl_all;

use super::attribute::Attribute;
use super::error::HtmlError;

/// A markup element or a run of text.
///
/// An element's `children` is `None` for void elements such as `br` or
/// `img`, which render in self-closing form. `Some(vec![])` is an element
/// with no content, which renders as an open/close pair. The two are never
/// conflated.
///
/// # Examples
///
/// ```rust
/// use monoview::html::{Attribute, Node};
///
/// let link = Node::element(
///     "a",
///     vec![Attribute::new("href", "/monoids")],
///     Some(vec![Node::text("Monoids")]),
/// );
/// assert_eq!(link.to_string(), r#"<a href="/monoids">Monoids</a>"#);
///
/// assert_eq!(Node::void("br", vec![]).to_string(), "<br />");
/// assert_eq!(Node::element("p", vec![], Some(vec![])).to_string(), "<p></p>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A tagged element.
    Element {
        /// Tag name.
        name: String,
        /// Attributes in source order.
        attributes: Vec<Attribute>,
        /// Child nodes, or `None` for a void element.
        children: Option<Vec<Node>>,
    },
    /// Literal text.
    Text(String),
}

assert_impl_all!(Node: Send, Sync, Clone);
assert_impl_all!(Attribute: Send, Sync, Clone);

impl Node {
    /// Creates an element without checking its name.
    pub fn element(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Option<Vec<Self>>,
    ) -> Self {
        Self::Element {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// Creates an element, rejecting names that are not valid HTML tag names.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidTagName`] unless the name is non-empty,
    /// starts with an ASCII letter and contains only ASCII alphanumerics and
    /// `-`.
    pub fn try_element(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Option<Vec<Self>>,
    ) -> Result<Self, HtmlError> {
        let name = name.into();
        if !is_valid_tag_name(&name) {
            return Err(HtmlError::InvalidTagName(name));
        }
        Ok(Self::element(name, attributes, children))
    }

    /// Creates an element that carries no child list.
    pub fn void(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self::element(name, attributes, None)
    }

    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// The tag name, or `None` for text.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Element { name, .. } => Some(name),
            Self::Text(_) => None,
        }
    }

    /// The attributes of an element. Text has none.
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Self::Element { attributes, .. } => attributes,
            Self::Text(_) => &[],
        }
    }

    /// The child list, or `None` for void elements and text.
    pub fn children(&self) -> Option<&[Self]> {
        match self {
            Self::Element { children, .. } => children.as_deref(),
            Self::Text(_) => None,
        }
    }

    /// Whether this is an element without a child list.
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Element { children: None, .. })
    }

    /// Whether this is a text node.
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the node with one more attribute appended. Text is returned
    /// unchanged.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.push(attribute);
        }
        self
    }

    /// Concatenates the text of this node and all of its descendants in
    /// document order.
    ///
    /// ```rust
    /// use monoview::html::elements::{em, p, text};
    ///
    /// let paragraph = p(vec![], vec![text("Lenses "), em(vec![], vec![text("compose")])]);
    /// assert_eq!(paragraph.text_content(), "Lenses compose");
    /// ```
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        self.collect_text(&mut content);
        content
    }

    fn collect_text(&self, content: &mut String) {
        match self {
            Self::Text(text) => content.push_str(text),
            Self::Element { children, .. } => {
                for child in children.iter().flatten() {
                    child.collect_text(content);
                }
            }
        }
    }

    /// Counts this node and every descendant.
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |children| children.iter().map(Self::count_nodes).sum())
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Self::text(content)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Self::Text(content)
    }
}

fn is_valid_tag_name(name: &str) -> bool {
    let mut characters = name.chars();
    characters
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && characters.all(|character| character.is_ascii_alphanumeric() || character == '-')
}
