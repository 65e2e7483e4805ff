//! Errors raised by the validating constructors.

use std::fmt;

/// A tag or attribute name that cannot appear in well-formed markup.
///
/// Only [`Node::try_element`](super::Node::try_element) and
/// [`Attribute::try_new`](super::Attribute::try_new) produce this error.
/// Rendering itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlError {
    /// The tag name is empty, does not start with an ASCII letter, or
    /// contains something other than ASCII alphanumerics and `-`.
    InvalidTagName(String),
    /// The attribute name is empty or contains whitespace, quotes, `=`,
    /// `<`, `>`, `/` or a control character.
    InvalidAttributeName(String),
}

impl HtmlError {
    /// Returns the rejected name.
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidTagName(name) | Self::InvalidAttributeName(name) => name,
        }
    }
}

impl fmt::Display for HtmlError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTagName(name) => write!(formatter, "invalid tag name: {name:?}"),
            Self::InvalidAttributeName(name) => {
                write!(formatter, "invalid attribute name: {name:?}")
            }
        }
    }
}

impl std::error::Error for HtmlError {}
