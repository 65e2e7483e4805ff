//! Attribute pairs and typed attribute keys.
//!
//! An [`Attribute`] is nothing more than a key and a value. An
//! [`AttributeKey<V>`] adds a phantom value type so that a key can only be
//! paired with values of the kind it expects:
//!
//! ```rust
//! use monoview::html::{AttributeKey, Attribute};
//!
//! const COLSPAN: AttributeKey<u32> = AttributeKey::new("colspan");
//!
//! assert_eq!(COLSPAN.value(2u8), Attribute::new("colspan", "2"));
//! ```
//!
//! ```compile_fail
//! use monoview::html::AttributeKey;
//!
//! const COLSPAN: AttributeKey<u32> = AttributeKey::new("colspan");
//! let _ = COLSPAN.value("two");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::error::HtmlError;

/// A key/value pair attached to an element.
///
/// The key and value are stored as given and written verbatim when
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    key: String,
    value: String,
}

impl Attribute {
    /// Creates an attribute without checking the key.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an attribute, rejecting keys that would break the markup.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidAttributeName`] when the key is empty or
    /// contains whitespace, quotes, `=`, `<`, `>`, `/` or control characters.
    ///
    /// ```rust
    /// use monoview::html::{Attribute, HtmlError};
    ///
    /// assert!(Attribute::try_new("data-id", "7").is_ok());
    /// assert_eq!(
    ///     Attribute::try_new("a b", "7"),
    ///     Err(HtmlError::InvalidAttributeName("a b".to_string()))
    /// );
    /// ```
    pub fn try_new(key: impl Into<String>, value: impl Into<String>) -> Result<Self, HtmlError> {
        let key = key.into();
        if !is_valid_attribute_name(&key) {
            return Err(HtmlError::InvalidAttributeName(key));
        }
        Ok(Self::new(key, value))
    }

    /// The attribute name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attribute value, unescaped.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Splits the attribute into its key and value.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Attribute {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}=\"{}\"", self.key, self.value)
    }
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|character| {
            character.is_whitespace()
                || character.is_control()
                || matches!(character, '"' | '\'' | '=' | '<' | '>' | '/')
        })
}

/// An attribute name paired with the type of value it accepts.
///
/// `V` is never stored; it only restricts [`AttributeKey::value`].
pub struct AttributeKey<V> {
    name: &'static str,
    _marker: PhantomData<fn(V)>,
}

impl<V> AttributeKey<V> {
    /// Creates a key. Usable in `const` items.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The attribute name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Pairs the key with a value of the expected type.
    pub fn value<T>(&self, value: T) -> Attribute
    where
        T: Into<V>,
        V: fmt::Display,
    {
        Attribute::new(self.name, value.into().to_string())
    }
}

impl<V> Clone for AttributeKey<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for AttributeKey<V> {}

impl<V> fmt::Debug for AttributeKey<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("AttributeKey")
            .field(&self.name)
            .finish()
    }
}

/// `href` on links.
pub const HREF: AttributeKey<String> = AttributeKey::new("href");
/// `src` on images and scripts.
pub const SRC: AttributeKey<String> = AttributeKey::new("src");
/// `alt` text on images.
pub const ALT: AttributeKey<String> = AttributeKey::new("alt");
/// Space-separated class list.
pub const CLASS: AttributeKey<String> = AttributeKey::new("class");
/// Element identifier.
pub const ID: AttributeKey<String> = AttributeKey::new("id");
/// Advisory title.
pub const TITLE: AttributeKey<String> = AttributeKey::new("title");
/// Document language.
pub const LANG: AttributeKey<String> = AttributeKey::new("lang");
/// Link relation.
pub const REL: AttributeKey<String> = AttributeKey::new("rel");
/// `name` on `meta` and form controls.
pub const NAME: AttributeKey<String> = AttributeKey::new("name");
/// `content` on `meta`.
pub const CONTENT: AttributeKey<String> = AttributeKey::new("content");
/// Character encoding declaration.
pub const CHARSET: AttributeKey<String> = AttributeKey::new("charset");
/// Width in pixels.
pub const WIDTH: AttributeKey<u32> = AttributeKey::new("width");
/// Height in pixels.
pub const HEIGHT: AttributeKey<u32> = AttributeKey::new("height");
