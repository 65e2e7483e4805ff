//! Attribute constructors built on the typed keys.
//!
//! ```rust
//! use monoview::html::attributes::{class, width};
//!
//! assert_eq!(class("essay").to_string(), r#"class="essay""#);
//! assert_eq!(width(320).to_string(), r#"width="320""#);
//! ```

use super::attribute::{
    ALT, Attribute, CHARSET, CLASS, CONTENT, HEIGHT, HREF, ID, LANG, NAME, REL, SRC, TITLE, WIDTH,
};

macro_rules! string_attributes {
    ($($function:ident => $key:ident),* $(,)?) => {
        $(
            #[doc = concat!("The `", stringify!($function), "` attribute.")]
            pub fn $function(value: impl Into<String>) -> Attribute {
                $key.value(value.into())
            }
        )*
    };
}

string_attributes!(
    href => HREF,
    src => SRC,
    alt => ALT,
    class => CLASS,
    id => ID,
    title => TITLE,
    lang => LANG,
    rel => REL,
    name => NAME,
    content => CONTENT,
    charset => CHARSET,
);

/// Width in pixels.
pub fn width(pixels: u32) -> Attribute {
    WIDTH.value(pixels)
}

/// Height in pixels.
pub fn height(pixels: u32) -> Attribute {
    HEIGHT.value(pixels)
}

/// A `data-*` attribute.
pub fn data(suffix: &str, value: impl Into<String>) -> Attribute {
    Attribute::new(format!("data-{suffix}"), value)
}
