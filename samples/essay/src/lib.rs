//! Sample: an essay index page built entirely from composed views.
//!
//! The page is described by small views, each written against the part of
//! the site it needs, then focused onto the whole `Site` with lenses and
//! combined with `Semigroup::combine`.

pub mod config;
pub mod model;
pub mod views;
