//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! A sequence of nodes is the output every HTML view produces, and two
//! sequences combine by concatenation:
//!
//! ```rust
//! use monoview::html::elements::{p, text};
//! use monoview::typeclass::Semigroup;
//!
//! let intro = vec![p(vec![], vec![text("Monoids compose.")])];
//! let outro = vec![p(vec![], vec![text("So do views.")])];
//! assert_eq!(intro.combine(outro).len(), 2);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use monoview::typeclass::Semigroup;
///
/// let heading = String::from("<h1>");
/// assert_eq!(heading.combine(String::from("</h1>")), "<h1></h1>");
/// ```
pub trait Semigroup {
    /// Combines two values into one. The operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values into a new one.
    ///
    /// The default clones both sides and calls [`Semigroup::combine`].
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0, since a semigroup has no identity to return.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monoview::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("=").combine_n(3), "===");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces an iterator with [`Semigroup::combine`], left to right.
    ///
    /// Returns `None` for an empty iterator. See
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for a total version.
    ///
    /// ```rust
    /// use monoview::typeclass::Semigroup;
    ///
    /// let words = ["view", "s"].map(String::from);
    /// assert_eq!(String::reduce_all(words), Some(String::from("views")));
    /// assert_eq!(String::reduce_all(Vec::<String>::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend_from_slice(self);
        result.extend_from_slice(other);
        result
    }
}

/// `None` is neutral; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}
