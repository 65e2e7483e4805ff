//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! In addition to associativity, for all `a`:
//!
//! ```text
//! T::empty().combine(a) == a     (left identity)
//! a.combine(T::empty()) == a     (right identity)
//! ```
//!
//! The identity is what lets a list of views collapse to a single view even
//! when the list is empty.
//!
//! # Examples
//!
//! ```rust
//! use monoview::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::empty().combine(String::from("essay")), "essay");
//! assert_eq!(Sum::combine_all([1, 2, 3].map(Sum::new)), Sum::new(6));
//! assert_eq!(Sum::<u32>::combine_all([]), Sum::new(0));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A semigroup with an identity element.
///
/// # Laws
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Folds an iterator with [`Semigroup::combine`], starting from
    /// [`Monoid::empty`]. An empty iterator yields the identity.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value equals the identity element.
    ///
    /// ```rust
    /// use monoview::typeclass::Monoid;
    ///
    /// assert!(Vec::<u8>::new().is_empty_value());
    /// assert!(!String::from("x").is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// The identity is `None`, so the inner type only needs to be a semigroup.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_identity {
    ($($number:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$number> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::min_value())
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::max_value())
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}
