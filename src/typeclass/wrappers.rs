//! Newtype wrappers selecting a numeric monoid.
//!
//! A number can be combined in more than one lawful way, so the choice is
//! made by wrapping it:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//! - [`Max`]: larger value wins, identity is the type minimum
//! - [`Min`]: smaller value wins, identity is the type maximum
//!
//! Views that count things (words in an essay, links on a page) produce a
//! `Sum`, and views that look for the latest date produce a `Max`.
//!
//! ```rust
//! use monoview::typeclass::{Max, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(3).combine(Sum::new(4)), Sum::new(7));
//! assert_eq!(Max::combine_all([Max::new(2u8), Max::new(9), Max::new(4)]), Max::new(9));
//! assert_eq!(Max::<u8>::empty(), Max::new(0));
//! ```

macro_rules! numeric_wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Unwraps the value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Borrows the wrapped value.
            #[inline]
            pub const fn get(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self(value)
            }
        }

        impl<A: std::fmt::Display> std::fmt::Display for $name<A> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

numeric_wrapper!(
    /// The additive monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
    Sum
);

numeric_wrapper!(
    /// The multiplicative monoid: `Product(a).combine(Product(b)) == Product(a * b)`.
    Product
);

numeric_wrapper!(
    /// Keeps the larger of two values.
    Max
);

numeric_wrapper!(
    /// Keeps the smaller of two values.
    Min
);

/// Types with a least and a greatest value.
///
/// `Max` uses [`Bounded::min_value`] as its identity and `Min` uses
/// [`Bounded::max_value`].
pub trait Bounded {
    /// The least value of the type.
    fn min_value() -> Self;

    /// The greatest value of the type.
    fn max_value() -> Self;
}

macro_rules! bounded_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Bounded for $integer {
                fn min_value() -> Self {
                    <$integer>::MIN
                }

                fn max_value() -> Self {
                    <$integer>::MAX
                }
            }
        )*
    };
}

bounded_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    fn min_value() -> Self {
        '\0'
    }

    fn max_value() -> Self {
        char::MAX
    }
}

impl Bounded for bool {
    fn min_value() -> Self {
        false
    }

    fn max_value() -> Self {
        true
    }
}
