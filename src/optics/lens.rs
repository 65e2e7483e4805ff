//! Lenses: first-class getter/setter pairs.
//!
//! # Laws
//!
//! 1. **GetPut**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! # Examples
//!
//! ```
//! use monoview::lens;
//! use monoview::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Essay { title: String, words: u32 }
//!
//! let words = lens!(Essay, words);
//! let essay = Essay { title: "Monoids".to_string(), words: 900 };
//!
//! assert_eq!(*words.get(&essay), 900);
//! assert_eq!(words.modify(essay, |count| count + 100).words, 1000);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Focuses on one part `A` of a structure `S`.
pub trait Lens<S, A> {
    /// Borrows the focused part.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Replaces the focused part, returning the updated structure.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused part with `function` applied to its current
    /// value.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Focuses further, through a lens on the focused part.
    ///
    /// ```
    /// use monoview::lens;
    /// use monoview::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Author { name: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Essay { author: Author }
    ///
    /// let author_name = lens!(Essay, author).compose(lens!(Author, name));
    /// let essay = Essay { author: Author { name: "Ada".to_string() } };
    /// assert_eq!(author_name.get(&essay), "Ada");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens built from a getter closure and a setter closure.
///
/// ```
/// use monoview::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Draft { body: String, published: bool }
///
/// let published = FunctionLens::new(
///     |draft: &Draft| &draft.published,
///     |draft: Draft, published: bool| Draft { published, ..draft },
/// );
///
/// let draft = Draft { body: String::new(), published: false };
/// assert!(published.set(draft, true).published);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a lens from a getter and a setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Two lenses chained: `first` focuses `S -> A`, `second` focuses `A -> B`.
///
/// Setting clones the intermediate `A`, so `A` must be `Clone`. `A` must
/// also be `'static` so that it outlives any borrow of the source.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Chains two lenses.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.second.get(self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let updated = self.second.set(intermediate, value);
        self.first.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<L1: fmt::Debug, L2: fmt::Debug, A> fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Builds a [`FunctionLens`] for a named struct field.
///
/// ```
/// use monoview::lens;
/// use monoview::optics::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Tagged<T> { tag: String, value: T }
///
/// let value = lens!(Tagged<u8>, value);
/// let tagged = Tagged { tag: "n".to_string(), value: 1 };
/// assert_eq!(value.set(tagged, 2).value, 2);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
