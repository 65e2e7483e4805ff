//! The `View` type and its combinators.

use std::fmt;
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

use crate::typeclass::{Monoid, Semigroup};

/// A pure function from `&D` to a monoid value `N`.
///
/// The function is shared behind an `Rc`, so cloning a view is cheap and a
/// view can be run any number of times.
///
/// # Type Parameters
///
/// - `D`: the input data the view is rendered from
/// - `N`: the output; composition operators require it to be a
///   [`Semigroup`] or [`Monoid`]
///
/// # Examples
///
/// ```rust
/// use monoview::typeclass::Semigroup;
/// use monoview::view::View;
///
/// let greeting: View<String, String> = View::new(|name: &String| format!("Hello, {name}"));
/// let exclaim = View::new(|_: &String| String::from("!"));
///
/// assert_eq!(greeting.combine(exclaim).run(&String::from("Ada")), "Hello, Ada!");
/// ```
pub struct View<D, N>
where
    D: 'static,
    N: 'static,
{
    render_function: Rc<dyn Fn(&D) -> N>,
}

assert_not_impl_any!(View<(), String>: Send, Sync);

impl<D, N> View<D, N>
where
    D: 'static,
    N: 'static,
{
    /// Wraps a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&D) -> N + 'static,
    {
        Self {
            render_function: Rc::new(function),
        }
    }

    /// Runs the view on `data`.
    pub fn run(&self, data: &D) -> N {
        (self.render_function)(data)
    }

    /// A view that ignores its input and always returns a clone of `value`.
    ///
    /// ```rust
    /// use monoview::view::View;
    ///
    /// let footer: View<u32, String> = View::constant(String::from("fin"));
    /// assert_eq!(footer.run(&1), "fin");
    /// ```
    pub fn constant(value: N) -> Self
    where
        N: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the output, leaving the input type unchanged.
    ///
    /// # Laws
    ///
    /// ```text
    /// view.map(|n| n)          == view
    /// view.map(f).map(g)       == view.map(|n| g(f(n)))
    /// ```
    ///
    /// ```rust
    /// use monoview::view::View;
    ///
    /// let length = View::new(|text: &String| text.clone()).map(|text| text.len());
    /// assert_eq!(length.run(&String::from("lens")), 4);
    /// ```
    pub fn map<M, F>(self, function: F) -> View<D, M>
    where
        F: Fn(N) -> M + 'static,
        M: 'static,
    {
        let original_function = self.render_function;
        View::new(move |data| function(original_function(data)))
    }

    /// Adapts the input, leaving the output type unchanged.
    ///
    /// `function` converts the new input `E` into the input this view
    /// already understands, so a view written for a large structure can be
    /// reused wherever something convertible into it is at hand.
    ///
    /// # Laws
    ///
    /// ```text
    /// view.contramap(|d| d.clone())     == view
    /// view.contramap(f).contramap(g)    == view.contramap(|e| f(&g(e)))
    /// ```
    ///
    /// ```rust
    /// use monoview::view::View;
    ///
    /// struct Essay { title: String, words: usize }
    ///
    /// let title_view = View::new(|title: &String| format!("<h1>{title}</h1>"));
    /// let essay_view = title_view.contramap(|essay: &Essay| essay.title.clone());
    ///
    /// let essay = Essay { title: String::from("Monoids"), words: 1200 };
    /// assert_eq!(essay_view.run(&essay), "<h1>Monoids</h1>");
    /// # let _ = essay.words;
    /// ```
    pub fn contramap<E, F>(self, function: F) -> View<E, N>
    where
        F: Fn(&E) -> D + 'static,
        E: 'static,
    {
        let original_function = self.render_function;
        View::new(move |data| original_function(&function(data)))
    }

    /// Like [`View::contramap`], but the conversion borrows from the new
    /// input instead of building an owned value.
    ///
    /// ```rust
    /// use monoview::view::View;
    ///
    /// struct Essay { title: String }
    ///
    /// let title_view = View::new(|title: &String| title.to_uppercase());
    /// let essay_view = title_view.contramap_ref(|essay: &Essay| &essay.title);
    /// assert_eq!(essay_view.run(&Essay { title: String::from("adt") }), "ADT");
    /// ```
    pub fn contramap_ref<E, F>(self, function: F) -> View<E, N>
    where
        F: for<'a> Fn(&'a E) -> &'a D + 'static,
        E: 'static,
    {
        let original_function = self.render_function;
        View::new(move |data| original_function(function(data)))
    }

    /// Runs the view on every item of a list and combines the outputs.
    ///
    /// An empty list yields `N::empty()`.
    ///
    /// ```rust
    /// use monoview::view::View;
    ///
    /// let item = View::new(|tag: &&str| format!("[{tag}]"));
    /// assert_eq!(item.list().run(&vec!["fp", "swift"]), "[fp][swift]");
    /// ```
    pub fn list(self) -> View<Vec<D>, N>
    where
        N: Monoid,
    {
        let original_function = self.render_function;
        View::new(move |items: &Vec<D>| {
            N::combine_all(items.iter().map(|item| original_function(item)))
        })
    }

    /// Runs the view on `Some` and yields `N::empty()` for `None`.
    pub fn optional(self) -> View<Option<D>, N>
    where
        N: Monoid,
    {
        let original_function = self.render_function;
        View::new(move |data: &Option<D>| {
            data.as_ref()
                .map_or_else(N::empty, |inner| original_function(inner))
        })
    }

    /// Runs the view only when `predicate` holds, yielding `N::empty()`
    /// otherwise.
    ///
    /// ```rust
    /// use monoview::view::View;
    ///
    /// let badge = View::new(|_: &bool| String::from("draft")).when(|draft: &bool| *draft);
    /// assert_eq!(badge.run(&true), "draft");
    /// assert_eq!(badge.run(&false), "");
    /// ```
    #[must_use]
    pub fn when<P>(self, predicate: P) -> Self
    where
        P: Fn(&D) -> bool + 'static,
        N: Monoid,
    {
        let original_function = self.render_function;
        Self::new(move |data| {
            if predicate(data) {
                original_function(data)
            } else {
                N::empty()
            }
        })
    }
}

#[cfg(feature = "optics")]
impl<D, N> View<D, N>
where
    D: 'static,
    N: 'static,
{
    /// Reuses the view on a larger structure through a lens.
    ///
    /// Only the lens getter is used; this is [`View::contramap_ref`] with
    /// the lens supplying the conversion.
    ///
    /// ```rust
    /// use monoview::lens;
    /// use monoview::view::View;
    ///
    /// #[derive(Clone)]
    /// struct Essay { title: String, slug: String }
    ///
    /// let slug_view = View::new(|slug: &String| format!("/{slug}"));
    /// let essay_view = slug_view.focus(lens!(Essay, slug));
    ///
    /// let essay = Essay { title: String::from("Lenses"), slug: String::from("lenses") };
    /// assert_eq!(essay_view.run(&essay), "/lenses");
    /// # let _ = essay.title;
    /// ```
    pub fn focus<S, L>(self, lens: L) -> View<S, N>
    where
        L: crate::optics::Lens<S, D> + 'static,
        S: 'static,
    {
        let original_function = self.render_function;
        View::new(move |source| original_function(lens.get(source)))
    }
}

/// Two views on the same input combine by combining their outputs, left
/// output first.
impl<D, N> Semigroup for View<D, N>
where
    D: 'static,
    N: Semigroup + 'static,
{
    fn combine(self, other: Self) -> Self {
        let left = self.render_function;
        let right = other.render_function;
        Self::new(move |data| left(data).combine(right(data)))
    }
}

/// The identity view ignores its input and returns `N::empty()`.
impl<D, N> Monoid for View<D, N>
where
    D: 'static,
    N: Monoid + 'static,
{
    fn empty() -> Self {
        Self::new(|_| N::empty())
    }
}

impl<D, N> Clone for View<D, N>
where
    D: 'static,
    N: 'static,
{
    fn clone(&self) -> Self {
        Self {
            render_function: Rc::clone(&self.render_function),
        }
    }
}

impl<D, N> fmt::Debug for View<D, N>
where
    D: 'static,
    N: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("View(<function>)")
    }
}
