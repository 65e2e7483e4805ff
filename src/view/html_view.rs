//! Views whose output is a sequence of nodes.

use super::function_view::View;
use crate::html::{Attribute, Node, Renderer};

/// A view producing HTML nodes, the most common kind of view.
pub type HtmlView<D> = View<D, Vec<Node>>;

impl<D: 'static> View<D, Vec<Node>> {
    /// Wraps a function producing a single node.
    ///
    /// ```rust
    /// use monoview::html::elements::{h1, text};
    /// use monoview::view::HtmlView;
    ///
    /// let heading = HtmlView::node(|title: &String| h1(vec![], vec![text(title.as_str())]));
    /// assert_eq!(heading.render(&String::from("Lenses")), "<h1>Lenses</h1>");
    /// ```
    pub fn node<F>(function: F) -> Self
    where
        F: Fn(&D) -> Node + 'static,
    {
        Self::new(move |data| vec![function(data)])
    }

    /// Runs the view and renders the nodes compactly.
    pub fn render(&self, data: &D) -> String {
        self.render_with(&Renderer::default(), data)
    }

    /// Runs the view and renders the nodes with `renderer`.
    pub fn render_with(&self, renderer: &Renderer, data: &D) -> String {
        renderer.render_all(&self.run(data))
    }

    /// Wraps the view's nodes in a container element.
    ///
    /// ```rust
    /// use monoview::html::attributes::class;
    /// use monoview::html::elements::{li, text};
    /// use monoview::view::HtmlView;
    ///
    /// let tags = HtmlView::node(|tag: &String| li(vec![], vec![text(tag.as_str())]))
    ///     .list()
    ///     .wrap("ul", vec![class("tags")]);
    /// assert_eq!(
    ///     tags.render(&vec![String::from("fp")]),
    ///     r#"<ul class="tags"><li>fp</li></ul>"#
    /// );
    /// ```
    #[must_use]
    pub fn wrap(self, name: &str, attributes: Vec<Attribute>) -> Self {
        let name = name.to_string();
        self.map(move |children| {
            vec![Node::element(name.clone(), attributes.clone(), Some(children))]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::RenderOptions;
    use crate::html::elements::{p, text};
    use crate::typeclass::Semigroup;
    use rstest::rstest;

    #[rstest]
    fn node_wraps_single_output() {
        let view = HtmlView::node(|word: &&str| text(*word));
        assert_eq!(view.run(&"hi"), vec![Node::text("hi")]);
    }

    #[rstest]
    fn render_with_uses_options() {
        let view = HtmlView::node(|word: &&str| p(vec![], vec![text(*word)]));
        let pretty = Renderer::new(RenderOptions::pretty(1));
        assert_eq!(view.render_with(&pretty, &"x"), "<p>\n x\n</p>\n");
        assert_eq!(view.render(&"x"), "<p>x</p>");
    }

    #[rstest]
    fn wrap_keeps_combined_children() {
        let first = HtmlView::node(|_: &()| text("a"));
        let second = HtmlView::node(|_: &()| text("b"));
        let wrapped = first.combine(second).wrap("span", vec![]);
        assert_eq!(wrapped.render(&()), "<span>ab</span>");
    }
}
