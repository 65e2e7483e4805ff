//! Rendering node trees to HTML strings.
//!
//! The default rendering is compact and writes text and attribute values
//! verbatim:
//!
//! - `Element` with children: `<name k="v">children</name>`
//! - `Element` without a child list: `<name k="v" />`
//! - `Text`: the literal content
//!
//! [`RenderOptions`] switches on indentation or escaping.
//!
//! ```rust
//! use monoview::html::elements::{br, li, text, ul};
//! use monoview::html::{RenderOptions, Renderer, render};
//!
//! let list = ul(vec![], vec![li(vec![], vec![text("one")]), br(vec![])]);
//! assert_eq!(render(&list), "<ul><li>one</li><br /></ul>");
//!
//! let pretty = Renderer::new(RenderOptions::pretty(2)).render(&list);
//! assert_eq!(pretty, "<ul>\n  <li>\n    one\n  </li>\n  <br />\n</ul>\n");
//! ```

use std::fmt::{self, Write};

use super::attribute::Attribute;
use super::node::Node;

/// Rendering configuration.
///
/// The default is compact and unescaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    indent: Option<usize>,
    escape_text: bool,
}

impl RenderOptions {
    /// Compact output, no escaping.
    pub const fn compact() -> Self {
        Self {
            indent: None,
            escape_text: false,
        }
    }

    /// One node per line, indented by `indent` spaces per level.
    pub const fn pretty(indent: usize) -> Self {
        Self {
            indent: Some(indent),
            escape_text: false,
        }
    }

    /// Sets whether text and attribute values are escaped.
    #[must_use]
    pub const fn escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// The indent width when pretty printing.
    pub const fn indent(&self) -> Option<usize> {
        self.indent
    }

    /// Whether text and attribute values are escaped.
    pub const fn escapes_text(&self) -> bool {
        self.escape_text
    }
}

/// Renders nodes according to a [`RenderOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Creates a renderer.
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options this renderer was built with.
    pub const fn options(&self) -> RenderOptions {
        self.options
    }

    /// Renders a single node.
    pub fn render(&self, node: &Node) -> String {
        self.render_all(std::slice::from_ref(node))
    }

    /// Renders a sequence of nodes back to back.
    pub fn render_all(&self, nodes: &[Node]) -> String {
        let output = self.display(nodes).to_string();
        if tracing::enabled!(tracing::Level::TRACE) {
            let count: usize = nodes.iter().map(Node::count_nodes).sum();
            tracing::trace!(
                nodes = count,
                bytes = output.len(),
                pretty = self.options.indent.is_some(),
                "rendered nodes"
            );
        }
        output
    }

    /// Returns a [`fmt::Display`] adapter that renders `nodes` lazily.
    pub const fn display<'a>(&'a self, nodes: &'a [Node]) -> Rendered<'a> {
        Rendered {
            renderer: self,
            nodes,
        }
    }

    fn write_node<W: Write>(&self, out: &mut W, node: &Node, depth: usize) -> fmt::Result {
        match self.options.indent {
            None => self.write_compact(out, node),
            Some(indent) => self.write_pretty(out, node, depth, indent),
        }
    }

    fn write_compact<W: Write>(&self, out: &mut W, node: &Node) -> fmt::Result {
        match node {
            Node::Text(content) => self.write_text(out, content, false),
            Node::Element {
                name,
                attributes,
                children: None,
            } => {
                self.write_open_tag(out, name, attributes)?;
                out.write_str(" />")
            }
            Node::Element {
                name,
                attributes,
                children: Some(children),
            } => {
                self.write_open_tag(out, name, attributes)?;
                out.write_char('>')?;
                for child in children {
                    self.write_compact(out, child)?;
                }
                write!(out, "</{name}>")
            }
        }
    }

    fn write_pretty<W: Write>(
        &self,
        out: &mut W,
        node: &Node,
        depth: usize,
        indent: usize,
    ) -> fmt::Result {
        write_padding(out, depth.saturating_mul(indent))?;
        match node {
            Node::Text(content) => self.write_text(out, content, false)?,
            Node::Element {
                name,
                attributes,
                children: None,
            } => {
                self.write_open_tag(out, name, attributes)?;
                out.write_str(" />")?;
            }
            Node::Element {
                name,
                attributes,
                children: Some(children),
            } if children.is_empty() => {
                self.write_open_tag(out, name, attributes)?;
                write!(out, "></{name}>")?;
            }
            Node::Element {
                name,
                attributes,
                children: Some(children),
            } => {
                self.write_open_tag(out, name, attributes)?;
                out.write_str(">\n")?;
                for child in children {
                    self.write_pretty(out, child, depth + 1, indent)?;
                }
                write_padding(out, depth.saturating_mul(indent))?;
                write!(out, "</{name}>")?;
            }
        }
        out.write_char('\n')
    }

    fn write_open_tag<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        attributes: &[Attribute],
    ) -> fmt::Result {
        write!(out, "<{name}")?;
        for attribute in attributes {
            write!(out, " {}=\"", attribute.key())?;
            self.write_text(out, attribute.value(), true)?;
            out.write_char('"')?;
        }
        Ok(())
    }

    fn write_text<W: Write>(&self, out: &mut W, content: &str, in_attribute: bool) -> fmt::Result {
        if !self.options.escape_text {
            return out.write_str(content);
        }
        for character in content.chars() {
            match character {
                '&' => out.write_str("&amp;")?,
                '<' => out.write_str("&lt;")?,
                '>' => out.write_str("&gt;")?,
                '"' if in_attribute => out.write_str("&quot;")?,
                other => out.write_char(other)?,
            }
        }
        Ok(())
    }
}

// Format widths are capped at u16, so padding is written a character at a
// time.
fn write_padding<W: Write>(out: &mut W, width: usize) -> fmt::Result {
    for _ in 0..width {
        out.write_char(' ')?;
    }
    Ok(())
}

/// Lazily rendered nodes, produced by [`Renderer::display`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    renderer: &'a Renderer,
    nodes: &'a [Node],
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes {
            self.renderer.write_node(formatter, node, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::default().write_node(formatter, self, 0)
    }
}

/// Renders a node compactly, without escaping.
pub fn render(node: &Node) -> String {
    Renderer::default().render(node)
}

/// Renders a sequence of nodes compactly and concatenates the results.
pub fn render_all(nodes: &[Node]) -> String {
    Renderer::default().render_all(nodes)
}
