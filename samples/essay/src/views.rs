//! The index page, assembled from small views.
//!
//! Every piece is written against the smallest input it needs and lifted
//! onto `Site` with a lens or `contramap`.

use monoview::html::attributes::{charset, class, href, lang};
use monoview::html::elements::{
    a, document, footer, h1, h2, header, li, meta, p, span, text, time, title,
};
use monoview::html::{Attribute, Node};
use monoview::typeclass::{Semigroup, Sum};
use monoview::view::{HtmlView, View};

use crate::model::{Author, Essay, Site};

fn tag_view() -> HtmlView<String> {
    HtmlView::node(|tag: &String| li(vec![class("tag")], vec![text(tag.as_str())]))
}

fn draft_badge() -> HtmlView<Essay> {
    HtmlView::node(|_: &Essay| span(vec![class("badge")], vec![text("draft")]))
        .when(|essay: &Essay| essay.draft)
}

fn essay_link() -> HtmlView<Essay> {
    HtmlView::node(|essay: &Essay| {
        h2(
            vec![],
            vec![a(
                vec![href(format!("/{}", essay.slug))],
                vec![text(essay.title.as_str())],
            )],
        )
    })
}

fn published_view() -> HtmlView<String> {
    HtmlView::node(|date: &String| {
        time(
            vec![Attribute::new("datetime", date.as_str())],
            vec![text(date.as_str())],
        )
    })
}

/// One `<li>` per essay: link, date, tags and an optional draft badge.
pub fn essay_view() -> HtmlView<Essay> {
    essay_link()
        .combine(published_view().focus(Essay::published_lens()))
        .combine(
            tag_view()
                .list()
                .wrap("ul", vec![class("tags")])
                .focus(Essay::tags_lens()),
        )
        .combine(draft_badge())
        .wrap("li", vec![class("essay")])
}

fn byline() -> HtmlView<Author> {
    HtmlView::node(|author: &Author| {
        p(
            vec![],
            vec![
                text(format!("Written by {} ", author.name)),
                a(
                    vec![href(format!("/@{}", author.handle))],
                    vec![text(format!("@{}", author.handle))],
                ),
            ],
        )
    })
}

/// The `<body>` contents for the whole site.
pub fn index_view() -> HtmlView<Site> {
    let heading = HtmlView::node(|site_title: &String| {
        header(vec![], vec![h1(vec![], vec![text(site_title.as_str())])])
    })
    .focus(Site::title_lens());

    let essays = essay_view()
        .list()
        .wrap("ul", vec![class("essays")])
        .focus(Site::essays_lens());

    let credits = byline()
        .map(|nodes| vec![footer(vec![], nodes)])
        .focus(Site::author_lens());

    heading.combine(essays).combine(credits)
}

/// The `<head>` contents.
pub fn head_view() -> HtmlView<Site> {
    let encoding = HtmlView::node(|_: &Site| meta(vec![charset("utf-8")]));
    let page_title = HtmlView::node(|site_title: &String| {
        title(vec![], vec![text(site_title.as_str())])
    })
    .contramap(|site: &Site| site.title.clone());

    encoding.combine(page_title)
}

/// Counts tags across published essays.
pub fn published_tag_count() -> View<Site, Sum<usize>> {
    View::new(|essay: &Essay| Sum::new(essay.tags.len()))
        .when(|essay: &Essay| !essay.draft)
        .list()
        .contramap_ref(|site: &Site| &site.essays)
}

/// The complete document.
pub fn page(site: &Site) -> Node {
    document(vec![lang("en")], head_view().run(site), index_view().run(site))
}
