//! The data the index page is rendered from.

use monoview::optics::Lenses;

/// The blog as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Lenses)]
pub struct Site {
    pub title: String,
    pub author: Author,
    pub essays: Vec<Essay>,
}

#[derive(Clone, Debug, PartialEq, Eq, Lenses)]
pub struct Author {
    pub name: String,
    pub handle: String,
}

/// One entry in the index.
#[derive(Clone, Debug, PartialEq, Eq, Lenses)]
pub struct Essay {
    pub title: String,
    pub slug: String,
    /// ISO 8601 date.
    pub published: String,
    pub tags: Vec<String>,
    pub draft: bool,
}

impl Essay {
    pub fn new(title: &str, slug: &str, published: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
            published: published.to_string(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            draft: false,
        }
    }

    #[must_use]
    pub const fn as_draft(mut self) -> Self {
        self.draft = true;
        self
    }
}

/// The essays shown by the binary.
pub fn sample_site() -> Site {
    Site {
        title: "Functional Swift, slowly".to_string(),
        author: Author {
            name: "A. Writer".to_string(),
            handle: "awriter".to_string(),
        },
        essays: vec![
            Essay::new("Semigroups and monoids", "monoids", "2017-03-02", &["algebra", "swift"]),
            Essay::new("Algebraic data types", "adt", "2017-04-11", &["types"]),
            Essay::new("Composable views", "views", "2017-06-20", &["html", "algebra"]),
            Essay::new("Lenses in practice", "lenses", "2017-09-01", &["optics"]).as_draft(),
        ],
    }
}
