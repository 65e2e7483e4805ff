//! Tests for `#[derive(Lenses)]`.
//!
//! The derive generates one `{field}_lens()` associated function per named
//! field. Those lenses are ordinary [`Lens`] values, so they compose and can
//! focus a view.

#![cfg(feature = "derive")]

use monoview::optics::{Lens, Lenses};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Author {
    name: String,
    handle: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Essay {
    title: String,
    words: u32,
    author: Author,
}

/// Struct with a generic type parameter
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Labelled<T> {
    label: String,
    value: T,
}

fn essay() -> Essay {
    Essay {
        title: "Semigroups and monoids".to_string(),
        words: 2400,
        author: Author {
            name: "A. Writer".to_string(),
            handle: "awriter".to_string(),
        },
    }
}

// =============================================================================
// Generated lenses
// =============================================================================

#[rstest]
fn generated_lens_gets_field() {
    let essay = essay();
    assert_eq!(Essay::title_lens().get(&essay), "Semigroups and monoids");
    assert_eq!(*Essay::words_lens().get(&essay), 2400);
}

#[rstest]
fn generated_lens_sets_field() {
    let updated = Essay::words_lens().set(essay(), 10);
    assert_eq!(updated.words, 10);
    assert_eq!(updated.title, essay().title);
}

#[rstest]
fn generated_lens_modifies_field() {
    let updated = Essay::title_lens().modify(essay(), |title| title.to_uppercase());
    assert_eq!(updated.title, "SEMIGROUPS AND MONOIDS");
}

#[rstest]
fn generated_lenses_compose() {
    let handle = Essay::author_lens().compose(Author::handle_lens());
    assert_eq!(handle.get(&essay()), "awriter");
    assert_eq!(handle.set(essay(), "bwriter".to_string()).author.handle, "bwriter");
}

#[rstest]
fn generated_lens_is_clone() {
    let name = Author::name_lens();
    let copy = name.clone();
    let author = essay().author;
    assert_eq!(name.get(&author), copy.get(&author));
}

#[rstest]
#[case(1u8)]
#[case(255u8)]
fn generic_struct_lenses(#[case] value: u8) {
    let labelled = Labelled {
        label: "n".to_string(),
        value: 0u8,
    };
    let updated = Labelled::value_lens().set(labelled, value);
    assert_eq!(updated.value, value);
    assert_eq!(Labelled::<u8>::label_lens().get(&updated), "n");
}

// =============================================================================
// Views
// =============================================================================

#[cfg(all(feature = "view", feature = "html"))]
mod views {
    use super::*;
    use monoview::html::elements::{h1, p, text};
    use monoview::typeclass::Semigroup;
    use monoview::view::HtmlView;

    #[rstest]
    fn derived_lenses_focus_views() {
        let heading = HtmlView::node(|title: &String| h1(vec![], vec![text(title.as_str())]))
            .focus(Essay::title_lens());
        let byline = HtmlView::node(|name: &String| p(vec![], vec![text(name.as_str())]))
            .focus(Essay::author_lens().compose(Author::name_lens()));

        assert_eq!(
            heading.combine(byline).render(&essay()),
            "<h1>Semigroups and monoids</h1><p>A. Writer</p>"
        );
    }
}

// =============================================================================
// Laws
// =============================================================================

mod laws {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_derived_lens_get_put(title in "[a-z ]{0,12}", words in any::<u32>()) {
            let source = Essay { title, words, ..essay() };
            let value = Essay::title_lens().get(&source).clone();
            prop_assert_eq!(Essay::title_lens().set(source.clone(), value), source);
        }

        #[test]
        fn prop_derived_lens_put_get(words in any::<u32>()) {
            let updated = Essay::words_lens().set(essay(), words);
            prop_assert_eq!(*Essay::words_lens().get(&updated), words);
        }

        #[test]
        fn prop_derived_lens_put_put(first in "[a-z]{0,6}", second in "[a-z]{0,6}") {
            let handle = Essay::author_lens().compose(Author::handle_lens());
            let twice = handle.set(handle.set(essay(), first), second.clone());
            prop_assert_eq!(twice, handle.set(essay(), second));
        }
    }
}
