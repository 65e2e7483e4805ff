//! Property-based tests for Lens laws.
//!
//! - **GetPut**: `lens.set(source, lens.get(&source).clone()) == source`
//! - **PutGet**: `lens.get(&lens.set(source, value)) == &value`
//! - **PutPut**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! Checked for `lens!`, hand-built `FunctionLens` values and composed lenses.

#![cfg(feature = "optics")]

use monoview::lens;
use monoview::optics::{FunctionLens, Lens};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Author {
    name: String,
    handle: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Essay {
    title: String,
    words: u32,
    author: Author,
}

fn author_strategy() -> impl Strategy<Value = Author> {
    ("[A-Za-z ]{0,10}", "[a-z]{0,8}").prop_map(|(name, handle)| Author { name, handle })
}

fn essay_strategy() -> impl Strategy<Value = Essay> {
    ("[A-Za-z ]{0,12}", any::<u32>(), author_strategy()).prop_map(|(title, words, author)| {
        Essay {
            title,
            words,
            author,
        }
    })
}

// =============================================================================
// Macro-built lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_title_get_put(essay in essay_strategy()) {
        let title = lens!(Essay, title);
        let value = title.get(&essay).clone();
        prop_assert_eq!(title.set(essay.clone(), value), essay);
    }

    #[test]
    fn prop_title_put_get(essay in essay_strategy(), value in "[a-z]{0,10}") {
        let title = lens!(Essay, title);
        let updated = title.set(essay, value.clone());
        prop_assert_eq!(title.get(&updated), &value);
    }

    #[test]
    fn prop_words_put_put(essay in essay_strategy(), first in any::<u32>(), second in any::<u32>()) {
        let words = lens!(Essay, words);
        let left = words.set(words.set(essay.clone(), first), second);
        let right = words.set(essay, second);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_modify_is_get_then_set(essay in essay_strategy()) {
        let words = lens!(Essay, words);
        let expected = words.set(essay.clone(), essay.words / 2);
        prop_assert_eq!(words.modify(essay, |count| count / 2), expected);
    }
}

// =============================================================================
// Hand-built lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_function_lens_laws(author in author_strategy(), first in "[a-z]{0,6}", second in "[a-z]{0,6}") {
        let handle = FunctionLens::new(
            |author: &Author| &author.handle,
            |author: Author, handle: String| Author { handle, ..author },
        );

        let unchanged = handle.set(author.clone(), handle.get(&author).clone());
        prop_assert_eq!(&unchanged, &author);

        let updated = handle.set(author.clone(), first.clone());
        prop_assert_eq!(handle.get(&updated), &first);

        let twice = handle.set(handle.set(author.clone(), first), second.clone());
        prop_assert_eq!(twice, handle.set(author, second));
    }
}

// =============================================================================
// Composed lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_get_put(essay in essay_strategy()) {
        let author_name = lens!(Essay, author).compose(lens!(Author, name));
        let value = author_name.get(&essay).clone();
        prop_assert_eq!(author_name.set(essay.clone(), value), essay);
    }

    #[test]
    fn prop_composed_put_get(essay in essay_strategy(), value in "[A-Za-z]{0,8}") {
        let author_name = lens!(Essay, author).compose(lens!(Author, name));
        let updated = author_name.set(essay, value.clone());
        prop_assert_eq!(author_name.get(&updated), &value);
    }

    #[test]
    fn prop_composed_put_put(essay in essay_strategy(), first in "[a-z]{0,8}", second in "[a-z]{0,8}") {
        let author_handle = lens!(Essay, author).compose(lens!(Author, handle));
        let left = author_handle.set(author_handle.set(essay.clone(), first), second.clone());
        let right = author_handle.set(essay, second);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_composed_set_leaves_siblings(essay in essay_strategy(), value in "[a-z]{0,8}") {
        let author_name = lens!(Essay, author).compose(lens!(Author, name));
        let updated = author_name.set(essay.clone(), value);
        prop_assert_eq!(&updated.title, &essay.title);
        prop_assert_eq!(updated.words, essay.words);
        prop_assert_eq!(&updated.author.handle, &essay.author.handle);
    }
}
