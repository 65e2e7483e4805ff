//! Property-based tests for View laws.
//!
//! Views are functions, so two views are compared by running both on the
//! same generated input.
//!
//! ## Monoid Laws
//! - Left Identity: `View::empty().combine(v) == v`
//! - Right Identity: `v.combine(View::empty()) == v`
//! - Associativity: `a.combine(b.combine(c)) == a.combine(b).combine(c)`
//!
//! ## Functor Laws (map)
//! - Identity: `v.map(|n| n) == v`
//! - Composition: `v.map(f).map(g) == v.map(|n| g(f(n)))`
//!
//! ## Contravariant Laws (contramap)
//! - Identity: `v.contramap(|d| d.clone()) == v`
//! - Composition: `v.contramap(f).contramap(g) == v.contramap(|e| f(&g(e)))`

#![cfg(all(feature = "view", feature = "html"))]

use monoview::html::Node;
use monoview::html::elements::{li, span, text};
use monoview::typeclass::{Monoid, Semigroup, Sum};
use monoview::view::{HtmlView, View};
use proptest::prelude::*;

// =============================================================================
// View families
// =============================================================================

/// A string view labelled by `prefix`.
fn labelled(prefix: String) -> View<i64, String> {
    View::new(move |number: &i64| format!("{prefix}{number};"))
}

/// A node view emitting `count` spans around the input.
fn spans(label: String, count: usize) -> HtmlView<i64> {
    View::new(move |number: &i64| {
        (0..count)
            .map(|index| span(vec![], vec![text(format!("{label}{index}:{number}"))]))
            .collect::<Vec<Node>>()
    })
}

/// A counting view scaled by `factor`.
fn scaled(factor: i64) -> View<i64, Sum<i64>> {
    View::new(move |number: &i64| Sum::new(number.wrapping_mul(factor)))
}

// =============================================================================
// Monoid Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_string_view_left_identity(prefix in "[a-z]{0,4}", input in any::<i64>()) {
        let view = labelled(prefix);
        let combined = View::empty().combine(view.clone());
        prop_assert_eq!(combined.run(&input), view.run(&input));
    }

    #[test]
    fn prop_string_view_right_identity(prefix in "[a-z]{0,4}", input in any::<i64>()) {
        let view = labelled(prefix);
        let combined = view.clone().combine(View::empty());
        prop_assert_eq!(combined.run(&input), view.run(&input));
    }

    #[test]
    fn prop_string_view_associativity(
        first in "[a-z]{0,4}",
        second in "[a-z]{0,4}",
        third in "[a-z]{0,4}",
        input in any::<i64>()
    ) {
        let (a, b, c) = (labelled(first), labelled(second), labelled(third));
        let left = a.clone().combine(b.clone().combine(c.clone()));
        let right = a.combine(b).combine(c);
        prop_assert_eq!(left.run(&input), right.run(&input));
    }

    #[test]
    fn prop_node_view_identities(label in "[a-z]{1,3}", count in 0usize..4, input in any::<i64>()) {
        let view = spans(label, count);
        let expected: Vec<Node> = view.run(&input);
        prop_assert_eq!(HtmlView::empty().combine(view.clone()).run(&input), expected.clone());
        prop_assert_eq!(view.combine(HtmlView::empty()).run(&input), expected);
    }

    #[test]
    fn prop_node_view_associativity(
        counts in (0usize..3, 0usize..3, 0usize..3),
        input in any::<i64>()
    ) {
        let a = spans("a".to_string(), counts.0);
        let b = spans("b".to_string(), counts.1);
        let c = spans("c".to_string(), counts.2);
        let left = a.clone().combine(b.clone().combine(c.clone()));
        let right = a.combine(b).combine(c);
        prop_assert_eq!(left.run(&input), right.run(&input));
    }

    #[test]
    fn prop_sum_view_laws(
        factors in (-10i64..10, -10i64..10, -10i64..10),
        input in -1000i64..1000
    ) {
        let (a, b, c) = (scaled(factors.0), scaled(factors.1), scaled(factors.2));
        prop_assert_eq!(View::empty().combine(a.clone()).run(&input), a.run(&input));
        prop_assert_eq!(a.clone().combine(View::empty()).run(&input), a.run(&input));
        let left = a.clone().combine(b.clone().combine(c.clone()));
        let right = a.combine(b).combine(c);
        prop_assert_eq!(left.run(&input), right.run(&input));
    }

    #[test]
    fn prop_combine_all_matches_fold(prefixes in prop::collection::vec("[a-z]{0,3}", 0..5), input in any::<i64>()) {
        let views: Vec<_> = prefixes.iter().cloned().map(labelled).collect();
        let expected: String = views.iter().map(|view| view.run(&input)).collect();
        prop_assert_eq!(View::combine_all(views).run(&input), expected);
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_map_identity(prefix in "[a-z]{0,4}", input in any::<i64>()) {
        let view = labelled(prefix);
        prop_assert_eq!(view.clone().map(|output| output).run(&input), view.run(&input));
    }

    #[test]
    fn prop_map_composition(prefix in "[a-z]{0,4}", input in any::<i64>()) {
        let length = |output: String| output.len();
        let double = |length: usize| length * 2;

        let view = labelled(prefix);
        let left = view.clone().map(length).map(double);
        let right = view.map(move |output| double(length(output)));
        prop_assert_eq!(left.run(&input), right.run(&input));
    }
}

// =============================================================================
// Contravariant Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_contramap_identity(prefix in "[a-z]{0,4}", input in any::<i64>()) {
        let view = labelled(prefix);
        prop_assert_eq!(
            view.clone().contramap(|number: &i64| *number).run(&input),
            view.run(&input)
        );
    }

    #[test]
    fn prop_contramap_composition(prefix in "[a-z]{0,4}", input in "[0-9]{1,6}") {
        let parse = |digits: &String| digits.parse::<i64>().unwrap_or_default();
        let widen = |number: &i64| number.wrapping_mul(3);

        let view = labelled(prefix);
        let left = view.clone().contramap(widen).contramap(parse);
        let right = view.contramap(move |digits: &String| widen(&parse(digits)));
        prop_assert_eq!(left.run(&input), right.run(&input));
    }

    #[test]
    fn prop_contramap_distributes_over_combine(first in "[a-z]{0,3}", second in "[a-z]{0,3}", input in any::<i32>()) {
        let widen = |number: &i32| i64::from(*number);
        let left = labelled(first.clone()).combine(labelled(second.clone())).contramap(widen);
        let right = labelled(first).contramap(widen).combine(labelled(second).contramap(widen));
        prop_assert_eq!(left.run(&input), right.run(&input));
    }
}

// =============================================================================
// Lifting
// =============================================================================

proptest! {
    #[test]
    fn prop_list_of_one_equals_run(label in "[a-z]{1,3}", input in any::<i64>()) {
        let view = spans(label, 2);
        prop_assert_eq!(view.clone().list().run(&vec![input]), view.run(&input));
    }

    #[test]
    fn prop_list_concatenates_items(items in prop::collection::vec(any::<i64>(), 0..6)) {
        let view = View::new(|number: &i64| li(vec![], vec![text(number.to_string())]))
            .map(|node| vec![node]);
        let expected: Vec<Node> = items.iter().flat_map(|item| view.run(item)).collect();
        prop_assert_eq!(view.list().run(&items), expected);
    }
}

#[test]
fn list_of_nothing_is_empty() {
    let view = spans("x".to_string(), 3).list();
    assert!(view.run(&Vec::new()).is_empty());
    assert!(Vec::<Node>::empty().is_empty_value());
}
