#![cfg(feature = "set")]
//! Property-based tests for set-shaping operations.
//!
//! - uniq is idempotent and never grows its input
//! - intersection is a subset of every input
//! - difference and intersection with the same sequence partition the input
//! - flatten of a single-level list is the identity
//! - flatten undoes wrapping every element in its own list

use proptest::prelude::*;
use underbar::set::{Nested, difference, flatten, intersection, uniq, uniq_hashed, zip};

proptest! {
    #[test]
    fn prop_uniq_is_idempotent(items in prop::collection::vec(0..10_i32, 0..40)) {
        let once = uniq(&items);
        prop_assert_eq!(uniq(&once), once);
    }

    #[test]
    fn prop_uniq_has_no_duplicates_and_loses_nothing(
        items in prop::collection::vec(0..10_i32, 0..40),
    ) {
        let distinct = uniq(&items);
        prop_assert!(distinct.len() <= items.len());
        for (index, item) in distinct.iter().enumerate() {
            prop_assert!(!distinct[index + 1..].contains(item));
        }
        for item in &items {
            prop_assert!(distinct.contains(item));
        }
    }

    #[test]
    fn prop_uniq_hashed_matches_uniq(items in prop::collection::vec(any::<u8>(), 0..40)) {
        prop_assert_eq!(uniq_hashed(&items), uniq(&items));
    }

    #[test]
    fn prop_intersection_is_subset_of_every_input(
        left in prop::collection::vec(0..8_i32, 0..20),
        right in prop::collection::vec(0..8_i32, 0..20),
    ) {
        let shared = intersection(&[&left[..], &right[..]]);
        for item in &shared {
            prop_assert!(left.contains(item));
            prop_assert!(right.contains(item));
        }
    }

    #[test]
    fn prop_difference_and_intersection_cover_input(
        left in prop::collection::vec(0..8_i32, 0..20),
        right in prop::collection::vec(0..8_i32, 0..20),
    ) {
        let only_left = difference(&left, &[&right[..]]);
        let shared = intersection(&[&left[..], &right[..]]);
        for item in &left {
            prop_assert!(only_left.contains(item) != shared.contains(item));
        }
    }

    #[test]
    fn prop_flatten_of_flat_list_is_identity(items in prop::collection::vec(any::<i16>(), 0..30)) {
        let nested: Vec<Nested<i16>> = items.iter().copied().map(Nested::Item).collect();
        prop_assert_eq!(flatten(&nested), items);
    }

    #[test]
    fn prop_flatten_undoes_singleton_wrapping(items in prop::collection::vec(any::<i16>(), 0..30)) {
        let wrapped: Vec<Nested<i16>> = items.iter().map(|item| Nested::list_of([*item])).collect();
        prop_assert_eq!(flatten(&wrapped), items);
    }

    #[test]
    fn prop_zip_length_is_longest_input(
        left in prop::collection::vec(any::<u8>(), 0..20),
        right in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        prop_assert_eq!(zip(&[&left[..], &right[..]]).len(), left.len().max(right.len()));
    }
}
