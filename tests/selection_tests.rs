#![cfg(feature = "selection")]
//! Unit tests for positional selection.
//!
//! Tests cover:
//! - first / first_n and last / last_n, including clipping
//! - index_of with value equality and index_of_by with reference identity

use rstest::rstest;
use underbar::selection::{first, first_n, index_of, index_of_by, last, last_n};

// =============================================================================
// first / last
// =============================================================================

#[rstest]
fn first_returns_leading_element() {
    assert_eq!(first(&[1, 2, 3]), Some(&1));
}

#[rstest]
fn first_of_empty_is_none() {
    let empty: [i32; 0] = [];
    assert_eq!(first(&empty), None);
    assert_eq!(last(&empty), None);
}

#[rstest]
fn first_n_returns_leading_elements() {
    assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
}

#[rstest]
fn first_n_zero_is_empty() {
    assert!(first_n(&[1, 2, 3], 0).is_empty());
}

#[rstest]
fn first_n_beyond_length_returns_everything() {
    assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
}

#[rstest]
fn last_returns_trailing_element() {
    assert_eq!(last(&[1, 2, 3]), Some(&3));
}

#[rstest]
fn last_n_returns_trailing_elements() {
    assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
}

#[rstest]
fn last_n_beyond_length_returns_whole_sequence() {
    assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
}

#[rstest]
fn first_n_does_not_alias_input() {
    let source = vec![String::from("a"), String::from("b")];
    let mut copy = first_n(&source, 1);
    copy[0].push('!');
    assert_eq!(source[0], "a");
}

// =============================================================================
// index_of
// =============================================================================

#[rstest]
#[case(&[10, 20, 30], 30, Some(2))]
#[case(&[10, 20, 30], 40, None)]
#[case(&[10, 20, 20], 20, Some(1))]
#[case(&[], 1, None)]
fn index_of_finds_first_equal_element(
    #[case] items: &[i32],
    #[case] target: i32,
    #[case] expected: Option<usize>,
) {
    assert_eq!(index_of(items, &target), expected);
}

#[rstest]
fn index_of_by_reference_identity_distinguishes_equal_values() {
    let items = vec![vec![1], vec![1]];
    let second = &items[1];

    assert_eq!(index_of(&items, second), Some(0));
    assert_eq!(index_of_by(&items, |item| std::ptr::eq(item, second)), Some(1));
}
