#![cfg(feature = "ordering")]
//! Unit tests for sorting and shuffling.
//!
//! Tests cover:
//! - sort_by with computed keys and stability
//! - sort_by_field on JSON objects
//! - shuffle returns a permutation and leaves the input untouched
//! - shuffle_with reproducibility with a seeded generator

use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use serde_json::json;
use underbar::Error;
use underbar::ordering::{shuffle, shuffle_with, sort_by, sort_by_field, sort_with};

// =============================================================================
// sort_by
// =============================================================================

#[rstest]
fn sort_by_computed_key() {
    let words = ["banana", "kiwi", "apple", "fig"];
    assert_eq!(
        sort_by(&words, |word| word.len()),
        vec!["fig", "kiwi", "apple", "banana"]
    );
}

#[rstest]
fn sort_by_is_stable_for_equal_keys() {
    let records = [(1, "a"), (1, "b"), (0, "c")];
    assert_eq!(
        sort_by(&records, |(key, _)| *key),
        vec![(0, "c"), (1, "a"), (1, "b")]
    );
}

#[rstest]
fn sort_by_reverse_key() {
    let numbers = [1, 5, 3];
    assert_eq!(
        sort_by(&numbers, |value| std::cmp::Reverse(*value)),
        vec![5, 3, 1]
    );
}

#[rstest]
fn sort_with_floats() {
    let readings = [0.5, f64::NEG_INFINITY, -2.0];
    assert_eq!(
        sort_with(&readings, |left, right| left.total_cmp(right)),
        vec![f64::NEG_INFINITY, -2.0, 0.5]
    );
}

// =============================================================================
// sort_by_field
// =============================================================================

#[rstest]
fn sort_by_field_is_stable() {
    let items = [
        json!({"k": 1, "id": "a"}),
        json!({"k": 1, "id": "b"}),
        json!({"k": 0, "id": "c"}),
    ];

    let ids: Vec<String> = sort_by_field(&items, "k")
        .unwrap()
        .iter()
        .map(|item| item["id"].to_string())
        .collect();

    assert_eq!(ids, vec!["\"c\"", "\"a\"", "\"b\""]);
}

#[rstest]
fn sort_by_field_orders_mixed_kinds() {
    let items = [
        json!({"v": "text"}),
        json!({"v": 2}),
        json!({"v": true}),
        json!({"v": null}),
    ];
    let sorted = sort_by_field(&items, "v").unwrap();
    assert_eq!(
        sorted,
        vec![
            json!({"v": null}),
            json!({"v": true}),
            json!({"v": 2}),
            json!({"v": "text"}),
        ]
    );
}

#[rstest]
fn sort_by_field_orders_large_integers_exactly() {
    let items = [
        json!({"k": u64::MAX}),
        json!({"k": 9_223_372_036_854_775_808.0_f64}),
        json!({"k": u64::MAX - 1}),
        json!({"k": i64::MAX}),
    ];

    let sorted = sort_by_field(&items, "k").unwrap();

    assert_eq!(
        sorted,
        vec![
            json!({"k": i64::MAX}),
            json!({"k": 9_223_372_036_854_775_808.0_f64}),
            json!({"k": u64::MAX - 1}),
            json!({"k": u64::MAX}),
        ]
    );
}

#[rstest]
fn sort_by_field_rejects_arrays() {
    let error = sort_by_field(&[json!([1])], "v").unwrap_err();
    assert!(matches!(error, Error::TypeMismatch { operation: "sort_by_field", .. }));
}

// =============================================================================
// shuffle
// =============================================================================

#[rstest]
fn shuffle_is_a_permutation() {
    let items: Vec<u32> = (0..100).collect();
    let mut shuffled = shuffle(&items);
    assert_eq!(shuffled.len(), items.len());
    shuffled.sort_unstable();
    assert_eq!(shuffled, items);
}

#[rstest]
fn shuffle_leaves_input_untouched() {
    let items = vec![1, 2, 3, 4, 5];
    let _ = shuffle(&items);
    assert_eq!(items, vec![1, 2, 3, 4, 5]);
}

#[rstest]
#[case(vec![])]
#[case(vec![7])]
fn shuffle_of_short_input(#[case] items: Vec<i32>) {
    assert_eq!(shuffle(&items), items);
}

#[rstest]
fn shuffle_with_same_seed_is_reproducible() {
    let items: Vec<u8> = (0..20).collect();
    let first = shuffle_with(&items, &mut StdRng::seed_from_u64(42));
    let second = shuffle_with(&items, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}

#[rstest]
fn shuffle_with_reaches_every_position() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut first_positions = [false; 4];
    for _ in 0..200 {
        let shuffled = shuffle_with(&[0_usize, 1, 2, 3], &mut rng);
        first_positions[shuffled[0]] = true;
    }
    assert!(first_positions.iter().all(|seen| *seen));
}
