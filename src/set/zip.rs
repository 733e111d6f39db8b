//! Position-wise grouping of sequences.

/// Groups the elements of `sequences` by position.
///
/// Row `i` holds the `i`th element of every sequence. The result is as long
/// as the longest sequence; shorter sequences contribute `None` (the absent
/// marker) once they run out.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::set::zip;
///
/// let letters = [json!("a"), json!("b"), json!("c"), json!("d")];
/// let numbers = [json!(1), json!(2), json!(3)];
///
/// assert_eq!(
///     zip(&[&letters, &numbers]),
///     vec![
///         vec![Some(json!("a")), Some(json!(1))],
///         vec![Some(json!("b")), Some(json!(2))],
///         vec![Some(json!("c")), Some(json!(3))],
///         vec![Some(json!("d")), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = sequences
        .iter()
        .map(|sequence| sequence.len())
        .max()
        .unwrap_or(0);
    (0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.get(index).cloned())
                .collect()
        })
        .collect()
}

/// Pairs two differently typed sequences by position.
///
/// # Examples
///
/// ```rust
/// use underbar::set::zip2;
///
/// assert_eq!(
///     zip2(&['a', 'b'], &[1]),
///     vec![(Some('a'), Some(1)), (Some('b'), None)]
/// );
/// ```
pub fn zip2<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let longest = left.len().max(right.len());
    (0..longest)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}
