//! `intersection` and `difference`.

/// Returns the elements present in every sequence.
///
/// Each shared element appears once, in the order it is first met in the
/// first sequence. No sequences at all gives an empty result.
///
/// # Examples
///
/// ```rust
/// use underbar::set::intersection;
///
/// assert_eq!(intersection(&[&["moe", "curly", "larry"], &["moe", "groucho"]]), vec!["moe"]);
/// assert_eq!(intersection(&[&[1, 1, 2], &[2, 1]]), vec![1, 2]);
/// assert!(intersection::<i32>(&[]).is_empty());
/// ```
pub fn intersection<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    let mut shared: Vec<T> = Vec::new();
    for item in *head {
        if !shared.contains(item) && rest.iter().all(|sequence| sequence.contains(item)) {
            shared.push(item.clone());
        }
    }
    shared
}

/// Returns the elements of `items` that appear in none of `others`.
///
/// Order and duplicates of `items` are preserved.
///
/// # Examples
///
/// ```rust
/// use underbar::set::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10]]), vec![1, 3, 4]);
/// assert_eq!(difference(&[1, 2, 3, 4], &[&[1], &[4]]), vec![2, 3]);
/// assert_eq!(difference(&[1, 1, 2], &[]), vec![1, 1, 2]);
/// ```
pub fn difference<T>(items: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    items
        .iter()
        .filter(|item| !others.iter().any(|other| other.contains(*item)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_intersection_of_single_sequence_dedups_it() {
        assert_eq!(intersection(&[&[3, 3, 1]]), vec![3, 1]);
    }

    #[rstest]
    fn test_intersection_with_empty_member_is_empty() {
        let empty: &[i32] = &[];
        assert!(intersection(&[&[1, 2], empty]).is_empty());
    }

    #[rstest]
    fn test_difference_without_overlap_is_identity() {
        assert_eq!(difference(&["a", "b"], &[&["c"]]), vec!["a", "b"]);
    }
}
