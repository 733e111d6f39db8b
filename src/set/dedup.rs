//! Order-preserving deduplication.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Returns each distinct element once, in order of first occurrence.
///
/// Works for any [`PartialEq`] element, including JSON values. Each element
/// is compared against the distinct elements kept so far, so the cost is
/// quadratic in the worst case; prefer [`uniq_hashed`] for hashable
/// elements.
///
/// # Examples
///
/// ```rust
/// use underbar::set::uniq;
///
/// assert_eq!(uniq(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
/// assert_eq!(uniq(&[0.5, 0.5, 1.5]), vec![0.5, 1.5]);
/// ```
pub fn uniq<T>(items: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut distinct: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !distinct.contains(item) {
            distinct.push(item.clone());
        }
    }
    distinct
}

/// [`uniq`] for hashable elements, using a hash set of seen elements.
///
/// # Examples
///
/// ```rust
/// use underbar::set::uniq_hashed;
///
/// assert_eq!(uniq_hashed(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn uniq_hashed<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: FxHashSet<&T> = FxHashSet::default();
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_uniq_keeps_first_occurrence_order() {
        assert_eq!(uniq(&[5, 4, 5, 3, 4, 1]), vec![5, 4, 3, 1]);
    }

    #[rstest]
    fn test_uniq_on_empty() {
        assert!(uniq::<i32>(&[]).is_empty());
        assert!(uniq_hashed::<i32>(&[]).is_empty());
    }

    #[rstest]
    fn test_both_strategies_agree() {
        let words = ["x", "y", "x", "z", "y", "x"];
        assert_eq!(uniq(&words), uniq_hashed(&words));
    }
}
