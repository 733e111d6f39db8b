//! Selection by position.

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::selection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Returns a copy of the leading `count` elements.
///
/// A `count` larger than the sequence returns the whole sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::selection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 0), Vec::<i32>::new());
/// assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn first_n<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    items[..count.min(items.len())].to_vec()
}

/// Returns the last element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::selection::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Returns a copy of the trailing `count` elements.
///
/// A `count` larger than the sequence returns the whole sequence unchanged.
///
/// # Examples
///
/// ```rust
/// use underbar::selection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn last_n<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    items[items.len().saturating_sub(count)..].to_vec()
}

/// Returns the position of the first element equal to `target`.
///
/// Equality is [`PartialEq`]. `None` plays the role of the classic `-1`.
///
/// # Examples
///
/// ```rust
/// use underbar::selection::index_of;
///
/// assert_eq!(index_of(&["a", "b", "a"], &"a"), Some(0));
/// assert_eq!(index_of(&["a", "b"], &"z"), None);
/// ```
pub fn index_of<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    index_of_by(items, |item| item == target)
}

/// Returns the position of the first element satisfying `predicate`.
///
/// Pass [`std::ptr::eq`] or `Rc::ptr_eq` through the predicate when
/// reference identity is wanted instead of value equality.
///
/// # Examples
///
/// ```rust
/// use underbar::selection::index_of_by;
///
/// let words = ["apple", "banana", "cherry"];
/// assert_eq!(index_of_by(&words, |word| word.starts_with('b')), Some(1));
///
/// let needle = &words[2];
/// assert_eq!(index_of_by(&words, |word| std::ptr::eq(word, needle)), Some(2));
/// ```
pub fn index_of_by<T, P>(items: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    items.iter().position(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![10])]
    #[case(3, vec![10, 20, 30])]
    #[case(4, vec![10, 20, 30])]
    fn test_first_n_clips(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(first_n(&[10, 20, 30], count), expected);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![30])]
    #[case(3, vec![10, 20, 30])]
    #[case(7, vec![10, 20, 30])]
    fn test_last_n_clips(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(last_n(&[10, 20, 30], count), expected);
    }

    #[rstest]
    fn test_first_n_on_empty() {
        assert!(first_n::<i32>(&[], 3).is_empty());
        assert!(last_n::<i32>(&[], 3).is_empty());
    }

    #[rstest]
    fn test_index_of_returns_first_match() {
        assert_eq!(index_of(&[1, 2, 2, 3], &2), Some(1));
    }
}
