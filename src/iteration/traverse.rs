//! `each`, `map`, `filter`, `reject`, `reduce` and `fold`.

use super::{Collection, Key};
use crate::error::{Error, Result};

/// Calls `iteratee(value, key, collection)` once per entry.
///
/// Sequences are visited in index order, mappings in their traversal
/// order. The point of `each` is the side effect of `iteratee`; nothing is
/// returned.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use underbar::iteration::each;
///
/// let mut seen = Vec::new();
/// each(&[10, 20], |value, key, all| seen.push((*value, key.to_string(), all.len())));
/// assert_eq!(seen, vec![(10, "0".to_string(), 2), (20, "1".to_string(), 2)]);
///
/// let ages = IndexMap::from([("ann".to_string(), 31), ("bob".to_string(), 27)]);
/// let mut names = Vec::new();
/// each(&ages, |_, key, _| names.push(key.to_string()));
/// assert_eq!(names, vec!["ann", "bob"]);
/// ```
pub fn each<'c, C, F>(collection: &'c C, mut iteratee: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, Key<'c>, &'c C),
{
    for (key, value) in collection.entries() {
        iteratee(value, key, collection);
    }
}

/// Returns the results of applying `transform` to each element, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::map;
///
/// assert_eq!(map(&["a", "bb"], |word| word.len()), vec![1, 2]);
/// ```
pub fn map<T, U, F>(items: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(transform).collect()
}

/// Returns the elements that satisfy `predicate`, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0), vec![2, 4, 6]);
/// ```
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items
        .iter()
        .filter(|item| predicate(*item))
        .cloned()
        .collect()
}

/// Returns the elements that do not satisfy `predicate`, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0), vec![1, 3, 5]);
/// ```
pub fn reject<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(items, |item| !predicate(item))
}

/// Folds the collection left to right into a single value.
///
/// With `Some(initial)` the accumulator starts at `initial`. With `None` the
/// first value seeds the accumulator and folding starts from the second.
///
/// # Errors
///
/// Returns [`Error::InvalidOperation`] when `collection` is empty and no
/// initial value is given. There is no implicit zero.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, value| total + value, None), Ok(6));
/// assert_eq!(reduce(&[1, 2, 3], |total, value| total * value, Some(10)), Ok(60));
/// assert!(reduce(&[] as &[i32], |total, value| total + value, None).is_err());
/// ```
pub fn reduce<C, F>(collection: &C, reducer: F, initial: Option<C::Item>) -> Result<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let mut values = collection.values();
    let seed = match initial {
        Some(initial) => initial,
        None => values.next().cloned().ok_or_else(|| {
            Error::invalid_operation("reduce", "empty collection with no initial value")
        })?,
    };
    Ok(values.fold(seed, reducer))
}

/// Folds the collection left to right, starting from `initial`.
///
/// Unlike [`reduce`], the accumulator may have a different type from the
/// values, and the operation is total.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::fold;
///
/// let total_length = fold(&["ab", "cde"], 0, |total, word| total + word.len());
/// assert_eq!(total_length, 5);
/// ```
pub fn fold<C, A, F>(collection: &C, initial: A, folder: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection.values().fold(initial, folder)
}
