//! Arbitrarily nested sequences and their flattening.

use serde_json::Value;

/// A value or a list of further nested values.
///
/// # Examples
///
/// ```rust
/// use underbar::set::{flatten, Nested};
///
/// let nested = vec![
///     Nested::Item(1),
///     Nested::List(vec![Nested::Item(2), Nested::List(vec![Nested::Item(3)])]),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A single element.
    Item(T),
    /// A nested sequence.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps every value of `values` as an [`Nested::Item`] inside one list.
    pub fn list_of(values: impl IntoIterator<Item = T>) -> Self {
        Self::List(values.into_iter().map(Self::Item).collect())
    }

    /// Returns the maximum list depth. A bare item has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Item(_) => 0,
            Self::List(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::List(iterator.into_iter().collect())
    }
}

/// Flattens nested sequences depth-first, left to right.
///
/// Runs with an explicit stack, so deep nesting does not grow the call
/// stack.
///
/// # Examples
///
/// ```rust
/// use underbar::set::{flatten, Nested};
///
/// let nested = vec![
///     Nested::Item(1),
///     Nested::list_of([2]),
///     Nested::List(vec![Nested::list_of([3]), Nested::list_of([4, 5])]),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    let mut stack = vec![items.iter()];
    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Nested::Item(value)) => flat.push(value.clone()),
            Some(Nested::List(children)) => stack.push(children.iter()),
            None => {
                stack.pop();
            }
        }
    }
    flat
}

/// Flattens nested JSON arrays depth-first, left to right.
///
/// A value that is not an array flattens to itself.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::set::flatten_values;
///
/// let nested = json!([1, [2], [3, [[[4]]]], []]);
/// assert_eq!(flatten_values(&nested), vec![json!(1), json!(2), json!(3), json!(4)]);
/// assert_eq!(flatten_values(&json!("x")), vec![json!("x")]);
/// ```
pub fn flatten_values(value: &Value) -> Vec<Value> {
    let Value::Array(items) = value else {
        return vec![value.clone()];
    };
    let mut flat = Vec::new();
    let mut stack = vec![items.iter()];
    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Value::Array(children)) => stack.push(children.iter()),
            Some(other) => flat.push(other.clone()),
            None => {
                stack.pop();
            }
        }
    }
    flat
}
