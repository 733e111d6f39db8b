//! Stable sorting.

use std::cmp::Ordering;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::value::{compare, kind};

static MISSING: Value = Value::Null;

/// Returns a copy of `items` sorted ascending by `criterion`.
///
/// The sort is stable: elements with equal keys keep their relative order.
///
/// # Examples
///
/// ```rust
/// use underbar::ordering::sort_by;
///
/// let people = [("curly", 60), ("moe", 40), ("larry", 50)];
/// assert_eq!(
///     sort_by(&people, |(_, age)| *age),
///     vec![("moe", 40), ("larry", 50), ("curly", 60)]
/// );
/// ```
pub fn sort_by<T, K, F>(items: &[T], criterion: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut sorted = items.to_vec();
    sorted.sort_by_key(criterion);
    sorted
}

/// Returns a copy of `items` sorted by `compare`.
///
/// The sort is stable, so this also serves keys that are only
/// [`PartialOrd`], such as floats.
///
/// # Examples
///
/// ```rust
/// use underbar::ordering::sort_with;
///
/// let readings: [f64; 3] = [2.5, -1.0, 0.25];
/// assert_eq!(sort_with(&readings, |left, right| left.total_cmp(right)), vec![-1.0, 0.25, 2.5]);
/// ```
pub fn sort_with<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(compare);
    sorted
}

/// Returns a copy of JSON objects sorted ascending by their `field`.
///
/// Field values compare by [`value::compare`](crate::value::compare); a
/// missing field sorts as `null`. The sort is stable.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if an element is not a JSON object.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::ordering::sort_by_field;
///
/// let items = [
///     json!({"k": 1, "id": "a"}),
///     json!({"k": 1, "id": "b"}),
///     json!({"k": 0, "id": "c"}),
/// ];
/// let sorted = sort_by_field(&items, "k").unwrap();
/// let ids: Vec<&str> = sorted.iter().map(|item| item["id"].as_str().unwrap()).collect();
/// assert_eq!(ids, vec!["c", "a", "b"]);
/// ```
pub fn sort_by_field(items: &[Value], field: &str) -> Result<Vec<Value>> {
    if let Some(other) = items.iter().find(|item| !item.is_object()) {
        return Err(Error::type_mismatch("sort_by_field", "object", kind(other)));
    }
    Ok(sort_with(items, |left, right| {
        compare(field_value(left, field), field_value(right, field))
    }))
}

fn field_value<'a>(item: &'a Value, field: &str) -> &'a Value {
    item.get(field).unwrap_or(&MISSING)
}
