//! A common view over sequences and mappings.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// The position of an entry inside a [`Collection`].
///
/// Sequences report the element index, mappings report the field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Position inside an ordered sequence.
    Index(usize),
    /// Field name inside a mapping.
    Name(&'a str),
}

impl Key<'_> {
    /// Returns the index if this is a [`Key::Index`].
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the field name if this is a [`Key::Name`].
    #[inline]
    pub const fn name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(*name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// Something that can be traversed entry by entry.
///
/// Sequences (`[T]`, `[T; N]`, `Vec<T>`) yield their elements in order with a
/// [`Key::Index`]. Mappings yield their values in traversal order with a
/// [`Key::Name`]. A JSON value is a sequence when it is an array, a mapping
/// when it is an object, and empty otherwise.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::{Collection, Key};
///
/// let letters = vec!['a', 'b'];
/// let entries: Vec<_> = letters.entries().collect();
/// assert_eq!(entries, vec![(Key::Index(0), &'a'), (Key::Index(1), &'b')]);
/// ```
pub trait Collection {
    /// The type of the stored values.
    type Item;

    /// Iterates over `(key, value)` pairs in traversal order.
    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &Self::Item)>;

    /// Iterates over the values in traversal order.
    fn values(&self) -> impl Iterator<Item = &Self::Item> {
        self.entries().map(|(_, value)| value)
    }
}

impl<T> Collection for [T] {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| (Key::Index(index), value))
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.as_slice().entries()
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.as_slice().entries()
    }
}

impl<V, S: BuildHasher> Collection for IndexMap<String, V, S> {
    type Item = V;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &V)> {
        self.iter().map(|(key, value)| (Key::Name(key), value))
    }
}

impl<V> Collection for BTreeMap<String, V> {
    type Item = V;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &V)> {
        self.iter().map(|(key, value)| (Key::Name(key), value))
    }
}

impl<V, S: BuildHasher> Collection for HashMap<String, V, S> {
    type Item = V;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &V)> {
        self.iter().map(|(key, value)| (Key::Name(key), value))
    }
}

impl Collection for Map<String, Value> {
    type Item = Value;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &Value)> {
        self.iter().map(|(key, value)| (Key::Name(key), value))
    }
}

impl Collection for Value {
    type Item = Self;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &Self)> {
        let (array, object) = match self {
            Self::Array(array) => (Some(array), None),
            Self::Object(object) => (None, Some(object)),
            _ => (None, None),
        };
        array
            .into_iter()
            .flat_map(|array| array.entries())
            .chain(object.into_iter().flat_map(|object| object.entries()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_json_array_yields_indices() {
        let value = json!([true, false]);
        let keys: Vec<Key<'_>> = value.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![Key::Index(0), Key::Index(1)]);
    }

    #[rstest]
    fn test_json_object_yields_names_in_insertion_order() {
        let value = json!({"zeta": 1, "alpha": 2});
        let keys: Vec<String> = value.entries().map(|(key, _)| key.to_string()).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(3))]
    #[case(json!("text"))]
    fn test_json_scalar_is_empty(#[case] value: Value) {
        assert_eq!(value.entries().count(), 0);
    }

    #[rstest]
    fn test_key_accessors() {
        assert_eq!(Key::Index(3).index(), Some(3));
        assert_eq!(Key::Index(3).name(), None);
        assert_eq!(Key::Name("a").name(), Some("a"));
        assert_eq!(Key::Name("a").index(), None);
    }
}
