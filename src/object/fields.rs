//! Field access over key/value mappings.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A mapping from string keys to values.
///
/// Implemented for `serde_json::Map` and `IndexMap` (insertion order),
/// `BTreeMap` (sorted order) and `HashMap` (unspecified order).
/// [`fields`](Object::fields) traverses in the mapping's own order.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use underbar::object::Object;
///
/// let mut person: IndexMap<String, u32> = IndexMap::new();
/// person.set_field("age", 42);
///
/// assert_eq!(person.get_field("age"), Some(&42));
/// assert!(person.is_present("age"));
/// assert!(!person.is_present("name"));
/// ```
pub trait Object {
    /// The type of the field values.
    type Value;

    /// Returns the value stored under `key`.
    fn get_field(&self, key: &str) -> Option<&Self::Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_field(&mut self, key: &str, value: Self::Value);

    /// Iterates over every field in traversal order.
    fn fields(&self) -> impl Iterator<Item = (&str, &Self::Value)>;

    /// Returns `true` if `key` holds a value that counts as present.
    ///
    /// By default any stored value is present. JSON objects also treat
    /// `null` as absent.
    fn is_present(&self, key: &str) -> bool {
        self.get_field(key).is_some()
    }
}

impl Object for Map<String, Value> {
    type Value = Value;

    fn get_field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn set_field(&mut self, key: &str, value: Value) {
        self.insert(key.to_owned(), value);
    }

    fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter().map(|(key, value)| (key.as_str(), value))
    }

    fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_null())
    }
}

impl<V, S: BuildHasher> Object for IndexMap<String, V, S> {
    type Value = V;

    fn get_field(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn set_field(&mut self, key: &str, value: V) {
        self.insert(key.to_owned(), value);
    }

    fn fields(&self) -> impl Iterator<Item = (&str, &V)> {
        self.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Object for BTreeMap<String, V> {
    type Value = V;

    fn get_field(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn set_field(&mut self, key: &str, value: V) {
        self.insert(key.to_owned(), value);
    }

    fn fields(&self) -> impl Iterator<Item = (&str, &V)> {
        self.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V, S: BuildHasher> Object for HashMap<String, V, S> {
    type Value = V;

    fn get_field(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn set_field(&mut self, key: &str, value: V) {
        self.insert(key.to_owned(), value);
    }

    fn fields(&self) -> impl Iterator<Item = (&str, &V)> {
        self.iter().map(|(key, value)| (key.as_str(), value))
    }
}
