//! Field and method access by name.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::object::Object;
use crate::value::{compare, kind};

/// Returns the `key` field of every object, `None` where it is missing.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::iteration::pluck;
///
/// let people = vec![
///     BTreeMap::from([("age".to_string(), 31)]),
///     BTreeMap::from([("name".to_string(), 0)]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(31), None]);
/// ```
pub fn pluck<O>(items: &[O], key: &str) -> Vec<Option<O::Value>>
where
    O: Object,
    O::Value: Clone,
{
    items
        .iter()
        .map(|item| item.get_field(key).cloned())
        .collect()
}

/// Returns the `key` field of every JSON object.
///
/// A missing field yields `null`.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if an element is not a JSON object.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::iteration::pluck_values;
///
/// let people = [json!({"name": "moe", "age": 30}), json!({"name": "curly"})];
/// assert_eq!(pluck_values(&people, "age").unwrap(), vec![json!(30), json!(null)]);
///
/// assert!(pluck_values(&[json!(1)], "age").is_err());
/// ```
pub fn pluck_values(items: &[Value], key: &str) -> Result<Vec<Value>> {
    items
        .iter()
        .map(|item| match item {
            Value::Object(object) => Ok(object.get(key).cloned().unwrap_or(Value::Null)),
            other => Err(Error::type_mismatch("pluck_values", "object", kind(other))),
        })
        .collect()
}

/// A value whose methods can be called by name.
///
/// # Examples
///
/// ```rust
/// use serde_json::{json, Value};
/// use underbar::Result;
/// use underbar::iteration::{invoke, Invoke};
///
/// struct Counter(i64);
///
/// impl Invoke for Counter {
///     type Output = i64;
///
///     fn invoke(&self, method: &str, args: &[Value]) -> Result<i64> {
///         match method {
///             "add" => Ok(self.0 + args.first().and_then(Value::as_i64).unwrap_or(0)),
///             other => Err(underbar::Error::type_mismatch("invoke", "add", other)),
///         }
///     }
/// }
///
/// let counters = [Counter(1), Counter(5)];
/// assert_eq!(invoke(&counters, "add", &[json!(10)]).unwrap(), vec![11, 15]);
/// ```
pub trait Invoke {
    /// The result type of a method call.
    type Output;

    /// Calls the method named `method` with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value has no such method or the
    /// arguments do not fit it.
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Self::Output>;
}

/// Methods available on JSON values.
///
/// | method         | receiver              | result                                  |
/// |----------------|-----------------------|-----------------------------------------|
/// | `sort`         | array                 | sorted copy                             |
/// | `reverse`      | array, string         | reversed copy                           |
/// | `len`          | array, string, object | element, character or field count       |
/// | `join`         | array                 | elements joined by `args[0]` or `","`   |
/// | `keys`         | object                | field names                             |
/// | `values`       | object                | field values                            |
/// | `to_uppercase` | string                | upper-cased copy                        |
/// | `to_lowercase` | string                | lower-cased copy                        |
/// | `trim`         | string                | trimmed copy                            |
/// | `contains`     | array, string, object | whether `args[0]` is an element, substring or key |
impl Invoke for Value {
    type Output = Self;

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Self> {
        match (method, self) {
            ("sort", Self::Array(items)) => {
                let mut sorted = items.clone();
                sorted.sort_by(compare);
                Ok(Self::Array(sorted))
            }
            ("reverse", Self::Array(items)) => {
                Ok(Self::Array(items.iter().rev().cloned().collect()))
            }
            ("reverse", Self::String(text)) => Ok(Self::String(text.chars().rev().collect())),
            ("len", Self::Array(items)) => Ok(Self::from(items.len())),
            ("len", Self::String(text)) => Ok(Self::from(text.chars().count())),
            ("len", Self::Object(object)) => Ok(Self::from(object.len())),
            ("join", Self::Array(items)) => {
                let separator = match args.first() {
                    None => ",",
                    Some(Self::String(separator)) => separator.as_str(),
                    Some(other) => {
                        return Err(Error::type_mismatch(
                            "invoke",
                            "string separator",
                            kind(other),
                        ));
                    }
                };
                let joined = items
                    .iter()
                    .map(|item| match item {
                        Self::Null => String::new(),
                        Self::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(separator);
                Ok(Self::String(joined))
            }
            ("keys", Self::Object(object)) => {
                Ok(Self::Array(object.keys().cloned().map(Self::String).collect()))
            }
            ("values", Self::Object(object)) => Ok(Self::Array(object.values().cloned().collect())),
            ("to_uppercase", Self::String(text)) => Ok(Self::String(text.to_uppercase())),
            ("to_lowercase", Self::String(text)) => Ok(Self::String(text.to_lowercase())),
            ("trim", Self::String(text)) => Ok(Self::String(text.trim().to_owned())),
            ("contains", receiver) => {
                let needle = args
                    .first()
                    .ok_or_else(|| Error::type_mismatch("invoke", "one argument", "none"))?;
                match (receiver, needle) {
                    (Self::Array(items), needle) => Ok(Self::Bool(items.contains(needle))),
                    (Self::String(text), Self::String(needle)) => {
                        Ok(Self::Bool(text.contains(needle.as_str())))
                    }
                    (Self::Object(object), Self::String(needle)) => {
                        Ok(Self::Bool(object.contains_key(needle)))
                    }
                    (Self::String(_) | Self::Object(_), other) => {
                        Err(Error::type_mismatch("invoke", "string argument", kind(other)))
                    }
                    (other, _) => Err(Error::type_mismatch(
                        "invoke",
                        "value with method `contains`",
                        kind(other),
                    )),
                }
            }
            (method, other) => Err(Error::type_mismatch(
                "invoke",
                format!("value with method `{method}`"),
                kind(other),
            )),
        }
    }
}

/// Calls the method named `method` with `args` on every element.
///
/// # Errors
///
/// Returns the first error raised by an element, typically
/// [`Error::TypeMismatch`] when it lacks the method.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::iteration::invoke;
///
/// let lists = [json!([5, 1, 7]), json!([3, 2, 1])];
/// assert_eq!(
///     invoke(&lists, "sort", &[]).unwrap(),
///     vec![json!([1, 5, 7]), json!([1, 2, 3])]
/// );
///
/// assert!(invoke(&[json!(1)], "sort", &[]).is_err());
/// ```
pub fn invoke<T: Invoke>(items: &[T], method: &str, args: &[Value]) -> Result<Vec<T::Output>> {
    items.iter().map(|item| item.invoke(method, args)).collect()
}

/// Calls `function(element, args)` on every element.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::invoke_with;
///
/// let words = ["dog", "cat"];
/// let shouted = invoke_with(&words, |word, suffix: &str| format!("{word}{suffix}"), "!");
/// assert_eq!(shouted, vec!["dog!", "cat!"]);
/// ```
pub fn invoke_with<T, A, R, F>(items: &[T], mut function: F, args: &A) -> Vec<R>
where
    A: ?Sized,
    F: FnMut(&T, &A) -> R,
{
    items.iter().map(|item| function(item, args)).collect()
}
