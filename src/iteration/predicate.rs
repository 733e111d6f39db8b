//! Truth tests over whole sequences.

use serde_json::Value;

use super::Collection;

/// A value that can be tested for truthiness.
///
/// Falsy values are `false`, numeric zero, `NaN`, the empty string, `None`
/// and JSON `null`. Everything else is truthy, including empty JSON arrays
/// and objects.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::iteration::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some("x").is_truthy());
/// assert!(!json!(null).is_truthy());
/// assert!(json!([]).is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value is truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(number) => number.as_f64().is_some_and(|value| value.is_truthy()),
            Self::String(text) => text.is_truthy(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

/// Returns `true` if every element satisfies `predicate`.
///
/// An empty sequence returns `true`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::every;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 3], |value| value % 2 == 0));
/// assert!(every(&[] as &[i32], |_| false));
/// ```
pub fn every<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

/// [`every`] with no predicate.
///
/// A missing predicate is the "always true" test, so the result is `true`
/// for every input, the empty sequence included.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::every_default;
///
/// assert!(every_default(&[0, 0]));
/// assert!(every_default::<i32>(&[]));
/// ```
#[inline]
pub const fn every_default<T>(_items: &[T]) -> bool {
    true
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// An empty sequence returns `false`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::some;
///
/// assert!(some(&[1, 2, 3], |value| *value > 2));
/// assert!(!some(&[] as &[i32], |_| true));
/// ```
pub fn some<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

/// [`some`] with no predicate: `true` if at least one element is truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::some_default;
///
/// assert!(some_default(&[0, 0, 7]));
/// assert!(!some_default(&["", ""]));
/// assert!(!some_default::<bool>(&[]));
/// ```
pub fn some_default<T: Truthy>(items: &[T]) -> bool {
    items.iter().any(Truthy::is_truthy)
}

/// Returns `true` if some value of `collection` equals `target`.
///
/// Sequences are searched by element, mappings by value.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::iteration::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &9));
///
/// let ages = BTreeMap::from([("ann".to_string(), 31)]);
/// assert!(contains(&ages, &31));
/// assert!(!contains(&ages, &99));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    collection.values().any(|value| value == target)
}
