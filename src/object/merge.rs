//! `extend` and `defaults`.

use super::Object;

/// Copies every field of each source into `target` and returns `target`.
///
/// Sources are applied in order, so a later source overrides an earlier
/// one. The copy is shallow: values are cloned, not merged recursively.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::object::extend;
///
/// let mut target = BTreeMap::from([("a".to_string(), 1)]);
/// let first = BTreeMap::from([("b".to_string(), 2), ("a".to_string(), 10)]);
/// let second = BTreeMap::from([("b".to_string(), 20)]);
///
/// extend(&mut target, &[&first, &second]);
/// assert_eq!(target, BTreeMap::from([("a".to_string(), 10), ("b".to_string(), 20)]));
/// ```
pub fn extend<'target, O>(target: &'target mut O, sources: &[&O]) -> &'target mut O
where
    O: Object,
    O::Value: Clone,
{
    for source in sources {
        for (key, value) in source.fields() {
            target.set_field(key, value.clone());
        }
    }
    target
}

/// Fills the fields `target` lacks from `sources` and returns `target`.
///
/// A field already present in `target` is never overwritten. Among the
/// sources, the first one that supplies a field wins. For JSON objects a
/// `null` field counts as absent and gets filled.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::object::defaults;
///
/// let mut target = BTreeMap::from([("a".to_string(), 1)]);
/// let first = BTreeMap::from([("a".to_string(), 10), ("b".to_string(), 2)]);
/// let second = BTreeMap::from([("b".to_string(), 20), ("c".to_string(), 3)]);
///
/// defaults(&mut target, &[&first, &second]);
/// assert_eq!(
///     target,
///     BTreeMap::from([
///         ("a".to_string(), 1),
///         ("b".to_string(), 2),
///         ("c".to_string(), 3),
///     ])
/// );
/// ```
pub fn defaults<'target, O>(target: &'target mut O, sources: &[&O]) -> &'target mut O
where
    O: Object,
    O::Value: Clone,
{
    for source in sources {
        for (key, value) in source.fields() {
            if !target.is_present(key) {
                target.set_field(key, value.clone());
            }
        }
    }
    target
}
