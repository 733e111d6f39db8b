//! Traversal and transformation primitives.
//!
//! Sequence-only operations take a slice. Operations that also accept a
//! key/value mapping ([`each`], [`contains`], [`reduce`], [`fold`]) take any
//! [`Collection`].
//!
//! - [`each`], [`map`], [`filter`], [`reject`]
//! - [`reduce`], [`fold`]
//! - [`every`], [`some`] and their missing-predicate forms
//!   [`every_default`], [`some_default`]
//! - [`contains`]
//! - [`pluck`], [`pluck_values`], [`invoke`], [`invoke_with`]
//!
//! # Examples
//!
//! ```rust
//! use underbar::iteration::{contains, every, map, reduce, reject};
//!
//! let numbers = [1, 2, 3, 4, 5];
//!
//! assert_eq!(map(&numbers, |value| value * 10), vec![10, 20, 30, 40, 50]);
//! assert_eq!(reject(&numbers, |value| value % 2 == 0), vec![1, 3, 5]);
//! assert!(every(&numbers, |value| *value > 0));
//! assert!(contains(&numbers, &3));
//! assert_eq!(reduce(&numbers, |total, value| total + value, Some(10)), Ok(25));
//! ```

mod collection;
mod dynamic;
mod predicate;
mod traverse;

pub use collection::{Collection, Key};
pub use dynamic::{Invoke, invoke, invoke_with, pluck, pluck_values};
pub use predicate::{Truthy, contains, every, every_default, some, some_default};
pub use traverse::{each, filter, fold, map, reduce, reject};
