//! # underbar
//!
//! A utility belt of generic collection and function helpers.
//!
//! ## Overview
//!
//! Every helper is a standalone function (or a small wrapper type) with no
//! dependency on the others. Composition is left to the caller.
//!
//! - **Selection**: `first`, `last`, `index_of`
//! - **Iteration**: `each`, `map`, `filter`, `reject`, `reduce`, `every`,
//!   `some`, `contains`, `pluck`, `invoke`
//! - **Set shaping**: `uniq`, `intersection`, `difference`, `flatten`, `zip`
//! - **Object merging**: `extend`, `defaults`
//! - **Function combinators**: `once`, `memoize`, `delay`
//! - **Ordering**: `sort_by`, `shuffle`
//!
//! Sequences are borrowed as slices and never mutated; operations that
//! produce a sequence return a fresh `Vec`.
//!
//! ## Feature Flags
//!
//! - `selection`, `iteration`, `set`, `object`, `function`, `ordering`:
//!   one flag per group
//! - `async`: `delay` and the tokio-backed scheduler
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let evens = filter(&[1, 2, 3, 4], |value| value % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let sum = reduce(&evens, |total, value| total + value, None).unwrap();
//! assert_eq!(sum, 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled group together with the crate error type.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};

    #[cfg(feature = "selection")]
    pub use crate::selection::*;

    #[cfg(feature = "iteration")]
    pub use crate::iteration::*;

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "ordering")]
    pub use crate::ordering::*;
}

pub mod error;
pub mod value;

pub use error::{Error, Result};

#[cfg(feature = "selection")]
pub mod selection;

#[cfg(feature = "iteration")]
pub mod iteration;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "ordering")]
pub mod ordering;
