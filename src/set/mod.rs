//! Structural transforms across one or more sequences.
//!
//! - [`uniq`] / [`uniq_hashed`]: order-preserving deduplication
//! - [`intersection`], [`difference`]: set algebra over sequences
//! - [`flatten`] / [`flatten_values`]: depth-first flattening
//! - [`zip`] / [`zip2`]: position-wise grouping with an explicit absent marker
//!
//! Results are always fresh vectors; inputs are never reordered.
//!
//! # Examples
//!
//! ```rust
//! use underbar::set::{difference, intersection, uniq};
//!
//! assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
//! assert_eq!(intersection(&[&[1, 2, 3], &[2, 3, 4], &[3, 4, 5]]), vec![3]);
//! assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4]]), vec![1, 3]);
//! ```

mod algebra;
mod dedup;
mod nested;
mod zip;

pub use algebra::{difference, intersection};
pub use dedup::{uniq, uniq_hashed};
pub use nested::{Nested, flatten, flatten_values};
pub use zip::{zip, zip2};
