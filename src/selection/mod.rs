//! Positional access into an ordered sequence.
//!
//! - [`first`] / [`first_n`]: leading element(s)
//! - [`last`] / [`last_n`]: trailing element(s)
//! - [`index_of`] / [`index_of_by`]: position lookup
//!
//! Counts beyond the sequence length are clipped, never an error.
//!
//! # Examples
//!
//! ```rust
//! use underbar::selection::{first, first_n, index_of, last_n};
//!
//! let values = [3, 1, 4, 1, 5];
//! assert_eq!(first(&values), Some(&3));
//! assert_eq!(first_n(&values, 2), vec![3, 1]);
//! assert_eq!(last_n(&values, 10), values.to_vec());
//! assert_eq!(index_of(&values, &1), Some(1));
//! ```

mod position;

pub use position::{first, first_n, index_of, index_of_by, last, last_n};
