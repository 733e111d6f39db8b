//! Reordering a sequence by a criterion or at random.
//!
//! - [`sort_by`]: stable sort by an `Ord` key
//! - [`sort_with`]: stable sort by a comparison function
//! - [`sort_by_field`]: stable sort of JSON objects by a field name
//! - [`shuffle`] / [`shuffle_with`]: uniform random permutation
//!
//! Every function sorts or shuffles a copy; the input is left untouched.
//!
//! # Examples
//!
//! ```rust
//! use underbar::ordering::{sort_by, sort_with};
//!
//! let words = ["pear", "fig", "banana"];
//! assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "pear", "banana"]);
//! assert_eq!(sort_with(&words, |left, right| right.cmp(left)), vec!["pear", "fig", "banana"]);
//! ```

mod shuffle;
mod sort;

pub use shuffle::{shuffle, shuffle_with};
pub use sort::{sort_by, sort_by_field, sort_with};
