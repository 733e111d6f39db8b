//! Shallow merging of key/value mappings.
//!
//! - [`Object`]: field access shared by every supported mapping type
//! - [`extend`]: copy fields from sources, later sources win
//! - [`defaults`]: fill only absent fields, earlier sources win
//!
//! # Examples
//!
//! ```rust
//! use serde_json::{json, Map, Value};
//! use underbar::object::{defaults, extend};
//!
//! let mut settings: Map<String, Value> = Map::new();
//! let base = json!({"color": "red", "size": 1});
//! let user = json!({"size": 3});
//!
//! extend(&mut settings, &[base.as_object().unwrap(), user.as_object().unwrap()]);
//! assert_eq!(Value::Object(settings.clone()), json!({"color": "red", "size": 3}));
//!
//! let fallback = json!({"color": "blue", "shape": "round"});
//! defaults(&mut settings, &[fallback.as_object().unwrap()]);
//! assert_eq!(
//!     Value::Object(settings),
//!     json!({"color": "red", "size": 3, "shape": "round"})
//! );
//! ```

mod fields;
mod merge;

pub use fields::Object;
pub use merge::{defaults, extend};
