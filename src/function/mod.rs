//! Combinators that change how a function is invoked.
//!
//! - [`Once`] / [`SyncOnce`]: run at most one time, then replay the result
//! - [`Memoize`] / [`SyncMemoize`]: cache results per argument key
//! - [`delay`]: run later on a [`Scheduler`] (requires the `async` feature)
//!
//! Wrappers own their cache exclusively; it is only reachable through the
//! wrapper's methods. Arguments are passed as a single value, so a function
//! of several arguments takes a tuple.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::function::{memoize, once};
//!
//! let calls = Cell::new(0);
//! let initialize = once(|name: &str| {
//!     calls.set(calls.get() + 1);
//!     format!("hello {name}")
//! });
//! assert_eq!(initialize.call("ann"), "hello ann");
//! assert_eq!(initialize.call("bob"), "hello ann");
//! assert_eq!(calls.get(), 1);
//!
//! let area = memoize(|(width, height): (u32, u32)| width * height);
//! assert_eq!(area.call((3, 4)), 12);
//! assert_eq!(area.call((4, 3)), 12);
//! assert_eq!(area.cache_len(), 2);
//! ```

mod memoize;
mod once;

#[cfg(feature = "async")]
mod delay;
#[cfg(feature = "async")]
pub mod runtime;

pub use memoize::{Memoize, SyncMemoize, memoize, memoize_by};
pub use once::{Once, SyncOnce, once, once_fn};

#[cfg(feature = "async")]
pub use delay::{DelayHandle, Scheduler, TokioScheduler, delay, delay_on};
