//! Runtime lookup for deferred execution.
//!
//! Delayed tasks run on a tokio runtime. Inside a runtime the ambient one
//! is used, so tasks share its clock (including paused test time) and
//! its shutdown. Outside any runtime a global multi-thread runtime is
//! built on first use and kept for the life of the process.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::runtime::handle;
//!
//! // Outside a runtime this falls back to the global runtime.
//! let obtained_handle = handle().unwrap();
//! let answer = obtained_handle.block_on(async { 42 });
//! assert_eq!(answer, 42);
//! ```

use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime};

use crate::error::{Error, Result};

/// Global tokio runtime initialized lazily on first access.
///
/// Multi-thread scheduler with one worker per CPU core and every driver
/// enabled. A build failure is kept and reported on every access.
static GLOBAL_RUNTIME: LazyLock<std::io::Result<Runtime>> = LazyLock::new(|| {
    tracing::debug!(workers = num_cpus::get(), "runtime: building global runtime");
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("underbar-delay")
        .enable_all()
        .build()
});

/// Returns the global runtime, building it on first call.
///
/// # Errors
///
/// Returns [`Error::TaskFailed`] if the runtime could not be built.
pub fn global() -> Result<&'static Runtime> {
    GLOBAL_RUNTIME
        .as_ref()
        .map_err(|error| Error::task_failed(format!("cannot build global runtime: {error}")))
}

/// Returns a handle to the current runtime, or to the global one when
/// called outside any runtime.
///
/// # Errors
///
/// Returns [`Error::TaskFailed`] if the global runtime is needed and could
/// not be built.
pub fn handle() -> Result<Handle> {
    if let Ok(current_handle) = Handle::try_current() {
        return Ok(current_handle);
    }
    global().map(|runtime| runtime.handle().clone())
}
