//! Deferred invocation.

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Sleep;

use super::runtime;
use crate::error::{Error, Result};

/// Something that runs a task once a wait time has elapsed.
///
/// A scheduler owns the threads or event loop; callers only hand it work.
pub trait Scheduler {
    /// Runs `task` no sooner than `wait` from now and returns at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskFailed`] if the task cannot be scheduled.
    fn schedule<R, T>(&self, wait: Duration, task: T) -> Result<DelayHandle<R>>
    where
        R: Send + 'static,
        T: FnOnce() -> R + Send + 'static;
}

/// A [`Scheduler`] backed by tokio timers.
///
/// [`TokioScheduler::current`] resolves the runtime at scheduling time: the
/// ambient runtime when called inside one, the global runtime otherwise
/// (see [`runtime::handle`]). An ambient runtime built without its time
/// driver cannot run timers, so the task goes to the global runtime instead.
///
/// [`TokioScheduler::with_handle`] pins a specific runtime. That runtime
/// must have its time driver enabled, otherwise
/// [`schedule`](Scheduler::schedule) returns [`Error::TaskFailed`].
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler {
    handle: Option<Handle>,
}

impl TokioScheduler {
    /// Schedules on the ambient runtime, or the global one.
    #[must_use]
    pub const fn current() -> Self {
        Self { handle: None }
    }

    /// Schedules on the runtime behind `handle`.
    #[must_use]
    pub const fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Picks the runtime to spawn on together with a timer registered on it.
    fn timer(&self, wait: Duration) -> Result<(Handle, Sleep)> {
        if let Some(handle) = &self.handle {
            let sleep = sleep_on(handle, wait).ok_or_else(timers_disabled)?;
            return Ok((handle.clone(), sleep));
        }

        let ambient = runtime::handle()?;
        if let Some(sleep) = sleep_on(&ambient, wait) {
            return Ok((ambient, sleep));
        }

        tracing::debug!("delay: ambient runtime has no timers, using global runtime");
        let global = runtime::global()?.handle().clone();
        let sleep = sleep_on(&global, wait).ok_or_else(timers_disabled)?;
        Ok((global, sleep))
    }
}

/// Registers a timer on the runtime behind `handle`.
///
/// Returns `None` when that runtime was built without its time driver.
fn sleep_on(handle: &Handle, wait: Duration) -> Option<Sleep> {
    let _entered = handle.enter();
    catch_unwind(AssertUnwindSafe(|| tokio::time::sleep(wait))).ok()
}

fn timers_disabled() -> Error {
    Error::task_failed("runtime was built without its time driver")
}

impl Scheduler for TokioScheduler {
    fn schedule<R, T>(&self, wait: Duration, task: T) -> Result<DelayHandle<R>>
    where
        R: Send + 'static,
        T: FnOnce() -> R + Send + 'static,
    {
        let (handle, sleep) = self.timer(wait)?;

        tracing::debug!(wait_ms = wait.as_millis(), "delay: scheduling task");
        let inner = handle.spawn(async move {
            sleep.await;
            tracing::debug!("delay: running task");
            task()
        });
        Ok(DelayHandle { inner })
    }
}

/// The handle of a scheduled call.
///
/// Awaiting it yields the call's result. Dropping it does not cancel the
/// call.
#[derive(Debug)]
pub struct DelayHandle<R> {
    inner: JoinHandle<R>,
}

impl<R> DelayHandle<R> {
    /// Returns `true` once the call has run, or failed.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl<R> Future for DelayHandle<R> {
    type Output = Result<R>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner)
            .poll(context)
            .map(|joined| joined.map_err(|error| Error::task_failed(error.to_string())))
    }
}

/// Calls `function(arguments)` once `wait` has elapsed, without blocking.
///
/// Uses [`TokioScheduler::current`]. There is no cancellation; the returned
/// handle only observes the result.
///
/// # Errors
///
/// Returns [`Error::TaskFailed`] if no runtime with timers is available to
/// schedule on.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::function::delay;
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let greeting = delay(
///     |(greeting, name): (&str, &str)| format!("{greeting}, {name}"),
///     Duration::from_millis(10),
///     ("hello", "ann"),
/// )
/// .unwrap();
/// assert_eq!(greeting.await.unwrap(), "hello, ann");
/// # });
/// ```
pub fn delay<A, R, F>(function: F, wait: Duration, arguments: A) -> Result<DelayHandle<R>>
where
    A: Send + 'static,
    R: Send + 'static,
    F: FnOnce(A) -> R + Send + 'static,
{
    delay_on(&TokioScheduler::current(), function, wait, arguments)
}

/// [`delay`] on an explicit [`Scheduler`].
///
/// # Errors
///
/// Returns whatever error the scheduler reports.
pub fn delay_on<S, A, R, F>(
    scheduler: &S,
    function: F,
    wait: Duration,
    arguments: A,
) -> Result<DelayHandle<R>>
where
    S: Scheduler,
    A: Send + 'static,
    R: Send + 'static,
    F: FnOnce(A) -> R + Send + 'static,
{
    scheduler.schedule(wait, move || function(arguments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_panicking_task_reports_task_failed() {
        let handle = delay(
            |_: ()| -> i32 { panic!("boom") },
            Duration::from_millis(5),
            (),
        )
        .unwrap();
        let error = handle.await.unwrap_err();
        assert!(matches!(error, Error::TaskFailed { .. }));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_with_handle_uses_given_runtime() {
        let scheduler = TokioScheduler::with_handle(Handle::current());
        let handle =
            delay_on(&scheduler, |value: u8| value + 1, Duration::from_secs(60), 1).unwrap();
        assert_eq!(handle.await.unwrap(), 2);
    }

    #[rstest]
    fn test_with_handle_without_timers_fails_at_schedule_time() {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let scheduler = TokioScheduler::with_handle(runtime.handle().clone());

        let error =
            delay_on(&scheduler, |value: u8| value, Duration::from_millis(1), 1).unwrap_err();

        assert_eq!(error, Error::task_failed("runtime was built without its time driver"));
    }
}
