//! At-most-once invocation.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

use parking_lot::Mutex;

/// The internal state of a [`Once`] or [`SyncOnce`] wrapper.
#[derive(Debug)]
enum OnceState<F, R> {
    /// Not called yet. Holds the wrapped function.
    Pending(F),
    /// Called. Holds the cached result.
    Done(R),
    /// The wrapped function panicked, or is running right now.
    Poisoned,
}

impl<F, R> OnceState<F, R> {
    const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    fn done(&self) -> Option<&R> {
        match self {
            Self::Done(result) => Some(result),
            _ => None,
        }
    }
}

/// A function wrapper that runs its function at most once.
///
/// The first [`call`](Once::call) runs the function with the given
/// arguments and caches the result. Every later call returns a clone of
/// that result, whatever arguments it passes.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. Use [`SyncOnce`] to share a wrapper
/// between threads.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::function::Once;
///
/// let calls = Cell::new(0);
/// let add_once = Once::new(|(left, right): (i32, i32)| {
///     calls.set(calls.get() + 1);
///     left + right
/// });
///
/// assert!(!add_once.is_called());
/// assert_eq!(add_once.call((1, 2)), 3);
/// assert_eq!(add_once.call((10, 20)), 3);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Once<A, R, F = fn(A) -> R> {
    state: RefCell<OnceState<F, R>>,
    _arguments: PhantomData<fn(A)>,
}

impl<A, R, F> Once<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    /// Wraps `function`. It is not called until the first [`call`](Self::call).
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            _arguments: PhantomData,
        }
    }

    /// Runs the function on the first call, replays its result afterwards.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics; the wrapper is then poisoned.
    /// - If the wrapper is poisoned, or called again from inside its own
    ///   function.
    pub fn call(&self, arguments: A) -> R {
        let previous = std::mem::replace(&mut *self.state.borrow_mut(), OnceState::Poisoned);
        let function = match previous {
            OnceState::Pending(function) => function,
            OnceState::Done(result) => {
                let cached = result.clone();
                *self.state.borrow_mut() = OnceState::Done(result);
                return cached;
            }
            OnceState::Poisoned => panic!("Once instance has been poisoned"),
        };

        tracing::debug!("once: running wrapped function");
        let result = function(arguments);
        *self.state.borrow_mut() = OnceState::Done(result.clone());
        result
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns `true` once the function has run to completion.
    #[inline]
    pub fn is_called(&self) -> bool {
        self.state.borrow().is_done()
    }

    /// Returns `true` if the wrapped function panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Poisoned)
    }

    /// Consumes the wrapper, returning the cached result if there is one.
    pub fn into_inner(self) -> Option<R> {
        match self.state.into_inner() {
            OnceState::Done(result) => Some(result),
            _ => None,
        }
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        formatter
            .debug_struct("Once")
            .field("result", &state.done())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` in a [`Once`].
///
/// # Examples
///
/// ```rust
/// use underbar::function::once;
///
/// let first_name = once(|name: String| name);
/// assert_eq!(first_name.call("ann".to_string()), "ann");
/// assert_eq!(first_name.call("bob".to_string()), "ann");
/// ```
#[inline]
pub const fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

/// Wraps `function` in a [`Once`] and returns it as a plain closure.
///
/// # Examples
///
/// ```rust
/// use underbar::function::once_fn;
///
/// let roll = once_fn(|sides: u32| sides / 2);
/// assert_eq!(roll(6), 3);
/// assert_eq!(roll(100), 3);
/// ```
pub fn once_fn<A, R, F>(function: F) -> impl Fn(A) -> R
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    let wrapper = Once::new(function);
    move |arguments| wrapper.call(arguments)
}

/// A thread-safe [`Once`].
///
/// The state is guarded by a [`parking_lot::Mutex`] that is held while the
/// function runs, so concurrent first callers wait for the single run and
/// all observe its result.
///
/// Calling the wrapper again from inside its own function deadlocks.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
/// use underbar::function::SyncOnce;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let setup = Arc::new(SyncOnce::new(move |id: usize| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     id
/// }));
///
/// let handles: Vec<_> = (0..8)
///     .map(|id| {
///         let setup = Arc::clone(&setup);
///         thread::spawn(move || setup.call(id))
///     })
///     .collect();
/// let results: Vec<usize> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
///
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// assert!(results.iter().all(|result| *result == results[0]));
/// ```
pub struct SyncOnce<A, R, F = fn(A) -> R> {
    state: Mutex<OnceState<F, R>>,
    _arguments: PhantomData<fn(A)>,
}

impl<A, R, F> SyncOnce<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    /// Wraps `function`. It is not called until the first [`call`](Self::call).
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: Mutex::new(OnceState::Pending(function)),
            _arguments: PhantomData,
        }
    }

    /// Runs the function on the first call, replays its result afterwards.
    ///
    /// # Panics
    ///
    /// If the wrapped function panics, or the wrapper is already poisoned.
    pub fn call(&self, arguments: A) -> R {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, OnceState::Poisoned) {
            OnceState::Pending(function) => {
                tracing::debug!("once: running wrapped function");
                let result = function(arguments);
                *state = OnceState::Done(result.clone());
                result
            }
            OnceState::Done(result) => {
                let cached = result.clone();
                *state = OnceState::Done(result);
                cached
            }
            OnceState::Poisoned => panic!("SyncOnce instance has been poisoned"),
        }
    }
}

impl<A, R, F> SyncOnce<A, R, F> {
    /// Returns `true` once the function has run to completion.
    #[inline]
    pub fn is_called(&self) -> bool {
        self.state.lock().is_done()
    }

    /// Returns `true` if the wrapped function panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.lock(), OnceState::Poisoned)
    }

    /// Consumes the wrapper, returning the cached result if there is one.
    pub fn into_inner(self) -> Option<R> {
        match self.state.into_inner() {
            OnceState::Done(result) => Some(result),
            _ => None,
        }
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for SyncOnce<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("SyncOnce")
            .field("result", &state.done())
            .finish_non_exhaustive()
    }
}
