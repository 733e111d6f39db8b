//! Result caching keyed by arguments.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// A function wrapper that caches results per argument key.
///
/// By default the key is the argument value itself, so `(1, 2)` and
/// `(2, 1)` are distinct keys and no two argument tuples can collide. Use
/// [`memoize_by`] to supply a canonical key function instead, for
/// arguments that are not hashable.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. Use [`SyncMemoize`] to share a cache
/// between threads.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::function::Memoize;
///
/// let calls = Cell::new(0);
/// let square = Memoize::new(|value: u64| {
///     calls.set(calls.get() + 1);
///     value * value
/// });
///
/// assert_eq!(square.call(9), 81);
/// assert_eq!(square.call(9), 81);
/// assert_eq!(calls.get(), 1);
/// assert!(square.is_cached(&9));
/// ```
pub struct Memoize<A, R, F, K = A, G = fn(&A) -> A> {
    function: F,
    key: G,
    cache: RefCell<FxHashMap<K, R>>,
    _arguments: PhantomData<fn(A)>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Clone + Eq + Hash,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Wraps `function`, keying the cache by the argument value.
    pub fn new(function: F) -> Self {
        Self {
            function,
            key: A::clone,
            cache: RefCell::new(FxHashMap::default()),
            _arguments: PhantomData,
        }
    }
}

impl<A, R, F, K, G> Memoize<A, R, F, K, G>
where
    K: Eq + Hash,
    R: Clone,
    F: Fn(A) -> R,
    G: Fn(&A) -> K,
{
    /// Wraps `function`, keying the cache by `key(&arguments)`.
    pub fn with_key(function: F, key: G) -> Self {
        Self {
            function,
            key,
            cache: RefCell::new(FxHashMap::default()),
            _arguments: PhantomData,
        }
    }

    /// Returns the cached result for these arguments, computing it first if
    /// needed.
    pub fn call(&self, arguments: A) -> R {
        let key = (self.key)(&arguments);
        if let Some(cached) = self.cache.borrow().get(&key) {
            tracing::trace!(hit = true, "memoize: cache lookup");
            return cached.clone();
        }

        tracing::trace!(hit = false, "memoize: cache lookup");
        let result = (self.function)(arguments);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }

    /// Returns `true` if a result for these arguments is cached.
    pub fn is_cached(&self, arguments: &A) -> bool {
        self.cache.borrow().contains_key(&(self.key)(arguments))
    }
}

impl<A, R, F, K, G> Memoize<A, R, F, K, G> {
    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<A, R, F, K, G> fmt::Debug for Memoize<A, R, F, K, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cache_len", &self.cache_len())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` in a [`Memoize`] keyed by the argument value.
///
/// # Examples
///
/// ```rust
/// use underbar::function::memoize;
///
/// let describe = memoize(|(name, age): (&str, u32)| format!("{name} ({age})"));
/// assert_eq!(describe.call(("ann", 31)), "ann (31)");
/// assert_eq!(describe.cache_len(), 1);
/// ```
pub fn memoize<A, R, F>(function: F) -> Memoize<A, R, F>
where
    A: Clone + Eq + Hash,
    R: Clone,
    F: Fn(A) -> R,
{
    Memoize::new(function)
}

/// Wraps `function` in a [`Memoize`] keyed by `key(&arguments)`.
///
/// The key function must be canonical: equal keys for arguments that
/// should share a result, different keys otherwise.
///
/// # Examples
///
/// ```rust
/// use serde_json::{json, Value};
/// use underbar::function::memoize_by;
///
/// let field_count = memoize_by(
///     |value: Value| value.as_object().map_or(0, |object| object.len()),
///     |value: &Value| value.to_string(),
/// );
/// assert_eq!(field_count.call(json!({"a": 1, "b": 2})), 2);
/// assert!(field_count.is_cached(&json!({"a": 1, "b": 2})));
/// ```
pub fn memoize_by<A, R, F, K, G>(function: F, key: G) -> Memoize<A, R, F, K, G>
where
    K: Eq + Hash,
    R: Clone,
    F: Fn(A) -> R,
    G: Fn(&A) -> K,
{
    Memoize::with_key(function, key)
}

/// A thread-safe [`Memoize`].
///
/// The cache maps each key to its own [`OnceLock`] cell. The map lock is
/// only held to find or insert the cell, never while the function runs,
/// so different keys compute in parallel while concurrent callers with the
/// same key wait for a single computation.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
/// use underbar::function::SyncMemoize;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let slow_double = Arc::new(SyncMemoize::new(move |value: u32| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     value * 2
/// }));
///
/// let handles: Vec<_> = (0..8)
///     .map(|_| {
///         let slow_double = Arc::clone(&slow_double);
///         thread::spawn(move || slow_double.call(21))
///     })
///     .collect();
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 42);
/// }
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct SyncMemoize<A, R, F, K = A, G = fn(&A) -> A> {
    function: F,
    key: G,
    cache: Mutex<FxHashMap<K, Arc<OnceLock<R>>>>,
    _arguments: PhantomData<fn(A)>,
}

impl<A, R, F> SyncMemoize<A, R, F>
where
    A: Clone + Eq + Hash,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Wraps `function`, keying the cache by the argument value.
    pub fn new(function: F) -> Self {
        Self {
            function,
            key: A::clone,
            cache: Mutex::new(FxHashMap::default()),
            _arguments: PhantomData,
        }
    }
}

impl<A, R, F, K, G> SyncMemoize<A, R, F, K, G>
where
    K: Eq + Hash,
    R: Clone,
    F: Fn(A) -> R,
    G: Fn(&A) -> K,
{
    /// Wraps `function`, keying the cache by `key(&arguments)`.
    pub fn with_key(function: F, key: G) -> Self {
        Self {
            function,
            key,
            cache: Mutex::new(FxHashMap::default()),
            _arguments: PhantomData,
        }
    }

    /// Returns the cached result for these arguments, computing it first if
    /// needed.
    ///
    /// If the function panics, the panic propagates and the key's empty
    /// cell is dropped from the cache, so the next caller computes it again.
    pub fn call(&self, arguments: A) -> R {
        let key = (self.key)(&arguments);
        let cell = Arc::clone(self.cache.lock().entry(key).or_default());

        let mut computed = false;
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            cell.get_or_init(|| {
                computed = true;
                (self.function)(arguments)
            })
            .clone()
        }));

        match outcome {
            Ok(result) => {
                tracing::trace!(hit = !computed, "memoize: cache lookup");
                result
            }
            Err(payload) => {
                self.forget_if_empty(&cell);
                resume_unwind(payload)
            }
        }
    }

    /// Removes `cell` from the cache unless another caller filled it.
    fn forget_if_empty(&self, cell: &Arc<OnceLock<R>>) {
        self.cache
            .lock()
            .retain(|_, slot| !Arc::ptr_eq(slot, cell) || slot.get().is_some());
    }

    /// Returns `true` if a result for these arguments is cached.
    pub fn is_cached(&self, arguments: &A) -> bool {
        self.cache
            .lock()
            .get(&(self.key)(arguments))
            .is_some_and(|cell| cell.get().is_some())
    }
}

impl<A, R, F, K, G> SyncMemoize<A, R, F, K, G> {
    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache
            .lock()
            .values()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    /// Drops every cached result.
    ///
    /// Computations already in flight finish and return their result, but
    /// it is not cached.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl<A, R, F, K, G> fmt::Debug for SyncMemoize<A, R, F, K, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SyncMemoize")
            .field("cache_len", &self.cache_len())
            .finish_non_exhaustive()
    }
}
