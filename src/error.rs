//! Error type shared by every group.
//!
//! Most helpers are total. The few that can fail report it through
//! [`Error`] instead of panicking:
//!
//! - `reduce` on an empty collection without an initial value
//! - dynamic access (`pluck_values`, `invoke`, `sort_by_field`) on a value
//!   of the wrong shape
//! - a delayed task that never delivered its result

use thiserror::Error;

/// Errors reported by underbar operations.
///
/// # Examples
///
/// ```rust
/// use underbar::Error;
///
/// let error = Error::invalid_operation("reduce", "empty collection with no initial value");
/// assert_eq!(
///     error.to_string(),
///     "reduce: invalid operation: empty collection with no initial value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation is not defined for the given input.
    #[error("{operation}: invalid operation: {reason}")]
    InvalidOperation {
        /// Name of the operation that failed.
        operation: &'static str,
        /// Why the operation is undefined here.
        reason: String,
    },

    /// A value did not have the shape the operation needs.
    #[error("{operation}: type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the operation that failed.
        operation: &'static str,
        /// Description of the expected shape.
        expected: String,
        /// Description of the shape actually found.
        found: String,
    },

    /// A scheduled task did not deliver its result.
    #[error("delayed task failed: {reason}")]
    TaskFailed {
        /// Why the task failed.
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidOperation`].
    #[must_use]
    pub fn invalid_operation(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            operation,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::TypeMismatch`].
    #[must_use]
    pub fn type_mismatch(
        operation: &'static str,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            operation,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an [`Error::TaskFailed`].
    #[must_use]
    pub fn task_failed(reason: impl Into<String>) -> Self {
        Self::TaskFailed {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
