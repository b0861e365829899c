//! The `Outcome` value type
//!
//! An [`Outcome`] is either a success holding a value or a failure holding an
//! error. It wraps a plain [`Result`] so conversions in both directions are
//! free, while giving the combinators in this crate a namespace of their own.

mod combinators;
#[cfg(feature = "serde")]
mod serde_impl;

use crate::error::AccessError;
use std::fmt;

/// Success or failure of an operation, with a `String` error unless told otherwise.
///
/// `Outcome<T>` is the single-error-type flavor and `Outcome<T, E>` carries a
/// caller-chosen error type. Both share one implementation.
///
/// ### Immutability
/// Every combinator consumes the outcome and returns a new one, or hands the
/// same value back untouched when it short-circuits.
///
/// ### Examples
/// ```rust
/// use outcome_sugars::Outcome;
///
/// let parsed: Outcome<i32> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
/// let doubled = parsed.map_if_matches(|v| *v > 10, |v| v * 2);
/// assert_eq!(doubled, Outcome::success(84));
/// ```
#[must_use = "this `Outcome` may be a failure, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<T, E = String> {
    inner: Result<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// Creates a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self { inner: Err(error) }
    }

    /// Succeeds with `value` when `condition` holds, fails with `error` otherwise.
    pub fn success_if(condition: bool, value: T, error: E) -> Self {
        if condition {
            Self::success(value)
        } else {
            Self::failure(error)
        }
    }

    /// Fails with `error` when `condition` holds, succeeds with `value` otherwise.
    pub fn failure_if(condition: bool, value: T, error: E) -> Self {
        Self::success_if(!condition, value, error)
    }

    /// Turns a missing value into a failure.
    pub fn from_option(option: Option<T>, error: E) -> Self {
        option.ok_or(error).into()
    }

    /// Returns true if the outcome holds a value.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    /// Returns true if the outcome holds an error.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.inner.is_err()
    }

    /// Returns the success value.
    ///
    /// # Panics
    /// Reading the value of a failure is a contract violation; check
    /// [`is_success`](Self::is_success) first or use [`try_value`](Self::try_value).
    #[track_caller]
    pub fn value(&self) -> &T
    where
        E: fmt::Debug,
    {
        match self.try_value() {
            Ok(value) => value,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Returns the success value, or an [`AccessError`] describing the failure.
    pub fn try_value(&self) -> Result<&T, AccessError>
    where
        E: fmt::Debug,
    {
        self.inner.as_ref().map_err(|error| AccessError::ValueOfFailure {
            error: format!("{error:?}"),
        })
    }

    /// Returns the error.
    ///
    /// # Panics
    /// Reading the error of a success is a contract violation.
    #[track_caller]
    pub fn error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Returns the error, or [`AccessError::ErrorOfSuccess`].
    pub fn try_error(&self) -> Result<&E, AccessError> {
        match &self.inner {
            Ok(_) => Err(AccessError::ErrorOfSuccess),
            Err(error) => Ok(error),
        }
    }

    /// Borrows the value if there is one.
    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    /// Borrows the error if there is one.
    #[inline]
    pub fn as_error(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }

    /// Consumes the outcome, keeping only the value.
    pub fn into_value(self) -> Option<T> {
        self.inner.ok()
    }

    /// Consumes the outcome, keeping only the error.
    pub fn into_error(self) -> Option<E> {
        self.inner.err()
    }

    /// Borrows the inner `Result`.
    #[inline]
    pub fn as_result(&self) -> &Result<T, E> {
        &self.inner
    }

    /// Consumes the outcome and returns the inner `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.inner
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        Outcome {
            inner: self.inner.as_ref(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(f, "Success({value})"),
            Err(error) => write!(f, "Failure({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self { inner: result }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.inner
    }
}
