//! Error types for outcome access.
//!
//! Combinators never fail on their own: a failure is always data carried by an
//! [`Outcome`](crate::Outcome). The only error this crate defines describes a
//! caller reading the wrong side of an outcome.

use thiserror::Error;

/// Reading the side of an [`Outcome`](crate::Outcome) that it does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The value of a failed outcome was requested
    #[error("attempted to read the value of a failed outcome (error: {error})")]
    ValueOfFailure {
        /// Debug rendering of the error the outcome holds
        error: String,
    },

    /// The error of a successful outcome was requested
    #[error("attempted to read the error of a successful outcome")]
    ErrorOfSuccess,
}
