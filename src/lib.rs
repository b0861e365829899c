//! # Outcome Sugars
//!
//! Syntactic sugar for success/failure flows - an [`Outcome`] type with
//! chainable synchronous and asynchronous combinators.
//!
//! This crate provides its utilities in feature-gated modules:
//!
//! ## Features
//!
//! - `async` (default) - `map_async`, `bind_async`, the `map_if_async` family and
//!   combinators on pending outcomes, built on `futures`
//! - `serde` - `Serialize`/`Deserialize` for `Outcome`
//! - `log` - trace-level records of combinator branch decisions
//!
//! ## Example
//!
//! ```rust
//! use outcome_sugars::{MapIfAsyncExt, Outcome};
//!
//! # futures::executor::block_on(async {
//! let four: Outcome<i32> = Outcome::success(4);
//! let eight = four.map_if_async(true, |x| async move { x * 2 }).await;
//! assert_eq!(eight, Outcome::success(8));
//!
//! let bad: Outcome<i32> = Outcome::failure("bad".to_string());
//! let still_bad = bad.map_if_async(true, |x| async move { x * 2 }).await;
//! assert_eq!(still_bad, Outcome::failure("bad".to_string()));
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

mod trace;

pub mod config;
pub mod error;
pub mod outcome;

#[cfg(feature = "async")]
pub mod r#async;

pub use config::{configuration, configure, Configuration};
pub use error::AccessError;
pub use outcome::Outcome;

// Re-export async utilities
#[cfg(feature = "async")]
pub use r#async::{
    completed, BindAsync, MapAsync, MapIf, MapIfAsyncExt, OutcomeAsyncExt, OutcomeFutureExt,
};
