//! Asynchronous combinators
//!
//! Runtime-agnostic: nothing here spawns tasks or threads. Every combinator
//! returns a future that either completes on first poll (short-circuit) or
//! suspends for exactly as long as the caller's own future.
//! - `outcome_ext`: async work on an outcome that is already available
//! - `map_if`: conditional async mapping
//! - `future_ext`: the same combinators for a pending outcome

pub mod future_ext;
pub mod map_if;
pub mod outcome_ext;
pub mod task;

pub use future_ext::OutcomeFutureExt;
pub use map_if::MapIfAsyncExt;
pub use outcome_ext::OutcomeAsyncExt;
pub use task::{completed, BindAsync, MapAsync, MapIf};
