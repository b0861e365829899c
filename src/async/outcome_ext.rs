//! Asynchronous transformations of an outcome that is already available

use super::task::{pass_through, succeed_with, BindAsync, MapAsync};
use crate::Outcome;
use futures::future::Either;
use std::future::Future;

//────────────────────────────────────────────────────────────────────────────
// OutcomeAsyncExt – async continuations for Outcome<T, E>
//────────────────────────────────────────────────────────────────────────────

/// Extension trait that runs asynchronous work on the success value of an [`Outcome`].
///
/// A failure is never handed to the callbacks; it comes back from an
/// already-resolved future.
pub trait OutcomeAsyncExt<T, E>: Sized {
    /// Maps the success value with an asynchronous transformation.
    ///
    /// ```rust
    /// use outcome_sugars::{Outcome, OutcomeAsyncExt};
    ///
    /// # futures::executor::block_on(async {
    /// let four: Outcome<i32> = Outcome::success(4);
    /// let eight = four.map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(eight, Outcome::success(8));
    /// # });
    /// ```
    fn map_async<U, F, Fut>(self, f: F) -> MapAsync<Fut, U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Like [`map_async`](Self::map_async), threading `context` into the transformation.
    fn map_async_with<U, C, F, Fut>(self, f: F, context: C) -> MapAsync<Fut, U, E>
    where
        F: FnOnce(T, C) -> Fut,
        Fut: Future<Output = U>,
    {
        self.map_async(move |value| f(value, context))
    }

    /// Chains an asynchronous computation that may itself fail.
    fn bind_async<U, F, Fut>(self, f: F) -> BindAsync<Fut, U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>;

    /// Runs an asynchronous side effect on the success value, then yields the
    /// original outcome.
    fn tap_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>;
}

impl<T, E> OutcomeAsyncExt<T, E> for Outcome<T, E> {
    fn map_async<U, F, Fut>(self, f: F) -> MapAsync<Fut, U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.into_result() {
            Ok(value) => succeed_with(f(value)),
            Err(error) => pass_through(Outcome::failure(error)),
        }
    }

    fn bind_async<U, F, Fut>(self, f: F) -> BindAsync<Fut, U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self.into_result() {
            Ok(value) => Either::Right(f(value)),
            Err(error) => pass_through(Outcome::failure(error)),
        }
    }

    fn tap_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        let effect = self.as_value().map(f);
        async move {
            if let Some(effect) = effect {
                effect.await;
            }
            self
        }
    }
}
