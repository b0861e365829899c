//! Future extension traits for pending outcomes

use super::map_if::MapIfAsyncExt;
use super::outcome_ext::OutcomeAsyncExt;
use crate::Outcome;
use std::future::Future;

//────────────────────────────────────────────────────────────────────────────
// OutcomeFutureExt – fluent ops for Future<Output = Outcome<T, E>>
//────────────────────────────────────────────────────────────────────────────

/// Extension trait for futures that resolve to an [`Outcome`].
///
/// Each method awaits the pending outcome and then applies the matching
/// combinator. Names carry a `_success` suffix so they never clash with
/// [`futures::FutureExt`] when both traits are in scope.
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Maps the success value once the outcome resolves.
    fn map_success<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Maps the success value with an asynchronous transformation once the
    /// outcome resolves.
    fn map_success_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Chains a computation that may itself fail.
    fn bind_success<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        async move { self.await.bind(f) }
    }

    /// Runs a side effect on the success value without consuming it.
    fn tap_success<F>(self, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tap(f) }
    }

    /// Maps the resolved success value only when `condition` is true.
    ///
    /// ```rust
    /// use outcome_sugars::{Outcome, OutcomeFutureExt};
    ///
    /// # futures::executor::block_on(async {
    /// let pending = async { Outcome::<i32>::success(4) };
    /// let out = pending.map_success_if(true, |x| async move { x * 2 }).await;
    /// assert_eq!(out, Outcome::success(8));
    /// # });
    /// ```
    fn map_success_if<F, Fut>(self, condition: bool, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.map_if_async(condition, f).await }
    }

    /// Maps the resolved success value only when `predicate` accepts it.
    fn map_success_if_matches<P, F, Fut>(
        self,
        predicate: P,
        f: F,
    ) -> impl Future<Output = Outcome<T, E>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.map_if_matches_async(predicate, f).await }
    }
}

impl<Fut, T, E> OutcomeFutureExt<T, E> for Fut where Fut: Future<Output = Outcome<T, E>> {}
