//! Already-resolved handles and the futures returned by async combinators
//!
//! Every asynchronous combinator returns a concrete type instead of a boxed
//! future. The short-circuit branch is a [`Ready`] future that completes on
//! first poll; the mapping branch drives the caller's future and wraps its
//! output, so it suspends exactly as long as that future does.

use crate::Outcome;
use futures::future::{self, Either, FutureExt as _, Ready};
use std::future::Future;

/// Future returned by [`map_async`](crate::OutcomeAsyncExt::map_async).
pub type MapAsync<Fut, U, E> =
    Either<Ready<Outcome<U, E>>, future::Map<Fut, fn(U) -> Outcome<U, E>>>;

/// Future returned by the [`MapIfAsyncExt`](crate::MapIfAsyncExt) family.
///
/// The transformation keeps the payload type, so this is [`MapAsync`] with
/// `U = T`.
pub type MapIf<Fut, T, E> = MapAsync<Fut, T, E>;

/// Future returned by [`bind_async`](crate::OutcomeAsyncExt::bind_async).
pub type BindAsync<Fut, U, E> = Either<Ready<Outcome<U, E>>, Fut>;

/// Wraps an outcome in a future that is ready on first poll.
#[inline]
pub fn completed<T, E>(outcome: Outcome<T, E>) -> Ready<Outcome<T, E>> {
    future::ready(outcome)
}

impl<T, E> Outcome<T, E> {
    /// Wraps the outcome in a future that is ready on first poll.
    #[inline]
    pub fn into_ready(self) -> Ready<Self> {
        completed(self)
    }
}

/// Drives `fut` and wraps its output as a success.
pub(crate) fn succeed_with<Fut, U, E>(fut: Fut) -> MapAsync<Fut, U, E>
where
    Fut: Future<Output = U>,
{
    Either::Right(fut.map(Outcome::success as fn(U) -> Outcome<U, E>))
}

/// Short-circuits with an outcome that is already known.
pub(crate) fn pass_through<T, E, R>(outcome: Outcome<T, E>) -> Either<Ready<Outcome<T, E>>, R> {
    Either::Left(completed(outcome))
}
