//! Conditional asynchronous mapping
//!
//! Four entry points cover the whole family: a static condition or a
//! predicate, each with or without a context value. `Outcome<T>` is
//! `Outcome<T, String>`, so the single- and two-error-type flavors share the
//! same methods.
//!
//! All four reduce to one rule. The condition is settled first (a predicate
//! is only consulted for a success). When it does not hold the outcome comes
//! back unchanged from an already-resolved future; when it holds the
//! transformation runs through [`map_async`](crate::OutcomeAsyncExt::map_async),
//! which still passes a failure through untouched.

use super::outcome_ext::OutcomeAsyncExt;
use super::task::{pass_through, MapIf};
use crate::trace::trace_branch;
use crate::Outcome;
use std::future::Future;

/// Conditional variants of [`map_async`](crate::OutcomeAsyncExt::map_async).
///
/// ```rust
/// use outcome_sugars::{MapIfAsyncExt, Outcome};
///
/// # futures::executor::block_on(async {
/// let fifteen: Outcome<i32> = Outcome::success(15);
/// let out = fifteen
///     .map_if_matches_async(|x| *x > 10, |x| async move { x + 1 })
///     .await;
/// assert_eq!(out, Outcome::success(16));
/// # });
/// ```
pub trait MapIfAsyncExt<T, E>: Sized {
    /// Maps the success value only when `condition` is true.
    fn map_if_async<F, Fut>(self, condition: bool, f: F) -> MapIf<Fut, T, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = T>;

    /// Like [`map_if_async`](Self::map_if_async), threading `context` into the
    /// transformation.
    fn map_if_async_with<C, F, Fut>(self, condition: bool, f: F, context: C) -> MapIf<Fut, T, E>
    where
        F: FnOnce(T, C) -> Fut,
        Fut: Future<Output = T>;

    /// Maps the success value only when `predicate` accepts it. The predicate
    /// is never evaluated on a failure.
    fn map_if_matches_async<P, F, Fut>(self, predicate: P, f: F) -> MapIf<Fut, T, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = T>;

    /// Like [`map_if_matches_async`](Self::map_if_matches_async). The predicate
    /// borrows `context`, the transformation then receives it by value.
    fn map_if_matches_async_with<C, P, F, Fut>(
        self,
        predicate: P,
        f: F,
        context: C,
    ) -> MapIf<Fut, T, E>
    where
        P: FnOnce(&T, &C) -> bool,
        F: FnOnce(T, C) -> Fut,
        Fut: Future<Output = T>;
}

impl<T, E> MapIfAsyncExt<T, E> for Outcome<T, E> {
    fn map_if_async<F, Fut>(self, condition: bool, f: F) -> MapIf<Fut, T, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = T>,
    {
        map_when(self, condition, f)
    }

    fn map_if_async_with<C, F, Fut>(self, condition: bool, f: F, context: C) -> MapIf<Fut, T, E>
    where
        F: FnOnce(T, C) -> Fut,
        Fut: Future<Output = T>,
    {
        map_when(self, condition, move |value| f(value, context))
    }

    fn map_if_matches_async<P, F, Fut>(self, predicate: P, f: F) -> MapIf<Fut, T, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = T>,
    {
        let matches = self.as_value().is_some_and(predicate);
        map_when(self, matches, f)
    }

    fn map_if_matches_async_with<C, P, F, Fut>(
        self,
        predicate: P,
        f: F,
        context: C,
    ) -> MapIf<Fut, T, E>
    where
        P: FnOnce(&T, &C) -> bool,
        F: FnOnce(T, C) -> Fut,
        Fut: Future<Output = T>,
    {
        let matches = self
            .as_value()
            .is_some_and(|value| predicate(value, &context));
        map_when(self, matches, move |value| f(value, context))
    }
}

fn map_when<T, E, F, Fut>(outcome: Outcome<T, E>, condition: bool, f: F) -> MapIf<Fut, T, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = T>,
{
    if !condition {
        trace_branch!("map_if_async: condition not met, outcome passed through");
        return pass_through(outcome);
    }
    trace_branch!("map_if_async: condition met, delegating to map_async");
    outcome.map_async(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_test::{assert_pending, assert_ready, task};

    #[test]
    fn short_circuit_is_ready_without_polling_transform() {
        let calls = AtomicUsize::new(0);
        let four: Outcome<i32> = Outcome::success(4);
        let mut fut = task::spawn(four.map_if_async(false, |x| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { x * 2 }
        }));
        assert_eq!(assert_ready!(fut.poll()), Outcome::success(4));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn mapping_branch_waits_for_transform() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let four: Outcome<i32> = Outcome::success(4);
        let mut fut = task::spawn(four.map_if_async(true, move |x| async move {
            let _ = rx.await;
            x * 2
        }));
        assert_pending!(fut.poll());
        let _ = tx.send(());
        assert_eq!(assert_ready!(fut.poll()), Outcome::success(8));
    }

    #[test]
    fn context_variants_share_one_instance() {
        let tag = String::from("ctx");
        let tag_addr = tag.as_ptr() as usize;
        let seen = AtomicUsize::new(0);
        let ok: Outcome<usize, &str> = Outcome::success(1);
        let mut fut = task::spawn(ok.map_if_matches_async_with(
            |_, ctx: &String| {
                seen.store(ctx.as_ptr() as usize, Ordering::SeqCst);
                true
            },
            |x, ctx: String| async move {
                let same_instance = ctx.as_ptr() as usize == tag_addr;
                x + ctx.len() + same_instance as usize
            },
            tag,
        ));
        assert_eq!(assert_ready!(fut.poll()), Outcome::success(5));
        assert_eq!(seen.load(Ordering::SeqCst), tag_addr);
    }

    #[test]
    #[should_panic(expected = "predicate exploded")]
    fn predicate_panic_propagates() {
        let ok: Outcome<i32> = Outcome::success(1);
        let _ = ok.map_if_matches_async(
            |_| panic!("predicate exploded"),
            |x| async move { x + 1 },
        );
    }

    #[test]
    #[should_panic(expected = "transform exploded")]
    fn transform_panic_propagates_from_poll() {
        let ok: Outcome<i32> = Outcome::success(1);
        let mut fut = task::spawn(ok.map_if_async(true, |x| async move {
            if x > 0 {
                panic!("transform exploded");
            }
            x
        }));
        let _ = fut.poll();
    }
}
