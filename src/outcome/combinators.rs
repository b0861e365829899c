//! Synchronous combinators for `Outcome`

use super::Outcome;
use crate::config::configuration;
use crate::trace::trace_branch;
use std::fmt;

impl<T, E> Outcome<T, E> {
    /// Transforms the success value, leaving a failure untouched.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        Outcome {
            inner: self.inner.map(f),
        }
    }

    /// Like [`map`](Self::map), threading `context` into the transformation.
    #[inline]
    pub fn map_with<U, C>(self, f: impl FnOnce(T, C) -> U, context: C) -> Outcome<U, E> {
        self.map(move |value| f(value, context))
    }

    /// Maps the success value only when `condition` is true.
    ///
    /// ```rust
    /// use outcome_sugars::Outcome;
    ///
    /// let four: Outcome<i32, &str> = Outcome::success(4);
    /// assert_eq!(four.map_if(true, |x| x * 2), Outcome::success(8));
    /// assert_eq!(four.map_if(false, |x| x * 2), Outcome::success(4));
    /// ```
    pub fn map_if(self, condition: bool, f: impl FnOnce(T) -> T) -> Self {
        self.map_when(condition, f)
    }

    /// Like [`map_if`](Self::map_if), threading `context` into the transformation.
    pub fn map_if_with<C>(self, condition: bool, f: impl FnOnce(T, C) -> T, context: C) -> Self {
        self.map_when(condition, move |value| f(value, context))
    }

    /// Maps the success value only when `predicate` accepts it.
    ///
    /// The predicate is never evaluated on a failure.
    pub fn map_if_matches(
        self,
        predicate: impl FnOnce(&T) -> bool,
        f: impl FnOnce(T) -> T,
    ) -> Self {
        let matches = self.as_value().is_some_and(predicate);
        self.map_when(matches, f)
    }

    /// Like [`map_if_matches`](Self::map_if_matches), handing `context` to both
    /// the predicate and the transformation.
    pub fn map_if_matches_with<C>(
        self,
        predicate: impl FnOnce(&T, &C) -> bool,
        f: impl FnOnce(T, C) -> T,
        context: C,
    ) -> Self {
        let matches = self
            .as_value()
            .is_some_and(|value| predicate(value, &context));
        self.map_when(matches, move |value| f(value, context))
    }

    fn map_when(self, condition: bool, f: impl FnOnce(T) -> T) -> Self {
        if !condition {
            trace_branch!("map_if: condition not met, outcome passed through");
            return self;
        }
        self.map(f)
    }

    /// Chains a computation that may itself fail.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self.inner {
            Ok(value) => f(value),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Runs a side effect on the success value.
    pub fn tap(self, f: impl FnOnce(&T)) -> Self {
        if let Ok(value) = &self.inner {
            f(value);
        }
        self
    }

    /// Runs a side effect on the error.
    pub fn tap_error(self, f: impl FnOnce(&E)) -> Self {
        if let Err(error) = &self.inner {
            f(error);
        }
        self
    }

    /// Fails with `error` when the success value does not satisfy `predicate`.
    pub fn ensure(self, predicate: impl FnOnce(&T) -> bool, error: E) -> Self {
        self.ensure_with(predicate, move |_| error)
    }

    /// Like [`ensure`](Self::ensure), building the error from the rejected value.
    pub fn ensure_with(
        self,
        predicate: impl FnOnce(&T) -> bool,
        make_error: impl FnOnce(&T) -> E,
    ) -> Self {
        if let Ok(value) = &self.inner {
            if !predicate(value) {
                return Self::failure(make_error(value));
            }
        }
        self
    }

    /// Transforms the error, leaving a success untouched.
    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        Outcome {
            inner: self.inner.map_err(f),
        }
    }

    /// Gives a failure the chance to recover.
    pub fn compensate<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self.inner {
            Ok(value) => Outcome::success(value),
            Err(error) => f(error),
        }
    }

    /// Collapses the outcome into a single value.
    pub fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(E) -> R) -> R {
        match self.inner {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Collects every value, or fails with every error message joined by the
    /// configured [`error_separator`](crate::Configuration::error_separator).
    ///
    /// ```rust
    /// use outcome_sugars::Outcome;
    ///
    /// let all = Outcome::combine(vec![
    ///     Outcome::success(1),
    ///     Outcome::failure("first"),
    ///     Outcome::failure("second"),
    /// ]);
    /// assert_eq!(all, Outcome::failure("first, second".to_string()));
    /// ```
    pub fn combine<I>(outcomes: I) -> Outcome<Vec<T>, String>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome.inner {
                Ok(value) => values.push(value),
                Err(error) => errors.push(error.to_string()),
            }
        }

        if errors.is_empty() {
            Outcome::success(values)
        } else {
            Outcome::failure(errors.join(&configuration().error_separator))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn map_if_false_skips_transform() {
        let called = Cell::new(false);
        let four: Outcome<i32> = Outcome::success(4);
        let out = four.map_if(false, |x| {
            called.set(true);
            x * 2
        });
        assert_eq!(out, Outcome::success(4));
        assert!(!called.get());
    }

    #[test]
    fn map_if_true_on_failure_keeps_failure() {
        let called = Cell::new(false);
        let bad: Outcome<i32> = Outcome::failure("bad".to_string());
        let out = bad.map_if(true, |x| {
            called.set(true);
            x * 2
        });
        assert_eq!(out, Outcome::failure("bad".to_string()));
        assert!(!called.get());
    }

    #[test]
    fn predicate_not_evaluated_on_failure() {
        let evaluated = Cell::new(false);
        let bad: Outcome<i32, &str> = Outcome::failure("bad");
        let out = bad.map_if_matches(
            |_| {
                evaluated.set(true);
                true
            },
            |x| x + 1,
        );
        assert_eq!(out, Outcome::failure("bad"));
        assert!(!evaluated.get());
    }

    #[test]
    fn predicate_decides_mapping() {
        let five: Outcome<i32> = Outcome::success(5);
        let fifteen: Outcome<i32> = Outcome::success(15);
        assert_eq!(five.map_if_matches(|x| *x > 10, |x| x + 1), Outcome::success(5));
        assert_eq!(fifteen.map_if_matches(|x| *x > 10, |x| x + 1), Outcome::success(16));
    }

    #[test]
    fn context_reaches_predicate_and_transform() {
        let three: Outcome<i32> = Outcome::success(3);
        let out = three
            .clone()
            .map_if_matches_with(|x, limit: &i32| x < limit, |x, limit| x + limit, 10);
        assert_eq!(out, Outcome::success(13));

        let out = three.map_if_with(true, |x, step: i32| x + step, 2);
        assert_eq!(out, Outcome::success(5));
    }

    #[test]
    #[should_panic(expected = "transform exploded")]
    fn transform_panic_propagates() {
        let ok: Outcome<i32> = Outcome::success(1);
        let _ = ok.map_if(true, |_| panic!("transform exploded"));
    }

    #[test]
    fn bind_and_ensure() {
        let text: Outcome<&str> = Outcome::success("12");
        let parsed = text.bind(|s| Outcome::from(s.parse::<i32>().map_err(|e| e.to_string())));
        assert_eq!(parsed, Outcome::success(12));

        let checked = parsed.ensure(|v| *v > 100, "too small".to_string());
        assert_eq!(checked, Outcome::failure("too small".to_string()));
    }

    #[test]
    fn tap_runs_on_matching_side_only() {
        let seen = Cell::new(0);
        let ok: Outcome<i32> = Outcome::success(7);
        let ok = ok.tap(|v| seen.set(*v)).tap_error(|_| seen.set(-1));
        assert_eq!(seen.get(), 7);
        assert!(ok.is_success());
    }

    #[test]
    fn compensate_recovers() {
        let bad: Outcome<i32, &str> = Outcome::failure("bad");
        let out: Outcome<i32, ()> = bad.compensate(|_| Outcome::success(0));
        assert_eq!(out, Outcome::success(0));
    }

    #[test]
    fn fold_and_map_error() {
        let bad: Outcome<i32, &str> = Outcome::failure("bad");
        let len = bad.map_error(str::len).fold(|v| v as usize, |len| len);
        assert_eq!(len, 3);
    }

    #[test]
    fn combine_collects_values() {
        let parts: Vec<Outcome<i32, &str>> = vec![Outcome::success(1), Outcome::success(2)];
        assert_eq!(Outcome::combine(parts), Outcome::success(vec![1, 2]));
    }
}
