//! Branch tracing, compiled away unless the `log` feature is on.

#[cfg(feature = "log")]
macro_rules! trace_branch {
    ($($arg:tt)+) => {
        ::log::trace!(target: "outcome_sugars", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace_branch {
    ($($arg:tt)+) => {};
}

pub(crate) use trace_branch;
