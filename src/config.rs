//! Process-wide configuration
//!
//! Only [`Outcome::combine`](crate::Outcome::combine) reads this; every other
//! combinator is free of shared state.

use parking_lot::{const_rwlock, RwLock};
use std::borrow::Cow;

static CONFIGURATION: RwLock<Configuration> = const_rwlock(Configuration::new());

/// Settings shared by every outcome in the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Joins error messages when several failures are combined into one.
    pub error_separator: Cow<'static, str>,
}

impl Configuration {
    const fn new() -> Self {
        Self {
            error_separator: Cow::Borrowed(", "),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a snapshot of the current configuration.
pub fn configuration() -> Configuration {
    CONFIGURATION.read().clone()
}

/// Updates the configuration in place.
///
/// ```rust
/// use outcome_sugars::{configure, configuration};
///
/// configure(|c| c.error_separator = "; ".into());
/// assert_eq!(configuration().error_separator, "; ");
/// # configure(|c| *c = Default::default());
/// ```
pub fn configure(f: impl FnOnce(&mut Configuration)) {
    let mut guard = CONFIGURATION.write();
    f(&mut guard);
}
