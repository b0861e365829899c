//! Tests for process-wide configuration
//!
//! Kept to a single test: the configuration is global to the test binary.

use outcome_sugars::{configuration, configure, Configuration, Outcome};

#[test]
fn test_configured_separator_joins_errors() {
    assert_eq!(configuration(), Configuration::default());

    configure(|c| c.error_separator = " | ".into());
    let out = Outcome::combine(vec![
        Outcome::<(), &str>::failure("disk full"),
        Outcome::failure("quota exceeded"),
    ]);
    assert_eq!(out, Outcome::failure("disk full | quota exceeded".to_string()));

    configure(|c| *c = Configuration::default());
    assert_eq!(configuration().error_separator, ", ");
}
