//! Malformed-fixture integration tests
//!
//! Parse errors abort the whole batch with a descriptive message, before any
//! command is spawned.

use super::harness::{fixtest, FixtestAssertions, Suite};

#[test]
fn duplicate_run_directive_is_rejected() {
    let suite = Suite::load("parse-error-dup");
    let result = fixtest(&suite, &["run", "."]);

    result.assert_failure();
    result.assert_error_contains("RUN directive found multiple times");
    result.assert_error_contains("twice.test");
}

#[test]
fn empty_fixture_is_rejected() {
    let suite = Suite::load("parse-error-empty");
    let result = fixtest(&suite, &["run", "."]);

    result.assert_failure();
    result.assert_error_contains("is empty");
}

#[test]
fn short_file_eq_directive_is_a_descriptive_error() {
    let suite = Suite::load("parse-error-arity");
    let result = fixtest(&suite, &["run", "."]);

    result.assert_failure();
    result.assert_error_contains("CHECK-FILE-EQ:");
    result.assert_error_contains("expects 2 argument(s), found 1");
}

#[test]
fn parse_errors_surface_in_list_too() {
    let suite = Suite::load("parse-error-dup");
    let result = fixtest(&suite, &["list", "."]);

    result.assert_failure();
    result.assert_error_contains("RUN directive found multiple times");
}
