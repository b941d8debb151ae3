//! Failure-path integration tests
//!
//! Under --expect-fail a non-zero exit is the success condition and output
//! comparison is advisory only.

use super::harness::{fixtest, FixtestAssertions, Suite};

#[test]
fn nonzero_exit_passes_under_expect_fail() {
    let suite = Suite::load("expected-fail");
    let result = fixtest(&suite, &["run", ".", "--expect-fail"]);

    result.assert_success();
    result.assert_summary(2, 0);
}

#[test]
fn mismatched_output_is_only_informational() {
    // advisory.test declares output its command never prints
    let suite = Suite::load("expected-fail");
    let result = fixtest(&suite, &["run", ".", "--expect-fail"]);

    result.assert_success();
    result.assert_output_contains("informational");
}

#[test]
fn clean_exit_always_fails_under_expect_fail() {
    let suite = Suite::load("expected-fail-bad");
    let result = fixtest(&suite, &["run", ".", "--expect-fail"]);

    result.assert_failure();
    result.assert_summary(0, 1);
    result.assert_error_contains("succeeded where failure was expected");
}

#[test]
fn expect_fail_suite_fails_without_the_flag() {
    // The same fixtures run through the success path must fail on exit codes
    let suite = Suite::load("expected-fail");
    let result = fixtest(&suite, &["run", "."]);

    result.assert_failure();
    result.assert_summary(0, 2);
    result.assert_error_contains("exited with status");
}
