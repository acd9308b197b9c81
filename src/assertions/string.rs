//! String checks
//!
//! The checking logic works on `&str`; the impl blocks for `str`, `String`
//! and `&str` subjects are thin delegates so every common way of wrapping a
//! string gets the same surface. `has_length` counts bytes, matching
//! `str::len`. Pattern checks compile the pattern on every call; an invalid
//! pattern is a usage error, not an assertion failure.

use regex::Regex;

use crate::failure::{usage_error, FailureReport};
use crate::subject::Subject;

fn check_contains(actual: &str, substring: &str, report: impl FnOnce() -> FailureReport) {
    if actual.contains(substring) {
        return;
    }
    let report = report();
    let substring_repr = report.repr(substring);
    let actual_repr = report.repr(actual);
    report
        .expected(format!("string containing `{substring_repr}`"))
        .but(format!("got `{actual_repr}`"))
        .fail()
}

fn check_does_not_contain(actual: &str, substring: &str, report: impl FnOnce() -> FailureReport) {
    if !actual.contains(substring) {
        return;
    }
    let report = report();
    let substring_repr = report.repr(substring);
    let actual_repr = report.repr(actual);
    report
        .expected(format!("string not containing `{substring_repr}`"))
        .but(format!("got `{actual_repr}`"))
        .fail()
}

fn check_starts_with(actual: &str, prefix: &str, report: impl FnOnce() -> FailureReport) {
    if actual.starts_with(prefix) {
        return;
    }
    let report = report();
    let prefix_repr = report.repr(prefix);
    let actual_repr = report.repr(actual);
    report
        .expected(format!("string starting with `{prefix_repr}`"))
        .but(format!("got `{actual_repr}`"))
        .fail()
}

fn check_ends_with(actual: &str, suffix: &str, report: impl FnOnce() -> FailureReport) {
    if actual.ends_with(suffix) {
        return;
    }
    let report = report();
    let suffix_repr = report.repr(suffix);
    let actual_repr = report.repr(actual);
    report
        .expected(format!("string ending with `{suffix_repr}`"))
        .but(format!("got `{actual_repr}`"))
        .fail()
}

fn check_length(actual: &str, expected: usize, report: impl FnOnce() -> FailureReport) {
    if actual.len() == expected {
        return;
    }
    let report = report();
    let actual_repr = report.repr(actual);
    let length = actual.len();
    report
        .expected(format!("length `{expected}`"))
        .but(format!("got length `{length}` for `{actual_repr}`"))
        .fail()
}

fn check_empty(actual: &str, report: impl FnOnce() -> FailureReport) {
    if actual.is_empty() {
        return;
    }
    let report = report();
    let actual_repr = report.repr(actual);
    report
        .expected("empty string")
        .but(format!("got `{actual_repr}`"))
        .fail()
}

fn check_not_empty(actual: &str, report: impl FnOnce() -> FailureReport) {
    if !actual.is_empty() {
        return;
    }
    report().expected("non-empty string").but("got `\"\"`").fail()
}

fn check_eq_ignoring_case(actual: &str, expected: &str, report: impl FnOnce() -> FailureReport) {
    if actual.to_lowercase() == expected.to_lowercase() {
        return;
    }
    let report = report();
    let expected_repr = report.repr(expected);
    let actual_repr = report.repr(actual);
    report
        .expected(format!("`{expected_repr}` ignoring case"))
        .but(format!("got `{actual_repr}`"))
        .fail()
}

fn check_pattern(
    actual: &str,
    pattern: &str,
    should_match: bool,
    report: impl FnOnce() -> FailureReport,
) {
    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(error) => usage_error(format!("invalid pattern `{pattern}`: {error}")),
    };
    if regex.is_match(actual) == should_match {
        return;
    }
    let report = report();
    let actual_repr = report.repr(actual);
    let phrase = if should_match {
        format!("string matching `{pattern}`")
    } else {
        format!("string not matching `{pattern}`")
    };
    report
        .expected(phrase)
        .but(format!("got `{actual_repr}`"))
        .fail()
}

impl<'a> Subject<'a, str> {
    pub fn contains(self, substring: &str) -> Self {
        check_contains(self.actual(), substring, || self.report());
        self
    }

    pub fn does_not_contain(self, substring: &str) -> Self {
        check_does_not_contain(self.actual(), substring, || self.report());
        self
    }

    pub fn starts_with(self, prefix: &str) -> Self {
        check_starts_with(self.actual(), prefix, || self.report());
        self
    }

    pub fn ends_with(self, suffix: &str) -> Self {
        check_ends_with(self.actual(), suffix, || self.report());
        self
    }

    /// Byte length, as reported by `str::len`.
    pub fn has_length(self, expected: usize) -> Self {
        check_length(self.actual(), expected, || self.report());
        self
    }

    pub fn is_empty(self) -> Self {
        check_empty(self.actual(), || self.report());
        self
    }

    pub fn is_not_empty(self) -> Self {
        check_not_empty(self.actual(), || self.report());
        self
    }

    pub fn is_equal_to_ignoring_case(self, expected: &str) -> Self {
        check_eq_ignoring_case(self.actual(), expected, || self.report());
        self
    }

    pub fn matches_pattern(self, pattern: &str) -> Self {
        check_pattern(self.actual(), pattern, true, || self.report());
        self
    }

    pub fn does_not_match_pattern(self, pattern: &str) -> Self {
        check_pattern(self.actual(), pattern, false, || self.report());
        self
    }
}

impl<'a> Subject<'a, String> {
    pub fn contains(self, substring: &str) -> Self {
        check_contains(self.actual(), substring, || self.report());
        self
    }

    pub fn does_not_contain(self, substring: &str) -> Self {
        check_does_not_contain(self.actual(), substring, || self.report());
        self
    }

    pub fn starts_with(self, prefix: &str) -> Self {
        check_starts_with(self.actual(), prefix, || self.report());
        self
    }

    pub fn ends_with(self, suffix: &str) -> Self {
        check_ends_with(self.actual(), suffix, || self.report());
        self
    }

    /// Byte length, as reported by `str::len`.
    pub fn has_length(self, expected: usize) -> Self {
        check_length(self.actual(), expected, || self.report());
        self
    }

    pub fn is_empty(self) -> Self {
        check_empty(self.actual(), || self.report());
        self
    }

    pub fn is_not_empty(self) -> Self {
        check_not_empty(self.actual(), || self.report());
        self
    }

    pub fn is_equal_to_ignoring_case(self, expected: &str) -> Self {
        check_eq_ignoring_case(self.actual(), expected, || self.report());
        self
    }

    pub fn matches_pattern(self, pattern: &str) -> Self {
        check_pattern(self.actual(), pattern, true, || self.report());
        self
    }

    pub fn does_not_match_pattern(self, pattern: &str) -> Self {
        check_pattern(self.actual(), pattern, false, || self.report());
        self
    }
}

impl<'a, 'b> Subject<'a, &'b str> {
    pub fn contains(self, substring: &str) -> Self {
        check_contains(self.actual(), substring, || self.report());
        self
    }

    pub fn does_not_contain(self, substring: &str) -> Self {
        check_does_not_contain(self.actual(), substring, || self.report());
        self
    }

    pub fn starts_with(self, prefix: &str) -> Self {
        check_starts_with(self.actual(), prefix, || self.report());
        self
    }

    pub fn ends_with(self, suffix: &str) -> Self {
        check_ends_with(self.actual(), suffix, || self.report());
        self
    }

    /// Byte length, as reported by `str::len`.
    pub fn has_length(self, expected: usize) -> Self {
        check_length(self.actual(), expected, || self.report());
        self
    }

    pub fn is_empty(self) -> Self {
        check_empty(self.actual(), || self.report());
        self
    }

    pub fn is_not_empty(self) -> Self {
        check_not_empty(self.actual(), || self.report());
        self
    }

    pub fn is_equal_to_ignoring_case(self, expected: &str) -> Self {
        check_eq_ignoring_case(self.actual(), expected, || self.report());
        self
    }

    pub fn matches_pattern(self, pattern: &str) -> Self {
        check_pattern(self.actual(), pattern, true, || self.report());
        self
    }

    pub fn does_not_match_pattern(self, pattern: &str) -> Self {
        check_pattern(self.actual(), pattern, false, || self.report());
        self
    }
}
