//! The fluent subject
//!
//! [`assert_that`] wraps a borrowed value in a [`Subject`], the carrier of
//! one fluent chain. The subject holds the value under test plus the
//! presentation state of the chain: an optional description, an optional
//! overriding failure message, the value representation and location flag
//! snapshotted from the process-wide configuration at construction, and the
//! optional comparator installed with `using_comparator`.
//!
//! Checks are defined in per-type impl blocks (see [`crate::assertions`]);
//! each takes the subject by value and returns it unchanged on success, so
//! chains read as one expression:
//!
//! ```rust,ignore
//! assert_that(&total)
//!     .described_as("order total")
//!     .is_greater_than(&0)
//!     .is_at_most(&5_000);
//! ```
//!
//! Navigational calls (`value` on options, `ok_value`/`err_value` on
//! results) rebind the chain to a contained value and keep its presentation
//! state; only the comparator is dropped, because the value type changes.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::panic::Location;
use std::sync::Arc;

use crate::comparison;
use crate::description::Description;
use crate::failure::FailureReport;
use crate::representation::{self, Represent};

/// One value under test, plus the presentation state of its chain.
pub struct Subject<'a, T: ?Sized> {
    actual: &'a T,
    description: Option<Description>,
    message_override: Option<String>,
    representation: Arc<dyn Represent>,
    location: Option<&'static Location<'static>>,
    comparator: Option<Box<dyn Fn(&T, &T) -> Ordering + 'a>>,
}

/// Start a fluent chain on a borrowed value.
///
/// Captures the capture-site location (when location reporting is enabled)
/// and the currently installed representation; both stay fixed for the
/// lifetime of the chain.
#[track_caller]
pub fn assert_that<T: ?Sized>(actual: &T) -> Subject<'_, T> {
    let location = if representation::locations_enabled() {
        Some(Location::caller())
    } else {
        None
    };
    Subject {
        actual,
        description: None,
        message_override: None,
        representation: representation::active(),
        location,
        comparator: None,
    }
}

impl<'a, T: ?Sized> Subject<'a, T> {
    /// The borrowed value under test.
    pub fn actual(&self) -> &'a T {
        self.actual
    }

    /// Label the chain; the label becomes the `[bracketed]` prefix of every
    /// failure message it produces.
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Description::new(description));
        self
    }

    /// Replace the templated failure body with a fixed message. The
    /// description prefix and location suffix still apply.
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.message_override = Some(message.into());
        self
    }

    /// Install a comparator used by equality and ordering checks instead of
    /// the value's natural `PartialEq`/`PartialOrd`.
    pub fn using_comparator(mut self, comparator: impl Fn(&T, &T) -> Ordering + 'a) -> Self {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Remove an installed comparator, restoring natural comparison.
    pub fn using_default_comparator(mut self) -> Self {
        self.comparator = None;
        self
    }

    /// Seed a failure report with this chain's presentation state.
    ///
    /// Built-in checks call this on their failure path; assertion extensions
    /// should do the same so their reports render identically.
    pub fn report(&self) -> FailureReport {
        FailureReport::new(
            self.description.clone(),
            self.message_override.clone(),
            Arc::clone(&self.representation),
            self.location,
        )
    }

    pub(crate) fn compare(&self, a: &T, b: &T) -> Option<Ordering>
    where
        T: PartialOrd,
    {
        comparison::resolve_order(self.comparator.as_deref(), a, b)
    }

    pub(crate) fn check_eq(&self, a: &T, b: &T) -> bool
    where
        T: PartialEq,
    {
        comparison::resolve_eq(self.comparator.as_deref(), a, b)
    }

    /// Rebind the chain to a contained value (navigational calls). The
    /// comparator does not carry over: it was typed against `T`.
    pub(crate) fn map_actual<U: ?Sized>(self, value: &'a U) -> Subject<'a, U> {
        Subject {
            actual: value,
            description: self.description,
            message_override: self.message_override,
            representation: self.representation,
            location: self.location,
            comparator: None,
        }
    }
}

impl<'a, T: Debug + ?Sized> Subject<'a, T> {
    /// Check an arbitrary predicate. `expectation` is the phrase rendered
    /// after `expected ` when the predicate rejects the value.
    pub fn satisfies(self, predicate: impl FnOnce(&T) -> bool, expectation: &str) -> Self {
        if predicate(self.actual) {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual);
        report
            .expected(expectation.to_string())
            .but(format!("got `{actual_repr}`"))
            .fail()
    }
}

impl<'a, T: Debug + PartialEq + ?Sized> Subject<'a, T> {
    /// Equality through the active comparison strategy.
    pub fn is_equal_to(self, expected: &T) -> Self {
        if self.check_eq(self.actual, expected) {
            return self;
        }
        let report = self.report();
        let expected_repr = report.repr(expected);
        let actual_repr = report.repr(self.actual);
        report
            .expected(format!("`{expected_repr}`"))
            .but(format!("got `{actual_repr}`"))
            .fail()
    }

    /// Inequality through the active comparison strategy.
    pub fn is_not_equal_to(self, other: &T) -> Self {
        if !self.check_eq(self.actual, other) {
            return self;
        }
        let report = self.report();
        let other_repr = report.repr(other);
        report
            .expected(format!("value different from `{other_repr}`"))
            .but("got that exact value")
            .fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_passes_and_chains() {
        assert_that(&41).is_equal_to(&41).is_not_equal_to(&42);
    }

    #[test]
    #[should_panic(expected = "expected `42`, but got `41`")]
    fn test_equality_failure_reports_both_values() {
        assert_that(&41).is_equal_to(&42);
    }

    #[test]
    #[should_panic(expected = "[the answer] expected `42`, but got `41`")]
    fn test_description_prefixes_failures() {
        assert_that(&41).described_as("the answer").is_equal_to(&42);
    }

    #[test]
    #[should_panic(expected = "the answer drifted")]
    fn test_override_replaces_template() {
        assert_that(&41)
            .with_failure_message("the answer drifted")
            .is_equal_to(&42);
    }

    #[test]
    #[should_panic(expected = "expected value different from `41`, but got that exact value")]
    fn test_inequality_failure() {
        assert_that(&41).is_not_equal_to(&41);
    }

    #[test]
    fn test_comparator_drives_equality() {
        // Modular comparator: 3 and 13 are equal mod 10.
        assert_that(&13)
            .using_comparator(|a, b| (a % 10).cmp(&(b % 10)))
            .is_equal_to(&3);
    }

    #[test]
    #[should_panic(expected = "expected `3`, but got `13`")]
    fn test_default_comparator_restores_natural_equality() {
        assert_that(&13)
            .using_comparator(|a, b| (a % 10).cmp(&(b % 10)))
            .using_default_comparator()
            .is_equal_to(&3);
    }

    #[test]
    fn test_satisfies_accepts() {
        assert_that(&10).satisfies(|n| n % 2 == 0, "an even number");
    }

    #[test]
    #[should_panic(expected = "expected an even number, but got `9`")]
    fn test_satisfies_rejects_with_expectation_phrase() {
        assert_that(&9).satisfies(|n| n % 2 == 0, "an even number");
    }
}
