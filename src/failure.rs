//! Failure report construction
//!
//! Every failed check goes through one pipeline: a [`FailureReport`] is
//! seeded with the chain's presentation state (description, overriding
//! message, representation, capture-site location), the check fills in the
//! `expected`/`but` phrases of the templated body, and [`FailureReport::fail`]
//! renders and panics.
//!
//! Message assembly rules:
//!
//! 1. The body is the overriding message when one was set, otherwise
//!    `expected {expected}` followed by `, but {but}` when a `but` phrase is
//!    present.
//! 2. A `[description] ` prefix is prepended when the chain was described.
//! 3. An ` at file:line:column` suffix is appended when a capture-site
//!    location was recorded.
//!
//! Precondition violations (invalid tolerances, invalid patterns, empty
//! expected-value sets, inverted bounds) do not use the template at all; they
//! panic through [`usage_error`] with a distinct prefix so a broken test is
//! never mistaken for a failing one.

use std::fmt::Debug;
use std::fmt::Write as _;
use std::panic::Location;
use std::sync::Arc;

use crate::description::Description;
use crate::representation::Represent;

/// One failure in the making.
///
/// Public so assertion extensions built on top of [`Subject`](crate::Subject)
/// can produce reports indistinguishable from the built-in checks.
pub struct FailureReport {
    description: Option<Description>,
    message_override: Option<String>,
    representation: Arc<dyn Represent>,
    location: Option<&'static Location<'static>>,
    expected: Option<String>,
    but: Option<String>,
}

impl FailureReport {
    pub(crate) fn new(
        description: Option<Description>,
        message_override: Option<String>,
        representation: Arc<dyn Represent>,
        location: Option<&'static Location<'static>>,
    ) -> Self {
        Self {
            description,
            message_override,
            representation,
            location,
            expected: None,
            but: None,
        }
    }

    /// Set the expectation phrase, completing `expected {phrase}`.
    pub fn expected(mut self, phrase: impl Into<String>) -> Self {
        self.expected = Some(phrase.into());
        self
    }

    /// Set the outcome phrase, completing `, but {phrase}`.
    pub fn but(mut self, phrase: impl Into<String>) -> Self {
        self.but = Some(phrase.into());
        self
    }

    /// Format a value through the chain's representation.
    pub fn repr<V: Debug + ?Sized>(&self, value: &V) -> String {
        self.representation.value(&value)
    }

    /// Assemble the final message without panicking.
    pub fn render(&self) -> String {
        let body = match &self.message_override {
            Some(message) => message.clone(),
            None => {
                let mut body = format!(
                    "expected {}",
                    self.expected.as_deref().unwrap_or("<unspecified expectation>")
                );
                if let Some(but) = &self.but {
                    body.push_str(", but ");
                    body.push_str(but);
                }
                body
            }
        };
        let mut message = match &self.description {
            Some(description) => format!("[{description}] {body}"),
            None => body,
        };
        if let Some(location) = self.location {
            let _ = write!(
                message,
                "\n at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }
        message
    }

    /// Render and panic. The panic is the assertion failure.
    #[cold]
    pub fn fail(self) -> ! {
        panic!("{}", self.render())
    }
}

/// Abort the current check because the caller misused the assertion API.
///
/// This is the precondition-violation channel: it panics immediately with a
/// prefix distinct from assertion failures and never goes through the
/// templated report.
#[cold]
pub fn usage_error(message: impl AsRef<str>) -> ! {
    panic!("invalid assertion usage: {}", message.as_ref())
}
