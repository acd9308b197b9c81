//! Checks on panicking code
//!
//! [`assert_that_code`] runs a closure under `catch_unwind` and wraps the
//! outcome in a [`CodeSubject`]. Unlike the borrowing [`Subject`](crate::Subject),
//! the code subject owns its outcome: the panic payload text when the
//! closure panicked (`&str` and `String` payloads are captured verbatim,
//! anything else becomes an opaque marker), or nothing when it returned.
//!
//! The default panic hook still prints while the closure unwinds; that
//! output is noise on the test's stderr, not part of the assertion.

use std::any::Any;
use std::panic::{catch_unwind, Location, UnwindSafe};
use std::sync::Arc;

use crate::description::Description;
use crate::failure::FailureReport;
use crate::representation::{self, Represent};

/// Outcome of one closure run, plus the presentation state of its chain.
pub struct CodeSubject {
    outcome: Result<(), String>,
    description: Option<Description>,
    message_override: Option<String>,
    representation: Arc<dyn Represent>,
    location: Option<&'static Location<'static>>,
}

/// Run `code` and start a fluent chain on its outcome.
#[track_caller]
pub fn assert_that_code<F>(code: F) -> CodeSubject
where
    F: FnOnce() + UnwindSafe,
{
    let location = if representation::locations_enabled() {
        Some(Location::caller())
    } else {
        None
    };
    let representation = representation::active();
    let outcome = catch_unwind(code).map_err(payload_text);
    CodeSubject {
        outcome,
        description: None,
        message_override: None,
        representation,
        location,
    }
}

fn payload_text(payload: Box<dyn Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        String::from("<non-string panic payload>")
    }
}

impl CodeSubject {
    /// Label the chain; same protocol as [`Subject::described_as`](crate::Subject::described_as).
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Description::new(description));
        self
    }

    /// Replace the templated failure body; same protocol as
    /// [`Subject::with_failure_message`](crate::Subject::with_failure_message).
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.message_override = Some(message.into());
        self
    }

    fn report(&self) -> FailureReport {
        FailureReport::new(
            self.description.clone(),
            self.message_override.clone(),
            Arc::clone(&self.representation),
            self.location,
        )
    }

    pub fn panics(self) -> Self {
        if self.outcome.is_err() {
            return self;
        }
        self.report()
            .expected("code to panic")
            .but("it returned normally")
            .fail()
    }

    pub fn does_not_panic(self) -> Self {
        match &self.outcome {
            Ok(()) => self,
            Err(message) => {
                let report = self.report();
                let message_repr = report.repr(message);
                report
                    .expected("code to return normally")
                    .but(format!("it panicked with `{message_repr}`"))
                    .fail()
            }
        }
    }

    /// Passes iff the closure panicked and the payload text equals `expected`.
    pub fn panics_with_message(self, expected: &str) -> Self {
        match &self.outcome {
            Err(message) if message == expected => self,
            Err(message) => {
                let report = self.report();
                let expected_repr = report.repr(expected);
                let message_repr = report.repr(message);
                report
                    .expected(format!("panic message `{expected_repr}`"))
                    .but(format!("got `{message_repr}`"))
                    .fail()
            }
            Ok(()) => {
                let report = self.report();
                let expected_repr = report.repr(expected);
                report
                    .expected(format!("panic message `{expected_repr}`"))
                    .but("the code returned normally")
                    .fail()
            }
        }
    }

    /// Passes iff the closure panicked and the payload text contains `fragment`.
    pub fn panics_with_message_containing(self, fragment: &str) -> Self {
        match &self.outcome {
            Err(message) if message.contains(fragment) => self,
            Err(message) => {
                let report = self.report();
                let fragment_repr = report.repr(fragment);
                let message_repr = report.repr(message);
                report
                    .expected(format!("panic message containing `{fragment_repr}`"))
                    .but(format!("got `{message_repr}`"))
                    .fail()
            }
            Ok(()) => {
                let report = self.report();
                let fragment_repr = report.repr(fragment);
                report
                    .expected(format!("panic message containing `{fragment_repr}`"))
                    .but("the code returned normally")
                    .fail()
            }
        }
    }
}
