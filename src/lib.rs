//! # attest
//!
//! Fluent assertions for Rust tests.
//!
//! Every assertion starts from [`assert_that`], which wraps a borrowed value
//! in a [`Subject`]. Checks are chained on the subject; each check either
//! returns the subject for further chaining or panics with a descriptive
//! failure report.
//!
//! ```rust,ignore
//! use attest::assert_that;
//!
//! assert_that(&user_ids)
//!     .described_as("user ids")
//!     .has_length(3)
//!     .contains(&42)
//!     .is_sorted();
//! ```
//!
//! ## Failure reports
//!
//! A failed check panics with a message built from the expectation, the
//! actual value, an optional `[description]` prefix and the capture-site
//! location:
//!
//! ```text
//! [user ids] expected sequence containing `42`, but got `[1, 7, 9]`
//!  at tests/users.rs:14:5
//! ```
//!
//! `with_failure_message` replaces the templated body entirely;
//! `described_as` only prepends. Both survive navigational calls such as
//! [`Subject::value`] on options.
//!
//! ## Comparison strategies
//!
//! Equality and ordering checks use the value's own `PartialEq`/`PartialOrd`
//! by default. A custom comparator can be installed per chain with
//! `using_comparator` and reverted with `using_default_comparator`:
//!
//! ```rust,ignore
//! assert_that(&name)
//!     .using_comparator(|a, b| a.to_lowercase().cmp(&b.to_lowercase()))
//!     .is_equal_to(&"ALICE".to_string());
//! ```
//!
//! ## Process-wide configuration
//!
//! The [`representation`] module owns the two global switches read when a
//! subject is created: the value-formatting hook and the flag controlling
//! whether failure messages carry the capture-site location.
//!
//! ## Panicking code
//!
//! The "does this code panic" family has its own entry point,
//! [`assert_that_code`], because it owns the closure outcome instead of
//! borrowing a value.

pub mod assertions;
pub mod comparison;
pub mod description;
pub mod failure;
pub mod representation;
pub mod subject;

pub use assertions::panicking::{assert_that_code, CodeSubject};
pub use comparison::{within, within_percentage, Offset, Percentage};
pub use description::Description;
pub use failure::FailureReport;
pub use representation::{
    install_representation, report_caller_locations, reset_representation, Represent,
    StandardRepresentation,
};
pub use subject::{assert_that, Subject};
