//! Process-wide configuration: representation hook and location flag
//!
//! Both switches are global. Everything touching the representation hook
//! stays inside one test function so install/assert/restore runs
//! sequentially; the location test only checks the ` at ` suffix, which the
//! representation hook never affects.

use std::fmt::Debug;
use std::panic::{catch_unwind, AssertUnwindSafe, UnwindSafe};
use std::sync::Arc;

use attest::{
    assert_that, install_representation, report_caller_locations, reset_representation, Represent,
};

fn message_of(check: impl FnOnce() + UnwindSafe) -> String {
    let payload = catch_unwind(check).expect_err("the check should have failed");
    if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else {
        panic!("assertion failures should carry string payloads");
    }
}

struct AngleBrackets;

impl Represent for AngleBrackets {
    fn value(&self, value: &dyn Debug) -> String {
        format!("<<{value:?}>>")
    }
}

#[test]
fn representation_hook_lifecycle() {
    // Chains created before the install keep the standard representation.
    let early_subject = assert_that(&7);

    install_representation(Arc::new(AngleBrackets));

    let decorated = message_of(|| {
        assert_that(&41).is_equal_to(&42);
    });
    assert!(
        decorated.contains("expected `<<42>>`, but got `<<41>>`"),
        "unexpected message: {decorated}"
    );

    let early_message = message_of(AssertUnwindSafe(move || {
        early_subject.is_equal_to(&8);
    }));
    assert!(
        early_message.contains("expected `8`, but got `7`"),
        "unexpected message: {early_message}"
    );

    reset_representation();

    // After the reset, chains created from now on use `{:?}` again.
    let standard = message_of(|| {
        assert_that(&41).is_equal_to(&42);
    });
    assert!(
        standard.contains("expected `42`, but got `41`"),
        "unexpected message: {standard}"
    );
}

#[test]
fn location_flag_controls_the_capture_site_suffix() {
    let with_location = message_of(|| {
        assert_that(&1).is_equal_to(&2);
    });
    assert!(
        with_location.contains("\n at tests/global_config.rs:"),
        "unexpected message: {with_location}"
    );

    report_caller_locations(false);
    let without_location = message_of(|| {
        assert_that(&1).is_equal_to(&2);
    });
    report_caller_locations(true);

    assert!(
        !without_location.contains("\n at "),
        "unexpected message: {without_location}"
    );
}
