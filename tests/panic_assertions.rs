//! Checks on panicking code, end to end

use attest::assert_that_code;

fn checked_divide(a: u32, b: u32) -> u32 {
    if b == 0 {
        panic!("division by zero");
    }
    a / b
}

#[test]
fn panicking_branch_is_observed() {
    assert_that_code(|| {
        checked_divide(1, 0);
    })
    .panics()
    .panics_with_message("division by zero")
    .panics_with_message_containing("zero");
}

#[test]
fn normal_branch_is_observed() {
    assert_that_code(|| {
        checked_divide(4, 2);
    })
    .does_not_panic();
}

#[test]
#[should_panic(expected = "expected panic message `\"division by one\"`, but got `\"division by zero\"`")]
fn wrong_message_is_reported_with_both_texts() {
    assert_that_code(|| {
        checked_divide(1, 0);
    })
    .panics_with_message("division by one");
}

#[test]
#[should_panic(expected = "[divider] expected code to panic, but it returned normally")]
fn described_code_chains_report_the_description() {
    assert_that_code(|| {
        checked_divide(4, 2);
    })
    .described_as("divider")
    .panics();
}

#[test]
fn formatted_panic_payloads_are_captured() {
    assert_that_code(|| panic!("limit {} exceeded", 5))
        .panics_with_message("limit 5 exceeded");
}
