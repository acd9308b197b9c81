//! Installing and reverting custom comparators
//!
//! The comparator is per-chain state: installing one changes every equality
//! and ordering check after it, and `using_default_comparator` restores the
//! natural behavior exactly.

use std::cmp::Ordering;

use attest::assert_that;

fn case_insensitive(a: &String, b: &String) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[test]
fn case_insensitive_comparator_drives_equality() {
    let name = String::from("ALICE");
    assert_that(&name)
        .using_comparator(case_insensitive)
        .is_equal_to(&String::from("alice"));
}

#[test]
#[should_panic(expected = "expected `\"alice\"`, but got `\"ALICE\"`")]
fn natural_equality_still_sees_the_case() {
    let name = String::from("ALICE");
    assert_that(&name).is_equal_to(&String::from("alice"));
}

#[test]
fn reverting_restores_natural_ordering() {
    // Install, then revert: the chain behaves as if nothing happened.
    assert_that(&3)
        .using_comparator(|a: &i32, b: &i32| b.cmp(a))
        .using_default_comparator()
        .is_less_than(&5);
}

#[test]
#[should_panic(expected = "expected value less than `5`, but got `3`")]
fn reversed_comparator_flips_ordering_checks() {
    // Under the reversed ordering 3 is greater than 5.
    assert_that(&3)
        .using_comparator(|a: &i32, b: &i32| b.cmp(a))
        .is_less_than(&5);
}

#[test]
fn bounds_are_validated_under_the_installed_comparator() {
    // Reversed ordering: 10 precedes 5, so (10, 5) is a valid range and 7
    // lies inside it.
    assert_that(&7)
        .using_comparator(|a: &i32, b: &i32| b.cmp(a))
        .is_between(&10, &5);
}

#[test]
fn modular_comparator_considers_residues_only() {
    assert_that(&13)
        .using_comparator(|a: &i32, b: &i32| (a % 10).cmp(&(b % 10)))
        .is_equal_to(&3)
        .is_not_equal_to(&14);
}
