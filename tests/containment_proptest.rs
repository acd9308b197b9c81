//! Property-based tests for the comparison predicates
//!
//! Each property states the exact pass/fail condition of a check and
//! verifies it against a direct computation over randomly generated inputs.

use std::panic::{catch_unwind, UnwindSafe};
use std::sync::Once;

use proptest::prelude::*;

use attest::{assert_that, within};

/// Silence the default panic hook once; these properties trigger thousands
/// of caught assertion failures and the hook would flood stderr.
fn quiet_panics() {
    static QUIET: Once = Once::new();
    QUIET.call_once(|| {
        std::panic::set_hook(Box::new(|_| {}));
    });
}

fn passes(check: impl FnOnce() + UnwindSafe) -> bool {
    quiet_panics();
    catch_unwind(check).is_ok()
}

proptest! {
    #[test]
    fn between_holds_exactly_on_the_inclusive_range(
        x in -1000i32..1000,
        a in -1000i32..1000,
        b in -1000i32..1000,
    ) {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        let expected = lower <= x && x <= upper;
        let outcome = passes(move || {
            assert_that(&x).is_between(&lower, &upper);
        });
        prop_assert_eq!(outcome, expected);
    }

    #[test]
    fn strictly_between_excludes_both_ends(
        x in -1000i32..1000,
        a in -1000i32..1000,
        b in -1000i32..1000,
    ) {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        let expected = lower < x && x < upper;
        let outcome = passes(move || {
            assert_that(&x).is_strictly_between(&lower, &upper);
        });
        prop_assert_eq!(outcome, expected);
    }

    #[test]
    fn close_to_holds_exactly_within_the_offset(
        actual in -1000i64..1000,
        expected in -1000i64..1000,
        offset in 0i64..2500,
    ) {
        let should_pass = (actual - expected).abs() <= offset;
        let outcome = passes(move || {
            assert_that(&actual).is_close_to(expected, within(offset));
        });
        prop_assert_eq!(outcome, should_pass);
    }

    #[test]
    fn not_close_to_is_the_exact_complement(
        actual in -1000i64..1000,
        expected in -1000i64..1000,
        offset in 0i64..2500,
    ) {
        let close = passes(move || {
            assert_that(&actual).is_close_to(expected, within(offset));
        });
        let far = passes(move || {
            assert_that(&actual).is_not_close_to(expected, within(offset));
        });
        prop_assert_ne!(close, far);
    }

    #[test]
    fn equality_is_reflexive(x in any::<i32>()) {
        assert_that(&x).is_equal_to(&x);
    }

    #[test]
    fn equality_is_symmetric(a in any::<i32>(), b in any::<i32>()) {
        let forward = passes(move || {
            assert_that(&a).is_equal_to(&b);
        });
        let backward = passes(move || {
            assert_that(&b).is_equal_to(&a);
        });
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn equality_is_transitive(a in 0i32..3, b in 0i32..3, c in 0i32..3) {
        // The tiny domain makes equal pairs common enough to exercise the
        // transitive case.
        let ab = passes(move || {
            assert_that(&a).is_equal_to(&b);
        });
        let bc = passes(move || {
            assert_that(&b).is_equal_to(&c);
        });
        if ab && bc {
            assert_that(&a).is_equal_to(&c);
        }
    }

    #[test]
    fn contains_only_ignores_the_order_of_expected_values(
        values in proptest::collection::vec(0i32..20, 1..8),
    ) {
        let mut reversed = values.clone();
        reversed.reverse();
        assert_that(&values).contains_only(&values);
        assert_that(&values).contains_only(&reversed);
    }

    #[test]
    fn contains_exactly_is_order_sensitive(
        values in proptest::collection::vec(0i32..100, 2..8),
    ) {
        let mut reversed = values.clone();
        reversed.reverse();
        let same_sequence = values == reversed;
        let actual = values.clone();
        let outcome = passes(move || {
            assert_that(&actual).contains_exactly(&reversed);
        });
        prop_assert_eq!(outcome, same_sequence);
        assert_that(&values).contains_exactly(&values.clone());
    }

    #[test]
    fn comparator_round_trip_restores_natural_equality(
        a in any::<i32>(),
        b in any::<i32>(),
    ) {
        let natural = passes(move || {
            assert_that(&a).is_equal_to(&b);
        });
        let round_trip = passes(move || {
            assert_that(&a)
                .using_comparator(|x: &i32, y: &i32| (x % 7).cmp(&(y % 7)))
                .using_default_comparator()
                .is_equal_to(&b);
        });
        prop_assert_eq!(natural, round_trip);
    }

    #[test]
    fn sorted_vectors_pass_is_sorted(
        mut values in proptest::collection::vec(any::<i32>(), 0..16),
    ) {
        values.sort();
        assert_that(&values).is_sorted();
    }
}
