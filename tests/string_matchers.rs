//! Case tables for the string checks

use rstest::rstest;

use attest::assert_that;

#[rstest]
#[case("hello world", "hello")]
#[case("hello world", "world")]
#[case("hello world", "o w")]
#[case("hello world", "")]
fn contains_accepts(#[case] haystack: &str, #[case] needle: &str) {
    assert_that(haystack).contains(needle);
}

#[rstest]
#[case("hello world", "mars")]
#[case("", "anything")]
#[case("Hello", "hello")]
fn contains_rejects(#[case] haystack: &str, #[case] needle: &str) {
    let rejected = std::panic::catch_unwind(|| {
        assert_that(haystack).contains(needle);
    })
    .is_err();
    assert!(rejected, "`{haystack}` should not contain `{needle}`");
}

#[rstest]
#[case("release-1.4.2", "release-", "1.4.2")]
#[case("a", "a", "a")]
#[case("prefix and suffix", "prefix", "suffix")]
fn affixes_accept(#[case] input: &str, #[case] prefix: &str, #[case] suffix: &str) {
    assert_that(input).starts_with(prefix).ends_with(suffix);
}

#[rstest]
#[case("user-1", r"^user-\d+$", true)]
#[case("user-1234", r"^user-\d+$", true)]
#[case("user-", r"^user-\d+$", false)]
#[case("admin-1", r"^user-\d+$", false)]
#[case("2026-08-04", r"^\d{4}-\d{2}-\d{2}$", true)]
fn pattern_cases(#[case] input: &str, #[case] pattern: &str, #[case] matches: bool) {
    if matches {
        assert_that(input).matches_pattern(pattern);
    } else {
        assert_that(input).does_not_match_pattern(pattern);
    }
}

#[rstest]
#[case("Straße", "STRASSE", false)] // lowercasing is not case folding
#[case("Hello", "hELLO", true)]
#[case("rust", "RUST", true)]
#[case("rust", "rusty", false)]
fn ignoring_case_cases(#[case] left: &str, #[case] right: &str, #[case] equal: bool) {
    let outcome = std::panic::catch_unwind(|| {
        assert_that(left).is_equal_to_ignoring_case(right);
    })
    .is_ok();
    assert_eq!(outcome, equal);
}

#[rstest]
#[case("", 0)]
#[case("abc", 3)]
#[case("héllo", 6)] // byte length, not character count
fn length_counts_bytes(#[case] input: &str, #[case] length: usize) {
    assert_that(input).has_length(length);
}
