//! Comparison strategies and closeness tolerances
//!
//! Checks never compare values directly; they resolve through the helpers
//! here so a per-chain comparator installed with `using_comparator` and the
//! natural `PartialEq`/`PartialOrd` behavior stay interchangeable.

use std::cmp::Ordering;

use crate::failure::usage_error;

/// Absolute closeness tolerance, built with [`within`].
#[derive(Debug, Clone, Copy)]
pub struct Offset<T> {
    value: T,
}

/// Relative closeness tolerance in percent, built with [`within_percentage`].
#[derive(Debug, Clone, Copy)]
pub struct Percentage {
    value: f64,
}

/// Tolerance for `is_close_to`: at most `offset` away from the expected value.
pub fn within<T>(offset: T) -> Offset<T> {
    Offset { value: offset }
}

/// Tolerance for `is_close_to_percent`: at most `percentage` percent of the
/// expected value away from it.
///
/// The percentage must be finite and non-negative; anything else is a usage
/// error, not an assertion failure.
pub fn within_percentage(percentage: f64) -> Percentage {
    if !percentage.is_finite() || percentage < 0.0 {
        usage_error(format!(
            "percentage tolerance must be finite and non-negative, got {percentage}"
        ));
    }
    Percentage { value: percentage }
}

impl Percentage {
    pub(crate) fn value(self) -> f64 {
        self.value
    }
}

impl Offset<f64> {
    pub(crate) fn validated(self) -> f64 {
        if !(self.value >= 0.0) {
            usage_error(format!(
                "offset must be non-negative and not NaN, got {}",
                self.value
            ));
        }
        self.value
    }
}

impl Offset<f32> {
    pub(crate) fn validated(self) -> f32 {
        if !(self.value >= 0.0) {
            usage_error(format!(
                "offset must be non-negative and not NaN, got {}",
                self.value
            ));
        }
        self.value
    }
}

impl Offset<i32> {
    pub(crate) fn validated(self) -> i32 {
        if self.value < 0 {
            usage_error(format!("offset must be non-negative, got {}", self.value));
        }
        self.value
    }
}

impl Offset<i64> {
    pub(crate) fn validated(self) -> i64 {
        if self.value < 0 {
            usage_error(format!("offset must be non-negative, got {}", self.value));
        }
        self.value
    }
}

impl Offset<u32> {
    pub(crate) fn validated(self) -> u32 {
        self.value
    }
}

impl Offset<u64> {
    pub(crate) fn validated(self) -> u64 {
        self.value
    }
}

impl Offset<usize> {
    pub(crate) fn validated(self) -> usize {
        self.value
    }
}

/// Ordering through the installed comparator, falling back to the value's
/// natural partial ordering. `None` means the two values are incomparable
/// under the natural ordering (e.g. NaN); the calling check turns that into
/// an explicit failure phrase.
pub(crate) fn resolve_order<T: ?Sized + PartialOrd>(
    comparator: Option<&(dyn Fn(&T, &T) -> Ordering + '_)>,
    a: &T,
    b: &T,
) -> Option<Ordering> {
    match comparator {
        Some(compare) => Some(compare(a, b)),
        None => a.partial_cmp(b),
    }
}

/// Equality through the installed comparator (`Ordering::Equal`), falling
/// back to the value's natural equality.
pub(crate) fn resolve_eq<T: ?Sized + PartialEq>(
    comparator: Option<&(dyn Fn(&T, &T) -> Ordering + '_)>,
    a: &T,
    b: &T,
) -> bool {
    match comparator {
        Some(compare) => compare(a, b) == Ordering::Equal,
        None => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order_resolution() {
        assert_eq!(resolve_order(None, &1, &2), Some(Ordering::Less));
        assert_eq!(resolve_order(None, &f64::NAN, &1.0), None);
    }

    #[test]
    fn test_comparator_takes_precedence() {
        let reversed: &dyn Fn(&i32, &i32) -> Ordering = &|a, b| b.cmp(a);
        assert_eq!(resolve_order(Some(reversed), &1, &2), Some(Ordering::Greater));
        assert!(!resolve_eq(Some(reversed), &1, &2));
        assert!(resolve_eq(Some(reversed), &2, &2));
    }

    #[test]
    #[should_panic(expected = "invalid assertion usage: offset must be non-negative")]
    fn test_negative_offset_is_a_usage_error() {
        within(-0.5_f64).validated();
    }

    #[test]
    #[should_panic(expected = "invalid assertion usage: percentage tolerance")]
    fn test_nan_percentage_is_a_usage_error() {
        within_percentage(f64::NAN);
    }
}
