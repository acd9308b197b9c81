//! Numeric checks: sign, closeness within an offset, closeness by percentage
//!
//! One impl block per representative width; each method delegates the
//! failure wording to the shared helpers below so every width reports
//! identically. Integer closeness uses `abs_diff`, float closeness the
//! absolute difference. Tolerances are validated before the value is looked
//! at; an invalid tolerance is a usage error, not an assertion failure.

use crate::comparison::{Offset, Percentage};
use crate::failure::FailureReport;
use crate::subject::Subject;

fn close_failure(
    report: FailureReport,
    tolerance_repr: String,
    expected_repr: String,
    actual_repr: String,
    diff_repr: String,
) -> ! {
    report
        .expected(format!("value within `{tolerance_repr}` of `{expected_repr}`"))
        .but(format!("got `{actual_repr}` (difference `{diff_repr}`)"))
        .fail()
}

fn not_close_failure(
    report: FailureReport,
    tolerance_repr: String,
    expected_repr: String,
    actual_repr: String,
    diff_repr: String,
) -> ! {
    report
        .expected(format!(
            "value farther than `{tolerance_repr}` from `{expected_repr}`"
        ))
        .but(format!("got `{actual_repr}` (difference `{diff_repr}`)"))
        .fail()
}

fn sign_failure(report: FailureReport, phrase: &str, actual_repr: String) -> ! {
    report
        .expected(phrase.to_string())
        .but(format!("got `{actual_repr}`"))
        .fail()
}

impl<'a> Subject<'a, i32> {
    pub fn is_zero(self) -> Self {
        if *self.actual() == 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "`0`", actual_repr)
    }

    pub fn is_positive(self) -> Self {
        if *self.actual() > 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "positive value", actual_repr)
    }

    pub fn is_negative(self) -> Self {
        if *self.actual() < 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "negative value", actual_repr)
    }

    /// Passes iff `|actual - expected| <= offset`.
    pub fn is_close_to(self, expected: i32, offset: Offset<i32>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff <= tolerance as u32 {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }

    /// Passes iff `|actual - expected| > offset`.
    pub fn is_not_close_to(self, expected: i32, offset: Offset<i32>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff > tolerance as u32 {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        not_close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }
}

impl<'a> Subject<'a, i64> {
    pub fn is_zero(self) -> Self {
        if *self.actual() == 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "`0`", actual_repr)
    }

    pub fn is_positive(self) -> Self {
        if *self.actual() > 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "positive value", actual_repr)
    }

    pub fn is_negative(self) -> Self {
        if *self.actual() < 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "negative value", actual_repr)
    }

    pub fn is_close_to(self, expected: i64, offset: Offset<i64>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff <= tolerance as u64 {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }

    pub fn is_not_close_to(self, expected: i64, offset: Offset<i64>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff > tolerance as u64 {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        not_close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }
}

impl<'a> Subject<'a, u32> {
    pub fn is_zero(self) -> Self {
        if *self.actual() == 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "`0`", actual_repr)
    }

    pub fn is_positive(self) -> Self {
        if *self.actual() > 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "positive value", actual_repr)
    }

    pub fn is_close_to(self, expected: u32, offset: Offset<u32>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff <= tolerance {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }

    pub fn is_not_close_to(self, expected: u32, offset: Offset<u32>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff > tolerance {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        not_close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }
}

impl<'a> Subject<'a, u64> {
    pub fn is_zero(self) -> Self {
        if *self.actual() == 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "`0`", actual_repr)
    }

    pub fn is_positive(self) -> Self {
        if *self.actual() > 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "positive value", actual_repr)
    }

    pub fn is_close_to(self, expected: u64, offset: Offset<u64>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff <= tolerance {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }

    pub fn is_not_close_to(self, expected: u64, offset: Offset<u64>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff > tolerance {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        not_close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }
}

impl<'a> Subject<'a, usize> {
    pub fn is_zero(self) -> Self {
        if *self.actual() == 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "`0`", actual_repr)
    }

    pub fn is_positive(self) -> Self {
        if *self.actual() > 0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "positive value", actual_repr)
    }

    pub fn is_close_to(self, expected: usize, offset: Offset<usize>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff <= tolerance {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }

    pub fn is_not_close_to(self, expected: usize, offset: Offset<usize>) -> Self {
        let tolerance = offset.validated();
        let diff = self.actual().abs_diff(expected);
        if diff > tolerance {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        not_close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }
}

impl<'a> Subject<'a, f64> {
    pub fn is_zero(self) -> Self {
        if *self.actual() == 0.0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "`0.0`", actual_repr)
    }

    pub fn is_positive(self) -> Self {
        if *self.actual() > 0.0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "positive value", actual_repr)
    }

    pub fn is_negative(self) -> Self {
        if *self.actual() < 0.0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "negative value", actual_repr)
    }

    pub fn is_nan(self) -> Self {
        if self.actual().is_nan() {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "`NaN`", actual_repr)
    }

    pub fn is_finite(self) -> Self {
        if self.actual().is_finite() {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "finite value", actual_repr)
    }

    /// Passes iff `|actual - expected| <= offset`. NaN is close to nothing.
    pub fn is_close_to(self, expected: f64, offset: Offset<f64>) -> Self {
        let tolerance = offset.validated();
        let diff = (self.actual() - expected).abs();
        if diff <= tolerance {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }

    pub fn is_not_close_to(self, expected: f64, offset: Offset<f64>) -> Self {
        let tolerance = offset.validated();
        let diff = (self.actual() - expected).abs();
        if !(diff <= tolerance) {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        not_close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }

    /// Passes iff `|actual - expected| <= |expected| * percentage / 100`.
    pub fn is_close_to_percent(self, expected: f64, percentage: Percentage) -> Self {
        let margin = expected.abs() * percentage.value() / 100.0;
        let diff = (self.actual() - expected).abs();
        if diff <= margin {
            return self;
        }
        let report = self.report();
        let percent_repr = format!("{}%", percentage.value());
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        close_failure(report, percent_repr, expected_repr, actual_repr, diff_repr)
    }
}

impl<'a> Subject<'a, f32> {
    pub fn is_zero(self) -> Self {
        if *self.actual() == 0.0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "`0.0`", actual_repr)
    }

    pub fn is_positive(self) -> Self {
        if *self.actual() > 0.0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "positive value", actual_repr)
    }

    pub fn is_negative(self) -> Self {
        if *self.actual() < 0.0 {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "negative value", actual_repr)
    }

    pub fn is_nan(self) -> Self {
        if self.actual().is_nan() {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "`NaN`", actual_repr)
    }

    pub fn is_finite(self) -> Self {
        if self.actual().is_finite() {
            return self;
        }
        let report = self.report();
        let actual_repr = report.repr(self.actual());
        sign_failure(report, "finite value", actual_repr)
    }

    pub fn is_close_to(self, expected: f32, offset: Offset<f32>) -> Self {
        let tolerance = offset.validated();
        let diff = (self.actual() - expected).abs();
        if diff <= tolerance {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }

    pub fn is_not_close_to(self, expected: f32, offset: Offset<f32>) -> Self {
        let tolerance = offset.validated();
        let diff = (self.actual() - expected).abs();
        if !(diff <= tolerance) {
            return self;
        }
        let report = self.report();
        let tolerance_repr = report.repr(&tolerance);
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        not_close_failure(report, tolerance_repr, expected_repr, actual_repr, diff_repr)
    }

    pub fn is_close_to_percent(self, expected: f32, percentage: Percentage) -> Self {
        let margin = expected.abs() as f64 * percentage.value() / 100.0;
        let diff = (self.actual() - expected).abs() as f64;
        if diff <= margin {
            return self;
        }
        let report = self.report();
        let percent_repr = format!("{}%", percentage.value());
        let expected_repr = report.repr(&expected);
        let actual_repr = report.repr(self.actual());
        let diff_repr = report.repr(&diff);
        close_failure(report, percent_repr, expected_repr, actual_repr, diff_repr)
    }
}
