//! Ordering checks for any partially ordered value
//!
//! All checks resolve through the chain's comparison strategy, so an
//! installed comparator changes their meaning consistently. Values the
//! strategy cannot order (NaN under the natural ordering) fail with an
//! explicit phrase instead of silently passing or failing.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::failure::usage_error;
use crate::subject::Subject;

impl<'a, T: Debug + PartialOrd + ?Sized> Subject<'a, T> {
    pub fn is_less_than(self, bound: &T) -> Self {
        self.check_order(bound, "value less than", |order| order == Ordering::Less)
    }

    pub fn is_at_most(self, bound: &T) -> Self {
        self.check_order(bound, "value at most", |order| order != Ordering::Greater)
    }

    pub fn is_greater_than(self, bound: &T) -> Self {
        self.check_order(bound, "value greater than", |order| {
            order == Ordering::Greater
        })
    }

    pub fn is_at_least(self, bound: &T) -> Self {
        self.check_order(bound, "value at least", |order| order != Ordering::Less)
    }

    /// Passes iff `lower <= actual <= upper` under the active strategy.
    pub fn is_between(self, lower: &T, upper: &T) -> Self {
        self.check_bounds(lower, upper, true)
    }

    /// Passes iff `lower < actual < upper` under the active strategy.
    pub fn is_strictly_between(self, lower: &T, upper: &T) -> Self {
        self.check_bounds(lower, upper, false)
    }

    fn check_order(self, bound: &T, phrase: &str, accept: impl Fn(Ordering) -> bool) -> Self {
        let actual = self.actual();
        match self.compare(actual, bound) {
            Some(order) if accept(order) => self,
            Some(_) => {
                let report = self.report();
                let bound_repr = report.repr(bound);
                let actual_repr = report.repr(actual);
                report
                    .expected(format!("{phrase} `{bound_repr}`"))
                    .but(format!("got `{actual_repr}`"))
                    .fail()
            }
            None => {
                let report = self.report();
                let bound_repr = report.repr(bound);
                let actual_repr = report.repr(actual);
                report
                    .expected(format!("{phrase} `{bound_repr}`"))
                    .but(format!("`{actual_repr}` is not comparable to it"))
                    .fail()
            }
        }
    }

    fn check_bounds(self, lower: &T, upper: &T, inclusive: bool) -> Self {
        match self.compare(lower, upper) {
            Some(Ordering::Less | Ordering::Equal) => {}
            Some(Ordering::Greater) => usage_error(format!(
                "lower bound `{lower:?}` must not exceed upper bound `{upper:?}`"
            )),
            None => usage_error(format!(
                "bounds `{lower:?}` and `{upper:?}` are not comparable"
            )),
        }
        let actual = self.actual();
        let above_lower = self.compare(actual, lower);
        let below_upper = self.compare(actual, upper);
        let holds = match (above_lower, below_upper) {
            (Some(lo), Some(hi)) => {
                if inclusive {
                    lo != Ordering::Less && hi != Ordering::Greater
                } else {
                    lo == Ordering::Greater && hi == Ordering::Less
                }
            }
            // Incomparable actual value (e.g. NaN) is never inside a range.
            _ => false,
        };
        if holds {
            return self;
        }
        let report = self.report();
        let lower_repr = report.repr(lower);
        let upper_repr = report.repr(upper);
        let actual_repr = report.repr(actual);
        let qualifier = if inclusive { "inclusive" } else { "exclusive" };
        report
            .expected(format!(
                "value between `{lower_repr}` and `{upper_repr}` {qualifier}"
            ))
            .but(format!("got `{actual_repr}`"))
            .fail()
    }
}
