//! Result checks
//!
//! `ok_value` and `err_value` are navigational: they assert the variant and
//! rebind the chain to the contained value or error.

use std::fmt::Debug;

use crate::subject::Subject;

impl<'a, T: Debug, E: Debug> Subject<'a, Result<T, E>> {
    pub fn is_ok(self) -> Self {
        match self.actual() {
            Ok(_) => self,
            Err(error) => {
                let report = self.report();
                let error_repr = report.repr(error);
                report
                    .expected("`Ok` value")
                    .but(format!("got `Err({error_repr})`"))
                    .fail()
            }
        }
    }

    pub fn is_err(self) -> Self {
        match self.actual() {
            Err(_) => self,
            Ok(value) => {
                let report = self.report();
                let value_repr = report.repr(value);
                report
                    .expected("`Err` value")
                    .but(format!("got `Ok({value_repr})`"))
                    .fail()
            }
        }
    }

    /// Assert `Ok` and continue the chain on the contained value.
    pub fn ok_value(self) -> Subject<'a, T> {
        match self.actual() {
            Ok(value) => self.map_actual(value),
            Err(error) => {
                let report = self.report();
                let error_repr = report.repr(error);
                report
                    .expected("`Ok` value to continue the chain on")
                    .but(format!("got `Err({error_repr})`"))
                    .fail()
            }
        }
    }

    /// Assert `Err` and continue the chain on the contained error.
    pub fn err_value(self) -> Subject<'a, E> {
        match self.actual() {
            Err(error) => self.map_actual(error),
            Ok(value) => {
                let report = self.report();
                let value_repr = report.repr(value);
                report
                    .expected("`Err` value to continue the chain on")
                    .but(format!("got `Ok({value_repr})`"))
                    .fail()
            }
        }
    }
}
