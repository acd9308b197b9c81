//! Filesystem path checks
//!
//! These touch the filesystem through `std::path::Path` metadata queries;
//! they are the only checks in the crate with a side effect beyond
//! formatting. `Path` and `PathBuf` subjects share the surface.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::failure::FailureReport;
use crate::subject::Subject;

fn check_exists(actual: &Path, report: impl FnOnce() -> FailureReport) {
    if actual.exists() {
        return;
    }
    let report = report();
    let actual_repr = report.repr(actual);
    report
        .expected("existing path")
        .but(format!("`{actual_repr}` does not exist"))
        .fail()
}

fn check_does_not_exist(actual: &Path, report: impl FnOnce() -> FailureReport) {
    if !actual.exists() {
        return;
    }
    let report = report();
    let actual_repr = report.repr(actual);
    report
        .expected("absent path")
        .but(format!("`{actual_repr}` exists"))
        .fail()
}

fn check_is_file(actual: &Path, report: impl FnOnce() -> FailureReport) {
    if actual.is_file() {
        return;
    }
    let report = report();
    let actual_repr = report.repr(actual);
    report
        .expected("path to a regular file")
        .but(format!("got `{actual_repr}`"))
        .fail()
}

fn check_is_directory(actual: &Path, report: impl FnOnce() -> FailureReport) {
    if actual.is_dir() {
        return;
    }
    let report = report();
    let actual_repr = report.repr(actual);
    report
        .expected("path to a directory")
        .but(format!("got `{actual_repr}`"))
        .fail()
}

fn check_file_name(actual: &Path, expected: &str, report: impl FnOnce() -> FailureReport) {
    if actual.file_name() == Some(OsStr::new(expected)) {
        return;
    }
    let report = report();
    let actual_repr = report.repr(actual);
    report
        .expected(format!("path with file name `{expected}`"))
        .but(format!("got `{actual_repr}`"))
        .fail()
}

fn check_extension(actual: &Path, expected: &str, report: impl FnOnce() -> FailureReport) {
    if actual.extension() == Some(OsStr::new(expected)) {
        return;
    }
    let report = report();
    let actual_repr = report.repr(actual);
    report
        .expected(format!("path with extension `{expected}`"))
        .but(format!("got `{actual_repr}`"))
        .fail()
}

impl<'a> Subject<'a, Path> {
    pub fn exists(self) -> Self {
        check_exists(self.actual(), || self.report());
        self
    }

    pub fn does_not_exist(self) -> Self {
        check_does_not_exist(self.actual(), || self.report());
        self
    }

    pub fn is_file(self) -> Self {
        check_is_file(self.actual(), || self.report());
        self
    }

    pub fn is_directory(self) -> Self {
        check_is_directory(self.actual(), || self.report());
        self
    }

    pub fn has_file_name(self, expected: &str) -> Self {
        check_file_name(self.actual(), expected, || self.report());
        self
    }

    pub fn has_extension(self, expected: &str) -> Self {
        check_extension(self.actual(), expected, || self.report());
        self
    }
}

impl<'a> Subject<'a, PathBuf> {
    pub fn exists(self) -> Self {
        check_exists(self.actual(), || self.report());
        self
    }

    pub fn does_not_exist(self) -> Self {
        check_does_not_exist(self.actual(), || self.report());
        self
    }

    pub fn is_file(self) -> Self {
        check_is_file(self.actual(), || self.report());
        self
    }

    pub fn is_directory(self) -> Self {
        check_is_directory(self.actual(), || self.report());
        self
    }

    pub fn has_file_name(self, expected: &str) -> Self {
        check_file_name(self.actual(), expected, || self.report());
        self
    }

    pub fn has_extension(self, expected: &str) -> Self {
        check_extension(self.actual(), expected, || self.report());
        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::subject::assert_that;

    #[test]
    fn test_name_and_extension_checks_work_without_io() {
        let path = Path::new("reports/summary.json");
        assert_that(path)
            .has_file_name("summary.json")
            .has_extension("json");
    }

    #[test]
    #[should_panic(expected = "expected path with extension `yaml`")]
    fn test_extension_failure() {
        assert_that(Path::new("summary.json")).has_extension("yaml");
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_exists_failure() {
        assert_that(Path::new("definitely/not/here.txt")).exists();
    }
}
