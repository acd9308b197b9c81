//! Map checks for `HashMap` and `BTreeMap`
//!
//! Failure reports list the present keys so a missing-key failure is
//! diagnosable without rerunning. For hash maps the key order in that list
//! is whatever the map yields.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::failure::FailureReport;
use crate::subject::Subject;

fn missing_key_failure(report: FailureReport, key_repr: String, keys_repr: String) -> ! {
    report
        .expected(format!("map containing key `{key_repr}`"))
        .but(format!("got keys `{keys_repr}`"))
        .fail()
}

fn present_key_failure(report: FailureReport, key_repr: String, value_repr: String) -> ! {
    report
        .expected(format!("map without key `{key_repr}`"))
        .but(format!("got it mapped to `{value_repr}`"))
        .fail()
}

fn length_failure(report: FailureReport, expected: usize, actual: usize) -> ! {
    report
        .expected(format!("length `{expected}`"))
        .but(format!("got length `{actual}`"))
        .fail()
}

fn not_empty_failure(report: FailureReport, keys_repr: String) -> ! {
    report
        .expected("empty map")
        .but(format!("got keys `{keys_repr}`"))
        .fail()
}

impl<'a, K: Debug + Eq + Hash, V: Debug> Subject<'a, HashMap<K, V>> {
    pub fn contains_key(self, key: &K) -> Self {
        if self.actual().contains_key(key) {
            return self;
        }
        let report = self.report();
        let key_repr = report.repr(key);
        let keys: Vec<&K> = self.actual().keys().collect();
        let keys_repr = report.repr(&keys);
        missing_key_failure(report, key_repr, keys_repr)
    }

    pub fn does_not_contain_key(self, key: &K) -> Self {
        match self.actual().get(key) {
            None => self,
            Some(value) => {
                let report = self.report();
                let key_repr = report.repr(key);
                let value_repr = report.repr(value);
                present_key_failure(report, key_repr, value_repr)
            }
        }
    }

    pub fn contains_entry(self, key: &K, value: &V) -> Self
    where
        V: PartialEq,
    {
        match self.actual().get(key) {
            Some(present) if present == value => self,
            Some(present) => {
                let report = self.report();
                let key_repr = report.repr(key);
                let value_repr = report.repr(value);
                let present_repr = report.repr(present);
                report
                    .expected(format!("entry `{key_repr} => {value_repr}`"))
                    .but(format!("the key is mapped to `{present_repr}`"))
                    .fail()
            }
            None => {
                let report = self.report();
                let key_repr = report.repr(key);
                let value_repr = report.repr(value);
                let keys: Vec<&K> = self.actual().keys().collect();
                let keys_repr = report.repr(&keys);
                report
                    .expected(format!("entry `{key_repr} => {value_repr}`"))
                    .but(format!("the key is absent (keys `{keys_repr}`)"))
                    .fail()
            }
        }
    }

    pub fn has_length(self, expected: usize) -> Self {
        let length = self.actual().len();
        if length == expected {
            return self;
        }
        length_failure(self.report(), expected, length)
    }

    pub fn is_empty(self) -> Self {
        if self.actual().is_empty() {
            return self;
        }
        let report = self.report();
        let keys: Vec<&K> = self.actual().keys().collect();
        let keys_repr = report.repr(&keys);
        not_empty_failure(report, keys_repr)
    }
}

impl<'a, K: Debug + Ord, V: Debug> Subject<'a, BTreeMap<K, V>> {
    pub fn contains_key(self, key: &K) -> Self {
        if self.actual().contains_key(key) {
            return self;
        }
        let report = self.report();
        let key_repr = report.repr(key);
        let keys: Vec<&K> = self.actual().keys().collect();
        let keys_repr = report.repr(&keys);
        missing_key_failure(report, key_repr, keys_repr)
    }

    pub fn does_not_contain_key(self, key: &K) -> Self {
        match self.actual().get(key) {
            None => self,
            Some(value) => {
                let report = self.report();
                let key_repr = report.repr(key);
                let value_repr = report.repr(value);
                present_key_failure(report, key_repr, value_repr)
            }
        }
    }

    pub fn contains_entry(self, key: &K, value: &V) -> Self
    where
        V: PartialEq,
    {
        match self.actual().get(key) {
            Some(present) if present == value => self,
            Some(present) => {
                let report = self.report();
                let key_repr = report.repr(key);
                let value_repr = report.repr(value);
                let present_repr = report.repr(present);
                report
                    .expected(format!("entry `{key_repr} => {value_repr}`"))
                    .but(format!("the key is mapped to `{present_repr}`"))
                    .fail()
            }
            None => {
                let report = self.report();
                let key_repr = report.repr(key);
                let value_repr = report.repr(value);
                let keys: Vec<&K> = self.actual().keys().collect();
                let keys_repr = report.repr(&keys);
                report
                    .expected(format!("entry `{key_repr} => {value_repr}`"))
                    .but(format!("the key is absent (keys `{keys_repr}`)"))
                    .fail()
            }
        }
    }

    pub fn has_length(self, expected: usize) -> Self {
        let length = self.actual().len();
        if length == expected {
            return self;
        }
        length_failure(self.report(), expected, length)
    }

    pub fn is_empty(self) -> Self {
        if self.actual().is_empty() {
            return self;
        }
        let report = self.report();
        let keys: Vec<&K> = self.actual().keys().collect();
        let keys_repr = report.repr(&keys);
        not_empty_failure(report, keys_repr)
    }
}
