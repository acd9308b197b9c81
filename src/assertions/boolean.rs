//! Boolean checks

use crate::subject::Subject;

impl<'a> Subject<'a, bool> {
    pub fn is_true(self) -> Self {
        if *self.actual() {
            return self;
        }
        self.report().expected("`true`").but("got `false`").fail()
    }

    pub fn is_false(self) -> Self {
        if !*self.actual() {
            return self;
        }
        self.report().expected("`false`").but("got `true`").fail()
    }
}
