//! Assertions on booleans

use super::info::{descriptable, AssertionInfo};

pub struct BoolAssert {
    actual: bool,
    info: AssertionInfo,
}

descriptable!(BoolAssert);

impl BoolAssert {
    pub(crate) fn new(actual: bool, info: AssertionInfo) -> Self {
        Self { actual, info }
    }

    pub fn is_true(self) -> Self {
        self.is_equal_to(true)
    }

    pub fn is_false(self) -> Self {
        self.is_equal_to(false)
    }

    pub fn is_equal_to(self, expected: bool) -> Self {
        self.info.check(self.actual == expected, || {
            format!("\nexpected: {}\n but was: {}", expected, self.actual)
        });
        self
    }
}
