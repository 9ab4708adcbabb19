//! Assertions on strings

use regex::Regex;

use super::info::{descriptable, AssertionInfo};

pub struct StringAssert {
    actual: String,
    info: AssertionInfo,
}

descriptable!(StringAssert);

impl StringAssert {
    pub(crate) fn new(actual: String, info: AssertionInfo) -> Self {
        Self { actual, info }
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }

    pub fn is_empty(self) -> Self {
        self.info.check(self.actual.is_empty(), || {
            format!("\nExpecting empty but was: {:?}", self.actual)
        });
        self
    }

    pub fn is_not_empty(self) -> Self {
        self.info
            .check(!self.actual.is_empty(), || "\nExpecting actual not to be empty".to_string());
        self
    }

    /// Size in characters
    pub fn has_size(self, expected: usize) -> Self {
        let size = self.actual.chars().count();
        self.info.check(size == expected, || {
            format!(
                "\nExpected size: {} but was: {} in:\n{:?}",
                expected, size, self.actual
            )
        });
        self
    }

    pub fn contains(self, expected: &str) -> Self {
        self.info.check(self.actual.contains(expected), || {
            format!(
                "\nExpecting actual:\n  {:?}\nto contain:\n  {:?}",
                self.actual, expected
            )
        });
        self
    }

    pub fn does_not_contain(self, unexpected: &str) -> Self {
        self.info.check(!self.actual.contains(unexpected), || {
            format!(
                "\nExpecting actual:\n  {:?}\nnot to contain:\n  {:?}",
                self.actual, unexpected
            )
        });
        self
    }

    pub fn starts_with(self, prefix: &str) -> Self {
        self.info.check(self.actual.starts_with(prefix), || {
            format!(
                "\nExpecting actual:\n  {:?}\nto start with:\n  {:?}",
                self.actual, prefix
            )
        });
        self
    }

    pub fn ends_with(self, suffix: &str) -> Self {
        self.info.check(self.actual.ends_with(suffix), || {
            format!(
                "\nExpecting actual:\n  {:?}\nto end with:\n  {:?}",
                self.actual, suffix
            )
        });
        self
    }

    /// The whole string must match `pattern`; an invalid pattern is reported as a failure
    pub fn matches(self, pattern: &str) -> Self {
        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(regex) => self.info.check(regex.is_match(&self.actual), || {
                format!(
                    "\nExpecting actual:\n  {:?}\nto match pattern:\n  {:?}",
                    self.actual, pattern
                )
            }),
            Err(e) => self.info.fail(format!("\nInvalid pattern {:?}: {}", pattern, e)),
        }
        self
    }

    pub fn is_equal_to_ignoring_case(self, expected: &str) -> Self {
        self.info
            .check(self.actual.to_lowercase() == expected.to_lowercase(), || {
                format!(
                    "\nExpecting actual:\n  {:?}\nto be equal to:\n  {:?}\nwhen ignoring case",
                    self.actual, expected
                )
            });
        self
    }

    pub fn is_equal_to(self, expected: &str) -> Self {
        self.info.check(self.actual == expected, || {
            format!("\nexpected: {:?}\n but was: {:?}", expected, self.actual)
        });
        self
    }
}
