//! Assertions on `Option` values

use std::fmt::Debug;

use super::info::{descriptable, AssertionInfo};

pub struct OptionAssert<T> {
    actual: Option<T>,
    info: AssertionInfo,
}

descriptable!(OptionAssert<T>);

impl<T: Debug + PartialEq> OptionAssert<T> {
    pub(crate) fn new(actual: Option<T>, info: AssertionInfo) -> Self {
        Self { actual, info }
    }

    pub fn is_some(self) -> Self {
        self.info
            .check(self.actual.is_some(), || "\nExpecting Option to contain a value but it was None".to_string());
        self
    }

    pub fn is_none(self) -> Self {
        self.info.check(self.actual.is_none(), || {
            format!("\nExpecting an empty Option but was containing value:\n  {:?}", self.actual)
        });
        self
    }

    pub fn contains(self, expected: T) -> Self {
        self.info.check(self.actual.as_ref() == Some(&expected), || match &self.actual {
            Some(value) => format!(
                "\nExpecting actual:\n  Some({:?})\nto contain:\n  {:?}\nbut did not.",
                value, expected
            ),
            None => format!(
                "\nExpecting Option to contain:\n  {:?}\nbut was empty.",
                expected
            ),
        });
        self
    }
}
