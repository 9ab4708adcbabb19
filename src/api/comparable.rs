//! Assertions on ordered values: numbers, chars, dates

use std::fmt::Debug;

use super::info::{descriptable, AssertionInfo};

pub struct ComparableAssert<T> {
    actual: T,
    info: AssertionInfo,
}

descriptable!(ComparableAssert<T>);

impl<T: PartialOrd + Debug> ComparableAssert<T> {
    pub(crate) fn new(actual: T, info: AssertionInfo) -> Self {
        Self { actual, info }
    }

    pub fn actual(&self) -> &T {
        &self.actual
    }

    pub fn is_equal_to(self, expected: T) -> Self {
        self.info.check(self.actual == expected, || {
            format!("\nexpected: {:?}\n but was: {:?}", expected, self.actual)
        });
        self
    }

    pub fn is_not_equal_to(self, other: T) -> Self {
        self.info.check(self.actual != other, || {
            format!(
                "\nExpecting actual:\n  {:?}\nnot to be equal to:\n  {:?}",
                self.actual, other
            )
        });
        self
    }

    pub fn is_less_than(self, other: T) -> Self {
        let holds = self.actual < other;
        self.compare(holds, "less than", &other)
    }

    pub fn is_less_than_or_equal_to(self, other: T) -> Self {
        let holds = self.actual <= other;
        self.compare(holds, "less than or equal to", &other)
    }

    pub fn is_greater_than(self, other: T) -> Self {
        let holds = self.actual > other;
        self.compare(holds, "greater than", &other)
    }

    pub fn is_greater_than_or_equal_to(self, other: T) -> Self {
        let holds = self.actual >= other;
        self.compare(holds, "greater than or equal to", &other)
    }

    /// Inclusive on both ends
    pub fn is_between(self, start: T, end: T) -> Self {
        let inside = start <= self.actual && self.actual <= end;
        self.info.check(inside, || {
            format!(
                "\nExpecting actual:\n  {:?}\nto be between:\n  [{:?}, {:?}]",
                self.actual, start, end
            )
        });
        self
    }

    /// Exclusive on both ends
    pub fn is_strictly_between(self, start: T, end: T) -> Self {
        let inside = start < self.actual && self.actual < end;
        self.info.check(inside, || {
            format!(
                "\nExpecting actual:\n  {:?}\nto be between:\n  ]{:?}, {:?}[",
                self.actual, start, end
            )
        });
        self
    }

    pub fn is_before(self, other: T) -> Self {
        let holds = self.actual < other;
        self.compare(holds, "before", &other)
    }

    pub fn is_after(self, other: T) -> Self {
        let holds = self.actual > other;
        self.compare(holds, "after", &other)
    }

    fn compare(self, holds: bool, relation: &str, other: &T) -> Self {
        self.info.check(holds, || {
            format!(
                "\nExpecting actual:\n  {:?}\nto be {}:\n  {:?}",
                self.actual, relation, other
            )
        });
        self
    }
}
