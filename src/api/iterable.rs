//! Assertions on sequences

use std::fmt::Debug;

use super::info::{descriptable, AssertionInfo};
use crate::introspection::PropertyOrFieldSupport;
use crate::value::Value;

pub struct IterableAssert<T> {
    actual: Vec<T>,
    info: AssertionInfo,
}

descriptable!(IterableAssert<T>);

impl<T> IterableAssert<T> {
    pub(crate) fn new(actual: Vec<T>, info: AssertionInfo) -> Self {
        Self { actual, info }
    }

    pub fn actual(&self) -> &[T] {
        &self.actual
    }
}

impl<T: Debug + PartialEq> IterableAssert<T> {
    pub fn has_size(self, expected: usize) -> Self {
        self.info.check(self.actual.len() == expected, || {
            format!(
                "\nExpected size: {} but was: {} in:\n{:?}",
                expected,
                self.actual.len(),
                self.actual
            )
        });
        self
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

    /// Every value must be present, in any order
    pub fn contains<I, E>(self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<T>,
    {
        let values: Vec<T> = collect(values);
        let not_found: Vec<&T> = values.iter().filter(|v| !self.actual.contains(v)).collect();
        self.info.check(not_found.is_empty(), || {
            format!(
                "\nExpecting actual:\n  {:?}\nto contain:\n  {:?}\nbut could not find the following element(s):\n  {:?}",
                self.actual, values, not_found
            )
        });
        self
    }

    pub fn does_not_contain<I, E>(self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<T>,
    {
        let values: Vec<T> = collect(values);
        let found: Vec<&T> = values.iter().filter(|v| self.actual.contains(v)).collect();
        self.info.check(found.is_empty(), || {
            format!(
                "\nExpecting actual:\n  {:?}\nnot to contain:\n  {:?}\nbut found:\n  {:?}",
                self.actual, values, found
            )
        });
        self
    }

    /// Same elements in the same order, nothing else
    pub fn contains_exactly<I, E>(self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<T>,
    {
        let values: Vec<T> = collect(values);
        self.info.check(self.actual == values, || {
            format!(
                "\nActual and expected should have same elements in the same order:\n  actual:   {:?}\n  expected: {:?}",
                self.actual, values
            )
        });
        self
    }

    /// Same elements with the same multiplicity, in any order
    pub fn contains_exactly_in_any_order<I, E>(self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<T>,
    {
        let values: Vec<T> = collect(values);
        let mut unmatched: Vec<&T> = self.actual.iter().collect();
        let mut missing: Vec<&T> = Vec::new();
        for value in &values {
            match unmatched.iter().position(|a| *a == value) {
                Some(index) => {
                    unmatched.swap_remove(index);
                }
                None => missing.push(value),
            }
        }
        self.info.check(missing.is_empty() && unmatched.is_empty(), || {
            format!(
                "\nExpecting actual:\n  {:?}\nto contain exactly in any order:\n  {:?}\nelements not found:\n  {:?}\nand elements not expected:\n  {:?}",
                self.actual, values, missing, unmatched
            )
        });
        self
    }

    /// Every actual element is one of `values` and every value is present
    pub fn contains_only<I, E>(self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<T>,
    {
        let values: Vec<T> = collect(values);
        let not_found: Vec<&T> = values.iter().filter(|v| !self.actual.contains(v)).collect();
        let not_expected: Vec<&T> = self.actual.iter().filter(|a| !values.contains(a)).collect();
        self.info.check(not_found.is_empty() && not_expected.is_empty(), || {
            format!(
                "\nExpecting actual:\n  {:?}\nto contain only:\n  {:?}\nelements not found:\n  {:?}\nand elements not expected:\n  {:?}",
                self.actual, values, not_found, not_expected
            )
        });
        self
    }

    pub fn all_match<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        let failing: Vec<&T> = self.actual.iter().filter(|a| !predicate(a)).collect();
        self.info.check(failing.is_empty(), || {
            format!("\nExpecting all elements of:\n  {:?}\nto match the predicate but these did not:\n  {:?}", self.actual, failing)
        });
        self
    }

    pub fn any_match<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.info.check(self.actual.iter().any(predicate), || {
            format!("\nExpecting any element of:\n  {:?}\nto match the predicate but none did", self.actual)
        });
        self
    }
}

impl IterableAssert<Value> {
    /// Continues on the value found at `path` in every element
    ///
    /// # Panics
    ///
    /// When `path` cannot be resolved on an element, with the introspection error.
    pub fn extracting(self, path: &str) -> IterableAssert<Value> {
        let values = PropertyOrFieldSupport::extraction()
            .get_values_of(path, &self.actual)
            .unwrap_or_else(|err| panic!("{}", err));
        IterableAssert::new(values, self.info)
    }

    /// Keeps the elements whose value at `path` equals `expected`
    ///
    /// # Panics
    ///
    /// When `path` cannot be resolved on an element, with the introspection error.
    pub fn filtered_on(self, path: &str, expected: impl Into<Value>) -> IterableAssert<Value> {
        let expected = expected.into();
        let support = PropertyOrFieldSupport::extraction();
        let mut kept = Vec::new();
        for element in self.actual {
            let value = support
                .get_value_of(path, &element)
                .unwrap_or_else(|err| panic!("{}", err));
            if value == expected {
                kept.push(element);
            }
        }
        IterableAssert::new(kept, self.info)
    }
}

fn collect<T, I, E>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = E>,
    E: Into<T>,
{
    values.into_iter().map(Into::into).collect()
}
