//! Soft assertions: collect every failure, report them together

use std::fmt::Debug;

use super::info::{AssertionInfo, FailureCollector};
use super::{Assertable, ComparableAssert, IterableAssert, ObjectAssert};
use crate::errors::{AssertionError, MultipleAssertionsError};
use crate::introspection::Introspect;
use crate::value::Value;

/// Asserts created from a `SoftAssertions` record their failures instead of panicking
///
/// ```rust,ignore
/// let softly = SoftAssertions::new();
/// softly.assert_that("Yoda").starts_with("Luke");
/// softly.assert_that(800).is_less_than(100);
/// softly.assert_all(); // panics listing both failures
/// ```
#[derive(Debug, Default)]
pub struct SoftAssertions {
    collector: FailureCollector,
}

impl SoftAssertions {
    pub fn new() -> Self {
        Self::default()
    }

    fn info(&self) -> AssertionInfo {
        AssertionInfo::collecting_into(self.collector.clone())
    }

    pub fn assert_that<T: Assertable>(&self, actual: T) -> T::Assert {
        actual.into_assert(self.info())
    }

    pub fn assert_that_object<T: Introspect>(&self, actual: T) -> ObjectAssert {
        ObjectAssert::new(Value::object(actual), self.info())
    }

    pub fn assert_that_objects<I, T>(&self, actual: I) -> IterableAssert<Value>
    where
        I: IntoIterator<Item = T>,
        T: Introspect,
    {
        IterableAssert::new(actual.into_iter().map(Value::object).collect(), self.info())
    }

    pub fn assert_that_comparable<T: PartialOrd + Debug>(&self, actual: T) -> ComparableAssert<T> {
        ComparableAssert::new(actual, self.info())
    }

    /// Failures collected so far, in order
    pub fn errors(&self) -> Vec<AssertionError> {
        self.collector
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn was_success(&self) -> bool {
        self.errors().is_empty()
    }

    /// Panics with every collected failure, if any
    pub fn assert_all(&self) {
        let errors = self.errors();
        if !errors.is_empty() {
            panic!("{}", MultipleAssertionsError::new(errors));
        }
    }
}

/// Runs `assertions` softly, then fails with everything they collected
pub fn assert_softly<F>(assertions: F)
where
    F: FnOnce(&SoftAssertions),
{
    let softly = SoftAssertions::new();
    assertions(&softly);
    softly.assert_all();
}
