//! Fluent assertion entry points
//!
//! `assert_that(actual)` picks the assert type from the type of `actual`
//! through [`Assertable`]. A failed assertion panics with its message, unless
//! the assert was created from [`SoftAssertions`].
//!
//! ```rust,ignore
//! use fluent_assert::prelude::*;
//!
//! assert_that("Yoda").starts_with("Yo").has_size(4);
//! assert_that(vec![1, 2, 3]).contains_exactly([1, 2, 3]);
//! assert_that_object(yoda).extracting("name.first").is_equal_to("Yoda");
//! ```

pub mod boolean;
pub mod comparable;
mod info;
pub mod iterable;
pub mod map;
pub mod object;
pub mod option;
pub mod soft;
pub mod string;

pub use boolean::BoolAssert;
pub use comparable::ComparableAssert;
pub use info::AssertionInfo;
pub use iterable::IterableAssert;
pub use map::MapAssert;
pub use object::ObjectAssert;
pub use option::OptionAssert;
pub use soft::{assert_softly, SoftAssertions};
pub use string::StringAssert;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::introspection::Introspect;
use crate::value::Value;

/// A value `assert_that` accepts, and the assert it produces
pub trait Assertable {
    type Assert;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert;
}

pub fn assert_that<T: Assertable>(actual: T) -> T::Assert {
    actual.into_assert(AssertionInfo::default())
}

/// Asserts on an introspectable object, enabling `extracting` and field checks
pub fn assert_that_object<T: Introspect>(actual: T) -> ObjectAssert {
    ObjectAssert::new(Value::object(actual), AssertionInfo::default())
}

pub fn assert_that_objects<I, T>(actual: I) -> IterableAssert<Value>
where
    I: IntoIterator<Item = T>,
    T: Introspect,
{
    IterableAssert::new(
        actual.into_iter().map(Value::object).collect(),
        AssertionInfo::default(),
    )
}

/// Asserts on any ordered value, e.g. dates
pub fn assert_that_comparable<T: PartialOrd + Debug>(actual: T) -> ComparableAssert<T> {
    ComparableAssert::new(actual, AssertionInfo::default())
}

impl Assertable for &str {
    type Assert = StringAssert;

    fn into_assert(self, info: AssertionInfo) -> StringAssert {
        StringAssert::new(self.to_string(), info)
    }
}

impl Assertable for String {
    type Assert = StringAssert;

    fn into_assert(self, info: AssertionInfo) -> StringAssert {
        StringAssert::new(self, info)
    }
}

impl Assertable for &String {
    type Assert = StringAssert;

    fn into_assert(self, info: AssertionInfo) -> StringAssert {
        StringAssert::new(self.clone(), info)
    }
}

impl Assertable for bool {
    type Assert = BoolAssert;

    fn into_assert(self, info: AssertionInfo) -> BoolAssert {
        BoolAssert::new(self, info)
    }
}

macro_rules! comparable_assertable {
    ($($ty:ty),*) => {
        $(impl Assertable for $ty {
            type Assert = ComparableAssert<$ty>;

            fn into_assert(self, info: AssertionInfo) -> ComparableAssert<$ty> {
                ComparableAssert::new(self, info)
            }
        })*
    };
}

comparable_assertable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

impl<T: Debug + PartialEq> Assertable for Vec<T> {
    type Assert = IterableAssert<T>;

    fn into_assert(self, info: AssertionInfo) -> IterableAssert<T> {
        IterableAssert::new(self, info)
    }
}

impl<T: Debug + PartialEq + Clone> Assertable for &[T] {
    type Assert = IterableAssert<T>;

    fn into_assert(self, info: AssertionInfo) -> IterableAssert<T> {
        IterableAssert::new(self.to_vec(), info)
    }
}

impl<T: Debug + PartialEq, const N: usize> Assertable for [T; N] {
    type Assert = IterableAssert<T>;

    fn into_assert(self, info: AssertionInfo) -> IterableAssert<T> {
        IterableAssert::new(self.into(), info)
    }
}

impl<T: Debug + PartialEq> Assertable for Option<T> {
    type Assert = OptionAssert<T>;

    fn into_assert(self, info: AssertionInfo) -> OptionAssert<T> {
        OptionAssert::new(self, info)
    }
}

impl<K, V> Assertable for HashMap<K, V>
where
    K: Eq + Hash + Debug,
    V: PartialEq + Debug,
{
    type Assert = MapAssert<K, V>;

    fn into_assert(self, info: AssertionInfo) -> MapAssert<K, V> {
        MapAssert::new(self, info)
    }
}

impl Assertable for Value {
    type Assert = ObjectAssert;

    fn into_assert(self, info: AssertionInfo) -> ObjectAssert {
        ObjectAssert::new(self, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_chain() {
        assert_that("Yoda")
            .is_not_empty()
            .has_size(4)
            .starts_with("Yo")
            .ends_with("da")
            .contains("od")
            .does_not_contain("Luke")
            .matches("[A-Z][a-z]+")
            .is_equal_to_ignoring_case("YODA")
            .is_equal_to("Yoda");
    }

    #[test]
    #[should_panic(expected = "[name] \nexpected: \"Luke\"\n but was: \"Yoda\"")]
    fn test_description_prefixes_failure() {
        assert_that("Yoda").described_as("name").is_equal_to("Luke");
    }

    #[test]
    fn test_comparables() {
        assert_that(800i32).is_greater_than(24).is_between(800, 900).is_not_equal_to(24);
        assert_that(1.5f64).is_strictly_between(1.0, 2.0);
        assert_that('b').is_after('a').is_before('c');
    }

    #[test]
    #[should_panic(expected = "to be less than")]
    fn test_comparable_failure() {
        assert_that(800u32).is_less_than(24);
    }

    #[test]
    fn test_iterables() {
        assert_that(vec!["Luke", "Yoda", "Leia"])
            .has_size(3)
            .contains(["Yoda"])
            .does_not_contain(["Vader"])
            .contains_exactly(["Luke", "Yoda", "Leia"])
            .contains_exactly_in_any_order(["Leia", "Luke", "Yoda"])
            .contains_only(["Yoda", "Leia", "Luke"])
            .all_match(|name| name.len() == 4)
            .any_match(|name| name.starts_with('Y'));
        assert_that(Vec::<i32>::new()).is_empty();
        assert_that([1, 1, 2]).contains_only([1, 2]);
    }

    #[test]
    #[should_panic(expected = "elements not found")]
    fn test_contains_exactly_in_any_order_checks_multiplicity() {
        assert_that(vec![1, 2, 2]).contains_exactly_in_any_order([1, 1, 2]);
    }

    #[test]
    fn test_options_and_maps() {
        assert_that(Some(3)).is_some().contains(3);
        assert_that(None::<i32>).is_none();

        let mut ages = HashMap::new();
        ages.insert("Yoda".to_string(), 800);
        assert_that(ages)
            .has_size(1)
            .contains_key("Yoda")
            .does_not_contain_key("Luke")
            .contains_entry("Yoda", 800);
    }

    #[test]
    fn test_bool() {
        assert_that(true).is_true();
        assert_that(false).is_false();
    }

    #[test]
    fn test_value_assert() {
        assert_that(Value::Null).is_null();
        assert_that(Value::from(vec![1, 2])).is_not_null().is_equal_to(vec![1u64, 2]);
    }
}
