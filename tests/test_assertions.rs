//! Fluent assertion tests
//!
//! Object, iterable and comparable assertions over the shared test kit.

mod common;

use chrono::NaiveDate;
use fluent_assert::prelude::*;

use common::{han, luke, yoda, Employee, Name, Point};

// ============================================================================
// Object assertions
// ============================================================================

#[test]
fn test_object_field_or_property() {
    assert_that_object(yoda())
        .is_not_null()
        .has_field_or_property("age")
        .has_field_or_property("city")
        .has_field_or_property("surname")
        .has_field_or_property_with_value("age", 800)
        .has_field_or_property_with_value("adult", true);
}

#[test]
#[should_panic(expected = "to have a property or a field named \"rank\"")]
fn test_missing_field_or_property_fails() {
    assert_that_object(yoda()).has_field_or_property("rank");
}

#[test]
#[should_panic(expected = "but value was:\n  800")]
fn test_field_or_property_with_wrong_value_fails() {
    assert_that_object(yoda()).has_field_or_property_with_value("age", 900);
}

#[test]
fn test_extracting_chain() {
    assert_that_object(yoda())
        .extracting("relations.padawan.name")
        .is_equal_to(Value::object(Name::with_last("Luke", "Skywalker")))
        .extracting("last")
        .is_equal_to("Skywalker");
}

#[test]
fn test_extracting_all() {
    assert_that_object(yoda())
        .extracting_all(&["id", "age", "name.first"])
        .contains_exactly([Value::from(1), Value::from(800), Value::from("Yoda")]);
}

#[test]
#[should_panic(expected = "Can't find any field or property with name 'rank'")]
fn test_extracting_unknown_path_panics_with_introspection_error() {
    assert_that_object(yoda()).extracting("rank");
}

#[test]
fn test_has_no_null_fields_or_properties() {
    assert_that_object(Point { x: 1, y: 2 }).is_not_null();
    assert_that_object(Name::with_last("Luke", "Skywalker")).has_no_null_fields_or_properties();
}

#[test]
#[should_panic(expected = "[\"last\"]")]
fn test_null_field_reported() {
    assert_that_object(Name::new("Yoda")).has_no_null_fields_or_properties();
}

#[test]
fn test_satisfies() {
    assert_that_object(yoda()).satisfies(|employee| {
        assert_that(employee.clone()).extracting("age").is_equal_to(800);
    });
}

#[test]
fn test_null_value() {
    assert_that(Value::Null).is_null();
    assert_that_object(yoda()).extracting("surname").is_null();
}

// ============================================================================
// Iterable assertions
// ============================================================================

#[test]
fn test_objects_extracting() {
    assert_that_objects(vec![yoda(), luke(), han()])
        .extracting("name.first")
        .contains_exactly(["Yoda", "Luke", "Han"])
        .does_not_contain(["Vader"]);
}

#[test]
fn test_objects_filtered_on() {
    assert_that_objects(vec![yoda(), luke(), han()])
        .filtered_on("adult", true)
        .has_size(3)
        .filtered_on("name.first", "Han")
        .contains_exactly([Value::object(han())]);

    assert_that_objects(vec![yoda(), luke(), han()])
        .filtered_on("age", 22)
        .extracting("id")
        .contains_only([2]);
}

#[test]
fn test_objects_match() {
    assert_that_objects(vec![yoda(), luke()])
        .all_match(|employee| employee.type_name() == "Employee")
        .any_match(|employee| *employee == Value::object(luke()));
}

#[test]
#[should_panic(expected = "[characters] \nActual and expected should have same elements in the same order")]
fn test_described_iterable_failure() {
    assert_that(vec!["Luke", "Yoda"])
        .as_("characters")
        .contains_exactly(["Yoda", "Luke"]);
}

#[test]
fn test_equal_employees_compare_by_registered_equality() {
    let a = Value::object(Employee::new(7, Name::new("Rey"), 19));
    let b = Value::object(Employee::new(7, Name::new("Rey"), 19));
    assert_that(a).is_equal_to(b);
}

// ============================================================================
// Comparable assertions
// ============================================================================

#[test]
fn test_dates() {
    let hope = NaiveDate::from_ymd_opt(1977, 5, 25).unwrap();
    let empire = NaiveDate::from_ymd_opt(1980, 5, 21).unwrap();
    let jedi = NaiveDate::from_ymd_opt(1983, 5, 25).unwrap();

    assert_that_comparable(empire)
        .is_after(hope)
        .is_before(jedi)
        .is_strictly_between(hope, jedi)
        .is_between(empire, jedi);
}

#[test]
#[should_panic(expected = "to be before")]
fn test_date_failure() {
    let hope = NaiveDate::from_ymd_opt(1977, 5, 25).unwrap();
    let jedi = NaiveDate::from_ymd_opt(1983, 5, 25).unwrap();
    assert_that_comparable(jedi).is_before(hope);
}

#[test]
fn test_numbers() {
    assert_that(800i32)
        .is_greater_than_or_equal_to(800)
        .is_less_than_or_equal_to(800)
        .is_equal_to(800);
    assert_that(2.5f32).is_less_than(3.0);
}
