//! Assertions on introspectable objects and other dynamic values

use super::info::{descriptable, AssertionInfo};
use super::iterable::IterableAssert;
use crate::introspection::{FieldSupport, PropertyOrFieldSupport};
use crate::representation::to_string_of;
use crate::value::Value;

pub struct ObjectAssert {
    actual: Value,
    info: AssertionInfo,
}

descriptable!(ObjectAssert);

impl ObjectAssert {
    pub(crate) fn new(actual: Value, info: AssertionInfo) -> Self {
        Self { actual, info }
    }

    pub fn actual(&self) -> &Value {
        &self.actual
    }

    pub fn is_null(self) -> Self {
        self.info.check(self.actual.is_null(), || {
            format!("\nExpecting actual:\n  {}\nto be null", to_string_of(&self.actual))
        });
        self
    }

    pub fn is_not_null(self) -> Self {
        self.info
            .check(!self.actual.is_null(), || "\nExpecting actual not to be null".to_string());
        self
    }

    pub fn is_equal_to(self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        self.info.check(self.actual == expected, || {
            format!(
                "\nexpected: {}\n but was: {}",
                to_string_of(&expected),
                to_string_of(&self.actual)
            )
        });
        self
    }

    pub fn is_not_equal_to(self, other: impl Into<Value>) -> Self {
        let other = other.into();
        self.info.check(self.actual != other, || {
            format!(
                "\nExpecting actual:\n  {}\nnot to be equal to:\n  {}",
                to_string_of(&self.actual),
                to_string_of(&other)
            )
        });
        self
    }

    /// Passes when `name` resolves as a property, field or map key, whatever its value
    pub fn has_field_or_property(self, name: &str) -> Self {
        if self.require_not_null() {
            let found = PropertyOrFieldSupport::extraction()
                .get_value_of(name, &self.actual)
                .is_ok();
            self.info.check(found, || {
                format!(
                    "\nExpecting\n  {}\nto have a property or a field named \"{}\"",
                    to_string_of(&self.actual),
                    name
                )
            });
        }
        self
    }

    pub fn has_field_or_property_with_value(self, name: &str, expected: impl Into<Value>) -> Self {
        if !self.require_not_null() {
            return self;
        }
        let expected = expected.into();
        match PropertyOrFieldSupport::extraction().get_value_of(name, &self.actual) {
            Ok(value) => self.info.check(value == expected, || {
                format!(
                    "\nExpecting\n  {}\nto have a property or a field named \"{}\" with value\n  {}\nbut value was:\n  {}",
                    to_string_of(&self.actual),
                    name,
                    to_string_of(&expected),
                    to_string_of(&value)
                )
            }),
            Err(_) => self.info.fail(format!(
                "\nExpecting\n  {}\nto have a property or a field named \"{}\" with value\n  {}",
                to_string_of(&self.actual),
                name,
                to_string_of(&expected)
            )),
        }
        self
    }

    /// Every registered field (embedded ones included) must resolve to a non-null value
    pub fn has_no_null_fields_or_properties(self) -> Self {
        if !self.require_not_null() {
            return self;
        }
        let support = PropertyOrFieldSupport::new(Default::default(), FieldSupport::comparison());
        let null_names: Vec<String> = FieldSupport::comparison()
            .field_names(&self.actual)
            .into_iter()
            .filter(|name| {
                support
                    .get_value_of(name, &self.actual)
                    .map_or(true, |value| value.is_null())
            })
            .collect();

        self.info.check(null_names.is_empty(), || {
            format!(
                "\nExpecting\n  {}\nnot to have any null property or field, but these were null:\n  {:?}",
                to_string_of(&self.actual),
                null_names
            )
        });
        self
    }

    /// Continues on the value found at `path`
    ///
    /// # Panics
    ///
    /// When `path` cannot be resolved, with the introspection error.
    pub fn extracting(self, path: &str) -> ObjectAssert {
        if !self.require_not_null() {
            return ObjectAssert::new(Value::Null, self.info);
        }
        match PropertyOrFieldSupport::extraction().get_value_of(path, &self.actual) {
            Ok(value) => ObjectAssert::new(value, self.info),
            Err(err) => panic!("{}", err),
        }
    }

    /// Continues on the values found at each path, in order
    ///
    /// # Panics
    ///
    /// When a path cannot be resolved, with the introspection error.
    pub fn extracting_all(self, paths: &[&str]) -> IterableAssert<Value> {
        if !self.require_not_null() {
            return IterableAssert::new(Vec::new(), self.info);
        }
        let support = PropertyOrFieldSupport::extraction();
        let values = paths
            .iter()
            .map(|path| support.get_value_of(path, &self.actual))
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_else(|err| panic!("{}", err));
        IterableAssert::new(values, self.info)
    }

    /// Runs assertions written against the actual value
    pub fn satisfies<F>(self, requirements: F) -> Self
    where
        F: FnOnce(&Value),
    {
        requirements(&self.actual);
        self
    }

    fn require_not_null(&self) -> bool {
        let not_null = !self.actual.is_null();
        self.info
            .check(not_null, || "\nExpecting actual not to be null".to_string());
        not_null
    }
}
