//! Property, field or map key resolution over dotted paths
//!
//! Each path segment is resolved against the current value by trying a
//! getter, then a field, then a map key. `[n]` suffixes index into lists.

use tracing::debug;

use super::describe_target;
use super::field::FieldSupport;
use super::path::{self, Segment};
use super::property::PropertySupport;
use crate::errors::IntrospectionError;
use crate::value::Value;

/// Name of the pseudo property exposing the content of an `Optional`
const OPTIONAL_VALUE: &str = "value";

#[derive(Debug, Clone, Copy)]
pub struct PropertyOrFieldSupport {
    property_support: PropertySupport,
    field_support: FieldSupport,
}

static EXTRACTION: PropertyOrFieldSupport = PropertyOrFieldSupport::new(PropertySupport, FieldSupport::extraction());
static COMPARISON: PropertyOrFieldSupport = PropertyOrFieldSupport::new(PropertySupport, FieldSupport::comparison());

impl PropertyOrFieldSupport {
    pub const fn new(property_support: PropertySupport, field_support: FieldSupport) -> Self {
        Self {
            property_support,
            field_support,
        }
    }

    /// Shared instance used by `extracting`
    pub fn extraction() -> &'static PropertyOrFieldSupport {
        &EXTRACTION
    }

    /// Shared instance used by field-by-field comparisons
    pub fn comparison() -> &'static PropertyOrFieldSupport {
        &COMPARISON
    }

    pub fn field_support(&self) -> FieldSupport {
        self.field_support
    }

    /// Resolves `path` against `input`
    ///
    /// ```rust,ignore
    /// let first = PropertyOrFieldSupport::extraction()
    ///     .get_value_of("relations.padawan.name.first", &yoda)?;
    /// ```
    pub fn get_value_of(&self, path: &str, input: &Value) -> Result<Value, IntrospectionError> {
        if path.is_empty() {
            return Err(IntrospectionError::invalid_argument(
                "The name of the property/field to read should not be empty",
            ));
        }
        if input.is_null() {
            return Err(IntrospectionError::invalid_argument(
                "The object to extract property/field from should not be null",
            ));
        }
        self.resolve(path, input)
    }

    /// Resolves the same path against every input
    pub fn get_values_of(&self, path: &str, inputs: &[Value]) -> Result<Vec<Value>, IntrospectionError> {
        inputs.iter().map(|input| self.get_value_of(path, input)).collect()
    }

    fn resolve(&self, path: &str, input: &Value) -> Result<Value, IntrospectionError> {
        let (head, rest) = match path::split_nested(path) {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        let segment = path::parse_segment(head);
        let value = self.resolve_segment(&segment, input)?;

        match rest {
            Some(_) if value.is_null() => Ok(Value::Null),
            Some(rest) => self.resolve(rest, &value),
            None => Ok(value),
        }
    }

    fn resolve_segment(&self, segment: &Segment, input: &Value) -> Result<Value, IntrospectionError> {
        let mut value = if segment.name.is_empty() && !segment.indexes.is_empty() {
            input.clone()
        } else {
            self.get_simple_value(&segment.name, input)?
        };
        for &index in &segment.indexes {
            value = index_into(value, index, &segment.name)?;
        }
        Ok(value)
    }

    /// Value of a single name: property first, then field, then map key
    ///
    /// When nothing matches, a failing getter is reported as is; otherwise
    /// both the property and the field lookup failures are reported.
    pub fn get_simple_value(&self, name: &str, input: &Value) -> Result<Value, IntrospectionError> {
        if let Value::Optional(inner) = input {
            if name == OPTIONAL_VALUE {
                return Ok(inner.as_deref().cloned().unwrap_or(Value::Null));
            }
        }

        let property_error = match self.property_support.property_value(name, input) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let field_error = match self.field_support.field_value(name, input) {
            Ok(value) => {
                debug!(name, reason = %property_error, "Property lookup failed, read field instead");
                return Ok(value);
            }
            Err(err) => err,
        };

        if let Some(value) = input.as_map().and_then(|map| map.get(name)) {
            debug!(name, "No property or field, read map key instead");
            return Ok(value.clone());
        }

        if property_error.is_getter_invocation() {
            return Err(property_error);
        }

        Err(IntrospectionError::PropertyOrFieldNotFound {
            name: name.to_string(),
            property_error: Box::new(property_error),
            field_error: Box::new(field_error),
        })
    }
}

impl Default for PropertyOrFieldSupport {
    fn default() -> Self {
        EXTRACTION
    }
}

fn index_into(value: Value, index: usize, segment: &str) -> Result<Value, IntrospectionError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::List(mut items) => {
            let len = items.len();
            if index < len {
                Ok(items.swap_remove(index))
            } else {
                Err(IntrospectionError::IndexOutOfBounds {
                    segment: segment.to_string(),
                    index,
                    len,
                    target: describe_target(&Value::List(items)),
                })
            }
        }
        other => Err(IntrospectionError::NotIndexable {
            segment: segment.to_string(),
            index,
            target: describe_target(&other),
        }),
    }
}
