//! Property values read through getters

use super::getter::property_getter;
use super::path;
use super::describe_target;
use crate::errors::IntrospectionError;
use crate::value::Value;

/// Reads properties, i.e. values exposed by getters, from objects
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertySupport;

impl PropertySupport {
    pub const fn instance() -> Self {
        PropertySupport
    }

    /// Value of a possibly nested property, `Null` once a hop is `Null`
    ///
    /// ```rust,ignore
    /// PropertySupport::instance().property_value_of("address.street", &person)?;
    /// ```
    pub fn property_value_of(&self, property_name: &str, target: &Value) -> Result<Value, IntrospectionError> {
        if target.is_null() {
            return Ok(Value::Null);
        }
        match path::split_nested(property_name) {
            Some((head, rest)) => {
                let value = self.property_value(&path::unescape(head), target)?;
                self.property_value_of(rest, &value)
            }
            None => self.property_value(&path::unescape(property_name), target),
        }
    }

    /// Same property read from every target; `Null` targets give `Null`
    pub fn property_values(&self, property_name: &str, targets: &[Value]) -> Result<Vec<Value>, IntrospectionError> {
        targets
            .iter()
            .map(|target| self.property_value_of(property_name, target))
            .collect()
    }

    /// Value of a simple property
    pub fn property_value(&self, property_name: &str, target: &Value) -> Result<Value, IntrospectionError> {
        let Some(object) = target.as_object() else {
            if property_name.is_empty() {
                return Err(IntrospectionError::invalid_argument(
                    "The property name to read should not be empty",
                ));
            }
            return Err(IntrospectionError::NoGetter {
                property: property_name.to_string(),
                target: target.type_name(),
            });
        };

        let getter = property_getter(property_name, object)?;
        getter
            .invoke(object)
            .map_err(|source| IntrospectionError::GetterInvocation {
                property: property_name.to_string(),
                target: describe_target(target),
                source,
            })
    }

    /// Whether a usable getter exists for `property_name`
    pub fn public_getter_exists_for(&self, property_name: &str, target: &Value) -> bool {
        target
            .as_object()
            .is_some_and(|object| property_getter(property_name, object).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AccessorError;

    #[derive(Debug, Clone)]
    struct Street {
        name: String,
    }

    #[derive(Debug, Clone)]
    struct Home {
        street: Option<Street>,
    }

    crate::introspectable!(Street => |t| t
        .getter("get_name", |s| s.name.clone())
        .try_getter("get_length", |_| Err(AccessorError::new("not surveyed"))));

    crate::introspectable!(Home => |t| t
        .getter("get_street", |h| Value::nullable_object(h.street.clone())));

    fn home(street: Option<&str>) -> Value {
        Value::object(Home {
            street: street.map(|name| Street { name: name.to_string() }),
        })
    }

    #[test]
    fn test_nested_property() {
        let value = PropertySupport::instance()
            .property_value_of("street.name", &home(Some("Elm")))
            .unwrap();
        assert_eq!(value, Value::from("Elm"));
    }

    #[test]
    fn test_null_hop_gives_null() {
        let value = PropertySupport::instance()
            .property_value_of("street.name", &home(None))
            .unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_property_values_over_targets() {
        let targets = vec![home(Some("Elm")), Value::Null, home(Some("Oak"))];
        let values = PropertySupport::instance()
            .property_values("street.name", &targets)
            .unwrap();
        assert_eq!(values, vec![Value::from("Elm"), Value::Null, Value::from("Oak")]);
    }

    #[test]
    fn test_failing_getter_is_wrapped() {
        let err = PropertySupport::instance()
            .property_value_of("street.length", &home(Some("Elm")))
            .unwrap_err();
        assert!(err.is_getter_invocation());
        assert!(err.to_string().contains("not surveyed"));
    }

    #[test]
    fn test_missing_property() {
        let err = PropertySupport::instance()
            .property_value("number", &home(None))
            .unwrap_err();
        assert!(matches!(err, IntrospectionError::NoGetter { .. }));
    }

    #[test]
    fn test_public_getter_exists_for() {
        let support = PropertySupport::instance();
        assert!(support.public_getter_exists_for("street", &home(None)));
        assert!(!support.public_getter_exists_for("number", &home(None)));
        assert!(!support.public_getter_exists_for("len", &Value::from("text")));
    }
}
