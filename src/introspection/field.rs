//! Field access
//!
//! Fields are looked up by exact name on the type, then on its embedded
//! types. Whether private fields may be read depends on the [`FieldSupport`]
//! policy. [`FieldSupport::normalized_field_value`] matches names after
//! normalization instead.

use std::any::TypeId;
use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::debug;

use super::normalize::NormalizeStrategy;
use super::path;
use super::{describe_target, Introspect};
use crate::config;
use crate::errors::IntrospectionError;
use crate::value::Value;

/// Normalized field tables: (type, strategy description) -> normalized name -> original names
static NORMALIZED_FIELDS: Lazy<DashMap<(TypeId, String), Arc<BTreeMap<String, Vec<String>>>>> =
    Lazy::new(DashMap::new);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrivateFieldAccess {
    /// Follows the "allow extracting private fields" flag
    Extraction,
    /// Follows the "allow comparing private fields" flag
    Comparison,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSupport {
    private_fields: PrivateFieldAccess,
}

impl FieldSupport {
    /// Policy used by `extracting`
    pub const fn extraction() -> Self {
        Self {
            private_fields: PrivateFieldAccess::Extraction,
        }
    }

    /// Policy used when comparing objects field by field
    pub const fn comparison() -> Self {
        Self {
            private_fields: PrivateFieldAccess::Comparison,
        }
    }

    pub const fn public_fields_only() -> Self {
        Self {
            private_fields: PrivateFieldAccess::Denied,
        }
    }

    pub fn is_allowed_to_use_private_fields(&self) -> bool {
        match self.private_fields {
            PrivateFieldAccess::Extraction => config::allow_extracting_private_fields(),
            PrivateFieldAccess::Comparison => config::allow_comparing_private_fields(),
            PrivateFieldAccess::Denied => false,
        }
    }

    /// Value of a possibly nested field; a `Null` target or intermediate value yields `Null`
    pub fn field_value_of(&self, field_name: &str, target: &Value) -> Result<Value, IntrospectionError> {
        if target.is_null() {
            return Ok(Value::Null);
        }
        match path::split_nested(field_name) {
            Some((head, rest)) => {
                let value = self.field_value(&path::unescape(head), target)?;
                self.field_value_of(rest, &value)
            }
            None => self.field_value(&path::unescape(field_name), target),
        }
    }

    /// Values of the same field for every target
    pub fn field_values(&self, field_name: &str, targets: &[Value]) -> Result<Vec<Value>, IntrospectionError> {
        targets
            .iter()
            .map(|target| self.field_value_of(field_name, target))
            .collect()
    }

    /// Value of a simple field, no path handling
    pub fn field_value(&self, field_name: &str, target: &Value) -> Result<Value, IntrospectionError> {
        let Some(object) = target.as_object() else {
            return Err(IntrospectionError::FieldNotFound {
                field: field_name.to_string(),
                target: describe_target(target),
                type_name: target.type_name(),
            });
        };
        self.read_field(field_name, object, target)
    }

    fn read_field(
        &self,
        field_name: &str,
        object: &dyn Introspect,
        target: &Value,
    ) -> Result<Value, IntrospectionError> {
        let descriptor = object.descriptor();
        let Some((route, field)) = descriptor.find_field(field_name) else {
            return Err(IntrospectionError::FieldNotFound {
                field: field_name.to_string(),
                target: describe_target(target),
                type_name: descriptor.type_name().to_string(),
            });
        };

        if !field.is_public() && !self.is_allowed_to_use_private_fields() {
            return Err(IntrospectionError::FieldNotAccessible {
                field: field_name.to_string(),
                target: describe_target(target),
            });
        }

        let owner = super::descriptor::follow_route(object, &route).ok_or_else(|| {
            IntrospectionError::FieldNotFound {
                field: field_name.to_string(),
                target: describe_target(target),
                type_name: descriptor.type_name().to_string(),
            }
        })?;

        field.read(owner).map_err(|source| IntrospectionError::GetterInvocation {
            property: field_name.to_string(),
            target: describe_target(target),
            source,
        })
    }

    /// Reads the field whose normalized name equals the normalized `field_name`
    ///
    /// Fails with [`IntrospectionError::AmbiguousField`] when several fields of
    /// the type normalize to that name.
    pub fn normalized_field_value(
        &self,
        field_name: &str,
        target: &Value,
        strategy: &dyn NormalizeStrategy,
    ) -> Result<Value, IntrospectionError> {
        let Some(object) = target.as_object() else {
            return self.field_value(field_name, target);
        };

        let descriptor = object.descriptor();
        let normalized = strategy.normalize(field_name);
        let table = normalized_fields(descriptor, strategy);

        match table.get(&normalized).map(Vec::as_slice) {
            Some([original]) => {
                debug!(requested = field_name, field = original.as_str(), "Field matched after normalization");
                self.read_field(original, object, target)
            }
            Some(candidates) => Err(IntrospectionError::AmbiguousField {
                normalized,
                type_name: descriptor.type_name().to_string(),
                candidates: candidates.to_vec(),
                strategy: strategy.description().to_string(),
            }),
            None => Err(IntrospectionError::FieldNotFound {
                field: field_name.to_string(),
                target: describe_target(target),
                type_name: descriptor.type_name().to_string(),
            }),
        }
    }

    /// Names of every field readable under this policy, embedded ones included
    pub fn field_names(&self, target: &Value) -> Vec<String> {
        let Some(object) = target.as_object() else {
            return Vec::new();
        };
        let descriptor = object.descriptor();
        let allow_private = self.is_allowed_to_use_private_fields();
        descriptor
            .all_field_names()
            .into_iter()
            .filter(|name| {
                allow_private
                    || descriptor
                        .find_field(name)
                        .is_some_and(|(_, field)| field.is_public())
            })
            .collect()
    }
}

impl Default for FieldSupport {
    fn default() -> Self {
        Self::extraction()
    }
}

fn normalized_fields(
    descriptor: &'static super::TypeDescriptor,
    strategy: &dyn NormalizeStrategy,
) -> Arc<BTreeMap<String, Vec<String>>> {
    let key = (descriptor.type_id(), strategy.description().to_string());
    NORMALIZED_FIELDS
        .entry(key)
        .or_insert_with(|| {
            let mut table: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for name in descriptor.all_field_names() {
                table.entry(strategy.normalize(&name)).or_default().push(name);
            }
            Arc::new(table)
        })
        .value()
        .clone()
}
