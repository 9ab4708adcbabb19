//! Getter lookup with a process-wide method cache
//!
//! For a property `x` the candidates are `get_x`, then the bare `x` (when
//! bare-name extraction is enabled or the type is a record), then `is_x`
//! which must return a bool. Associated fns and unit returning methods are
//! never getters.

use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::trace;

use super::descriptor::{follow_route, MethodDescriptor, ReturnKind, TypeDescriptor};
use super::Introspect;
use crate::config;
use crate::errors::{AccessorError, IntrospectionError};
use crate::value::Value;

/// Method cache: (method name, concrete type) -> lookup result, misses included
static METHOD_CACHE: Lazy<DashMap<MethodKey, Option<Arc<ResolvedMethod>>>> = Lazy::new(DashMap::new);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MethodKey {
    name: String,
    type_id: TypeId,
}

/// A method found on a type, possibly through embedded types
#[derive(Debug)]
pub struct ResolvedMethod {
    owner: &'static TypeDescriptor,
    route: Vec<usize>,
    method: &'static MethodDescriptor,
}

impl ResolvedMethod {
    pub fn name(&self) -> &str {
        self.method.name()
    }

    /// Type the lookup started from
    pub fn owner(&self) -> &'static TypeDescriptor {
        self.owner
    }

    pub fn method(&self) -> &'static MethodDescriptor {
        self.method
    }

    /// Embedding indexes leading from the owner to the declaring type, empty when declared on the owner
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    pub fn invoke(&self, target: &dyn Introspect) -> Result<Value, AccessorError> {
        let declaring = follow_route(target, &self.route).ok_or_else(|| {
            AccessorError::new(format!(
                "cannot reach the type declaring '{}' from {}",
                self.method.name(),
                self.owner.type_name()
            ))
        })?;
        self.method.invoke(declaring)
    }
}

/// Resolves the getter for `property_name` on `target`
pub fn property_getter(
    property_name: &str,
    target: &dyn Introspect,
) -> Result<Arc<ResolvedMethod>, IntrospectionError> {
    if property_name.is_empty() {
        return Err(IntrospectionError::invalid_argument(
            "The property name to read should not be empty",
        ));
    }
    find_getter(property_name, target).ok_or_else(|| IntrospectionError::NoGetter {
        property: property_name.to_string(),
        target: target.descriptor().type_name().to_string(),
    })
}

fn find_getter(property_name: &str, target: &dyn Introspect) -> Option<Arc<ResolvedMethod>> {
    let descriptor = target.descriptor();

    if let Some(getter) = find_method(&format!("get_{}", property_name), descriptor) {
        if is_valid_getter(&getter) {
            return Some(getter);
        }
    }

    if config::extract_bare_name_property_methods() || descriptor.is_record() {
        if let Some(getter) = find_method(property_name, descriptor) {
            if is_valid_getter(&getter) {
                return Some(getter);
            }
        }
    }

    find_method(&format!("is_{}", property_name), descriptor)
        .filter(|accessor| is_valid_getter(accessor) && accessor.method.returns() == ReturnKind::Bool)
}

fn is_valid_getter(resolved: &ResolvedMethod) -> bool {
    resolved.method.is_valid_getter()
}

fn find_method(name: &str, descriptor: &'static TypeDescriptor) -> Option<Arc<ResolvedMethod>> {
    let key = MethodKey {
        name: name.to_string(),
        type_id: descriptor.type_id(),
    };

    if let Some(cached) = METHOD_CACHE.get(&key) {
        trace!(method = name, type_name = descriptor.type_name(), "Method cache hit");
        return cached.value().clone();
    }

    trace!(method = name, type_name = descriptor.type_name(), "Method cache miss");
    METHOD_CACHE
        .entry(key)
        .or_insert_with(|| {
            descriptor.find_method(name).map(|(route, method)| {
                Arc::new(ResolvedMethod {
                    owner: descriptor,
                    route,
                    method,
                })
            })
        })
        .value()
        .clone()
}
