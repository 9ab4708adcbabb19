//! Registered accessor tables
//!
//! A [`TypeDescriptor`] lists what introspection may call on a type: its
//! methods (with receiver and return kind, so associated fns and unit
//! returning methods can be rejected as getters), its fields (with
//! visibility) and the types embedded in it, which stand in for a
//! superclass.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

use super::Introspect;
use crate::errors::AccessorError;
use crate::value::Value;

type Accessor = Box<dyn Fn(&dyn Any) -> Result<Value, AccessorError> + Send + Sync>;
type Projection = Box<dyn for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Introspect> + Send + Sync>;
type Equality = Box<dyn Fn(&dyn Any, &dyn Any) -> Option<bool> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Regular type, bare-name getters depend on configuration
    Plain,
    /// Plain data carrier, bare-name getters are always tried
    Record,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receiver {
    /// Takes `&self`
    Instance,
    /// Associated fn without a receiver
    Associated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    Value,
    Bool,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

pub struct MethodDescriptor {
    name: String,
    receiver: Receiver,
    returns: ReturnKind,
    invoke: Option<Accessor>,
}

impl MethodDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn receiver(&self) -> Receiver {
        self.receiver
    }

    pub fn returns(&self) -> ReturnKind {
        self.returns
    }

    /// Instance method returning something
    pub fn is_valid_getter(&self) -> bool {
        self.receiver == Receiver::Instance && self.returns != ReturnKind::Unit && self.invoke.is_some()
    }

    pub(crate) fn invoke(&self, target: &dyn Introspect) -> Result<Value, AccessorError> {
        match &self.invoke {
            Some(invoke) => invoke(target.as_any()),
            None => Err(AccessorError::new(format!(
                "method '{}' cannot be invoked on an instance",
                self.name
            ))),
        }
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("receiver", &self.receiver)
            .field("returns", &self.returns)
            .finish()
    }
}

pub struct FieldDescriptor {
    name: String,
    visibility: Visibility,
    read: Accessor,
}

impl FieldDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub(crate) fn read(&self, target: &dyn Introspect) -> Result<Value, AccessorError> {
        (self.read)(target.as_any())
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .finish()
    }
}

/// A type whose accessors are reachable from the embedding type
pub struct EmbeddedDescriptor {
    type_name: &'static str,
    descriptor: fn() -> &'static TypeDescriptor,
    project: Projection,
}

impl EmbeddedDescriptor {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn descriptor(&self) -> &'static TypeDescriptor {
        (self.descriptor)()
    }

    pub(crate) fn project<'a>(&self, target: &'a dyn Introspect) -> Option<&'a dyn Introspect> {
        (self.project)(target.as_any())
    }
}

impl fmt::Debug for EmbeddedDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedDescriptor")
            .field("type_name", &self.type_name)
            .finish()
    }
}

pub struct TypeDescriptor {
    type_name: String,
    type_id: TypeId,
    kind: TypeKind,
    methods: Vec<MethodDescriptor>,
    fields: Vec<FieldDescriptor>,
    embedded: Vec<EmbeddedDescriptor>,
    equality: Option<Equality>,
}

impl TypeDescriptor {
    pub fn builder<T: Introspect>(type_name: impl Into<String>) -> DescriptorBuilder<T> {
        DescriptorBuilder {
            descriptor: TypeDescriptor {
                type_name: type_name.into(),
                type_id: TypeId::of::<T>(),
                kind: TypeKind::Plain,
                methods: Vec::new(),
                fields: Vec::new(),
                embedded: Vec::new(),
                equality: None,
            },
            _marker: PhantomData,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_record(&self) -> bool {
        self.kind == TypeKind::Record
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn embedded(&self) -> &[EmbeddedDescriptor] {
        &self.embedded
    }

    /// Own method with this exact name
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Own field with this exact name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Finds a method on this type or, depth-first, on its embedded types.
    ///
    /// The returned route lists the embedding indexes to follow from an
    /// instance of this type to the instance owning the method.
    pub fn find_method(&'static self, name: &str) -> Option<(Vec<usize>, &'static MethodDescriptor)> {
        if let Some(method) = self.method(name) {
            return Some((Vec::new(), method));
        }
        self.embedded.iter().enumerate().find_map(|(index, embedded)| {
            embedded.descriptor().find_method(name).map(|(mut route, method)| {
                route.insert(0, index);
                (route, method)
            })
        })
    }

    /// Same lookup as [`TypeDescriptor::find_method`] for fields
    pub fn find_field(&'static self, name: &str) -> Option<(Vec<usize>, &'static FieldDescriptor)> {
        if let Some(field) = self.field(name) {
            return Some((Vec::new(), field));
        }
        self.embedded.iter().enumerate().find_map(|(index, embedded)| {
            embedded.descriptor().find_field(name).map(|(mut route, field)| {
                route.insert(0, index);
                (route, field)
            })
        })
    }

    /// Field names of this type followed by those of embedded types, first occurrence wins
    pub fn all_field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.iter().map(|f| f.name.clone()).collect();
        for embedded in &self.embedded {
            for name in embedded.descriptor().all_field_names() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Reads a field whatever its visibility, `None` if no such field exists
    pub(crate) fn read_field(
        &'static self,
        name: &str,
        target: &dyn Introspect,
    ) -> Option<Result<Value, AccessorError>> {
        let (route, field) = self.find_field(name)?;
        let owner = follow_route(target, &route)?;
        Some(field.read(owner))
    }

    pub(crate) fn registered_equality(&self, a: &dyn Any, b: &dyn Any) -> Option<bool> {
        self.equality.as_ref().and_then(|equality| equality(a, b))
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .field("methods", &self.methods)
            .field("fields", &self.fields)
            .field("embedded", &self.embedded)
            .finish()
    }
}

/// Walks embedding indexes from `target` down to the instance owning an accessor
pub(crate) fn follow_route<'a>(target: &'a dyn Introspect, route: &[usize]) -> Option<&'a dyn Introspect> {
    let mut current = target;
    for &index in route {
        let embedded = current.descriptor().embedded.get(index)?;
        current = embedded.project(current)?;
    }
    Some(current)
}

fn downcast<T: Any>(target: &dyn Any) -> Result<&T, AccessorError> {
    target.downcast_ref::<T>().ok_or_else(|| {
        AccessorError::new(format!(
            "accessor registered for {} called on another type",
            std::any::type_name::<T>()
        ))
    })
}

fn projection<F>(f: F) -> Projection
where
    F: for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Introspect> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Builds a [`TypeDescriptor`] for `T`
pub struct DescriptorBuilder<T> {
    descriptor: TypeDescriptor,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Introspect> DescriptorBuilder<T> {
    pub fn record(mut self) -> Self {
        self.descriptor.kind = TypeKind::Record;
        self
    }

    pub fn getter<V, F>(self, name: &str, f: F) -> Self
    where
        V: Into<Value>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.try_getter(name, move |t| Ok(f(t).into()))
    }

    /// Getter that can fail, like a getter throwing
    pub fn try_getter<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&T) -> Result<Value, AccessorError> + Send + Sync + 'static,
    {
        self.descriptor.methods.push(MethodDescriptor {
            name: name.to_string(),
            receiver: Receiver::Instance,
            returns: ReturnKind::Value,
            invoke: Some(Box::new(move |any: &dyn Any| f(downcast::<T>(any)?))),
        });
        self
    }

    pub fn predicate<F>(self, name: &str, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.try_predicate(name, move |t| Ok(f(t)))
    }

    pub fn try_predicate<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&T) -> Result<bool, AccessorError> + Send + Sync + 'static,
    {
        self.descriptor.methods.push(MethodDescriptor {
            name: name.to_string(),
            receiver: Receiver::Instance,
            returns: ReturnKind::Bool,
            invoke: Some(Box::new(move |any: &dyn Any| {
                f(downcast::<T>(any)?).map(Value::Bool)
            })),
        });
        self
    }

    /// Declares an associated fn; it shadows nothing and is never used as a getter
    pub fn associated_fn(mut self, name: &str, returns: ReturnKind) -> Self {
        self.descriptor.methods.push(MethodDescriptor {
            name: name.to_string(),
            receiver: Receiver::Associated,
            returns,
            invoke: None,
        });
        self
    }

    /// Declares a `&self` method returning `()`; never used as a getter
    pub fn unit_method(mut self, name: &str) -> Self {
        self.descriptor.methods.push(MethodDescriptor {
            name: name.to_string(),
            receiver: Receiver::Instance,
            returns: ReturnKind::Unit,
            invoke: None,
        });
        self
    }

    pub fn field<V, F>(mut self, name: &str, visibility: Visibility, f: F) -> Self
    where
        V: Into<Value>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.descriptor.fields.push(FieldDescriptor {
            name: name.to_string(),
            visibility,
            read: Box::new(move |any: &dyn Any| Ok(f(downcast::<T>(any)?).into())),
        });
        self
    }

    pub fn public_field<V, F>(self, name: &str, f: F) -> Self
    where
        V: Into<Value>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.field(name, Visibility::Public, f)
    }

    pub fn private_field<V, F>(self, name: &str, f: F) -> Self
    where
        V: Into<Value>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.field(name, Visibility::Private, f)
    }

    /// Makes the accessors of an embedded `P` reachable from `T`
    pub fn embed<P, F>(mut self, f: F) -> Self
    where
        P: Introspect,
        F: for<'a> Fn(&'a T) -> &'a P + Send + Sync + 'static,
    {
        self.descriptor.embedded.push(EmbeddedDescriptor {
            type_name: std::any::type_name::<P>(),
            descriptor: P::type_descriptor,
            project: projection(move |any: &dyn Any| {
                any.downcast_ref::<T>().map(|t| f(t) as &dyn Introspect)
            }),
        });
        self
    }

    /// Compare values of this type with `PartialEq` instead of field by field
    pub fn with_equality(mut self) -> Self
    where
        T: PartialEq,
    {
        self.descriptor.equality = Some(Box::new(|a: &dyn Any, b: &dyn Any| {
            match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
                (Some(a), Some(b)) => Some(a == b),
                _ => None,
            }
        }));
        self
    }

    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }
}
