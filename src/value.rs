//! Dynamic values flowing through extraction and assertions
//!
//! Extracted data is owned: getters and fields produce a [`Value`], nested
//! introspectable objects travel as `Value::Object(Arc<dyn Introspect>)`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::introspection::Introspect;

/// Depth after which two distinct objects without a registered equality are considered unequal
const MAX_FIELD_COMPARISON_DEPTH: usize = 32;

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    Optional(Option<Box<Value>>),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Object(Arc<dyn Introspect>),
}

/// Coarse classification of a [`Value`], used in messages and type checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    Char,
    Str,
    Optional,
    List,
    Map,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Char => "char",
            ValueKind::Str => "string",
            ValueKind::Optional => "optional",
            ValueKind::List => "list",
            ValueKind::Map => "map",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Wrap an introspectable object
    pub fn object<T: Introspect>(object: T) -> Self {
        Value::Object(Arc::new(object))
    }

    /// `None` becomes [`Value::Null`], the equivalent of a null reference
    pub fn nullable<T: Into<Value>>(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }

    /// Like [`Value::nullable`] for introspectable objects
    pub fn nullable_object<T: Introspect>(value: Option<T>) -> Self {
        value.map(Value::object).unwrap_or(Value::Null)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Char(_) => ValueKind::Char,
            Value::Str(_) => ValueKind::Str,
            Value::Optional(_) => ValueKind::Optional,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Name of the value's type: the registered type name for objects, the kind otherwise
    pub fn type_name(&self) -> String {
        match self {
            Value::Object(object) => object.descriptor().type_name().to_string(),
            other => other.kind().to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::UInt(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&dyn Introspect> {
        match self {
            Value::Object(object) => Some(object.as_ref()),
            _ => None,
        }
    }

    fn equals(&self, other: &Value, depth: usize) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(i), Value::UInt(u)) | (Value::UInt(u), Value::Int(i)) => {
                u64::try_from(*i).is_ok_and(|i| i == *u)
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Optional(a), Value::Optional(b)) => match (a, b) {
                (Some(a), Some(b)) => a.equals(b, depth),
                (None, None) => true,
                _ => false,
            },
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.equals(b, depth))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| b.get(k).is_some_and(|other| v.equals(other, depth)))
            }
            (Value::Object(a), Value::Object(b)) => objects_equal(a, b, depth),
            _ => false,
        }
    }
}

fn objects_equal(a: &Arc<dyn Introspect>, b: &Arc<dyn Introspect>, depth: usize) -> bool {
    if Arc::ptr_eq(a, b) {
        return true;
    }
    let descriptor = a.descriptor();
    if descriptor.type_id() != b.descriptor().type_id() {
        return false;
    }
    if let Some(equal) = descriptor.registered_equality(a.as_any(), b.as_any()) {
        return equal;
    }
    if depth >= MAX_FIELD_COMPARISON_DEPTH {
        return false;
    }
    // field by field over every registered field, embedded ones included
    descriptor.all_field_names().iter().all(|name| {
        match (
            descriptor.read_field(name, a.as_ref()),
            descriptor.read_field(name, b.as_ref()),
        ) {
            (Some(Ok(x)), Some(Ok(y))) => x.equals(&y, depth + 1),
            _ => false,
        }
    })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, 0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::representation::to_string_of(self))
    }
}

macro_rules! value_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

macro_rules! value_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::UInt(v as u64)
            }
        })*
    };
}

value_from_signed!(i8, i16, i32, i64, isize);
value_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Optional(v.map(|inner| Box::new(inner.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<HashMap<String, V>> for Value {
    fn from(v: HashMap<String, V>) -> Self {
        // HashMap order is unspecified, sort keys for stable representation
        let sorted: BTreeMap<String, V> = v.into_iter().collect();
        sorted.into()
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Value {
    fn from(v: BTreeMap<String, V>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<Value>> From<IndexMap<String, V>> for Value {
    fn from(v: IndexMap<String, V>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<Arc<dyn Introspect>> for Value {
    fn from(v: Arc<dyn Introspect>) -> Self {
        Value::Object(v)
    }
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
