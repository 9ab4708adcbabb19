//! Common test utilities for fluent-assert integration tests
//!
//! This module provides the shared test kit:
//! - `Name`, `Employee` and `Manager` registered for introspection
//! - Employee variants whose getters fail, are associated fns or return unit
//! - Tracing setup and the lock serializing tests that change global flags

#![allow(dead_code)]

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use fluent_assert::prelude::*;
use indexmap::IndexMap;

/// Held by every test that changes process-wide configuration
static GLOBAL_FLAGS: Mutex<()> = Mutex::new(());

pub fn lock_global_flags() -> MutexGuard<'static, ()> {
    GLOBAL_FLAGS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Install a fmt subscriber honoring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Name
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Name {
    pub first: String,
    pub last: Option<String>,
}

impl Name {
    pub fn new(first: &str) -> Self {
        Self {
            first: first.to_string(),
            last: None,
        }
    }

    pub fn with_last(first: &str, last: &str) -> Self {
        Self {
            first: first.to_string(),
            last: Some(last.to_string()),
        }
    }

    /// "first last", or just "first"
    pub fn full(&self) -> String {
        match &self.last {
            Some(last) => format!("{} {}", self.first, last),
            None => self.first.clone(),
        }
    }
}

introspectable!(Name => |t| t
    .getter("get_first", |n| n.first.clone())
    .getter("get_last", |n| Value::nullable(n.last.clone()))
    .getter("get_name", |n| n.full())
    .private_field("first", |n| n.first.clone())
    .private_field("last", |n| Value::nullable(n.last.clone()))
    .with_equality());

// ============================================================================
// Employee
// ============================================================================

/// Clones share `field`, so two employees can point at each other
#[derive(Clone)]
pub struct Employee {
    pub id: i64,
    name: Name,
    age: i32,
    pub surname: Option<Name>,
    city: String,
    pub field: Arc<OnceLock<Value>>,
    relations: IndexMap<String, Employee>,
    attributes: IndexMap<String, String>,
}

impl Employee {
    pub fn new(id: i64, name: Name, age: i32) -> Self {
        Self {
            id,
            name,
            age,
            surname: None,
            city: "New York".to_string(),
            field: Arc::new(OnceLock::new()),
            relations: IndexMap::new(),
            attributes: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn is_adult(&self) -> bool {
        self.age > 18
    }

    pub fn set_relation(&mut self, relation: &str, employee: Employee) {
        self.relations.insert(relation.to_string(), employee);
    }

    pub fn set_attribute(&mut self, attribute: &str, value: &str) {
        self.attributes.insert(attribute.to_string(), value.to_string());
    }

    /// Points `field` at `other`; only the first call has an effect
    pub fn link_to(&self, other: &Employee) {
        let _ = self.field.set(Value::object(other.clone()));
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `field` may point back at this employee
        f.debug_struct("Employee")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("age", &self.age)
            .finish()
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.age == other.age
    }
}

introspectable!(Employee => |t| t
    .getter("get_name", |e| Value::object(e.name.clone()))
    .getter("get_age", |e| e.age)
    .predicate("is_adult", |e| e.is_adult())
    .getter("get_me", |e| Value::object(e.clone()))
    .public_field("id", |e| e.id)
    .public_field("surname", |e| Value::nullable_object(e.surname.clone()))
    .public_field("field", |e| e.field.get().cloned().unwrap_or_default())
    .private_field("name", |e| Value::object(e.name.clone()))
    .private_field("age", |e| e.age)
    .private_field("city", |e| e.city.clone())
    .private_field("relations", |e| {
        Value::Map(
            e.relations
                .iter()
                .map(|(relation, employee)| (relation.clone(), Value::object(employee.clone())))
                .collect(),
        )
    })
    .private_field("attributes", |e| e.attributes.clone())
    .with_equality());

pub fn yoda() -> Employee {
    let mut yoda = Employee::new(1, Name::new("Yoda"), 800);
    yoda.set_relation("padawan", Employee::new(3, Name::with_last("Luke", "Skywalker"), 24));
    yoda
}

pub fn luke() -> Employee {
    Employee::new(2, Name::new("Luke"), 22)
}

pub fn han() -> Employee {
    Employee::new(3, Name::new("Han"), 31)
}

// ============================================================================
// Employee variants
// ============================================================================

/// `get_name` fails, the embedded `name` field is still readable
#[derive(Debug, Clone)]
pub struct BrokenNameEmployee {
    pub employee: Employee,
}

introspectable!(BrokenNameEmployee => |t| t
    .try_getter("get_name", |_| Err(AccessorError::new("name is unavailable")))
    .embed(|e| &e.employee));

/// `get_name` differs from the `name` field
#[derive(Debug, Clone)]
pub struct OverriddenNameEmployee {
    pub employee: Employee,
    pub overridden: Name,
}

introspectable!(OverriddenNameEmployee => |t| t
    .getter("get_name", |e| Value::object(e.overridden.clone()))
    .embed(|e| &e.employee));

/// `is_adult` fails and no `adult` field exists
#[derive(Debug, Clone)]
pub struct BrokenAdultEmployee {
    pub employee: Employee,
}

introspectable!(BrokenAdultEmployee => |t| t
    .try_predicate("is_adult", |_| Err(AccessorError::new("age is unknown")))
    .embed(|e| &e.employee));

/// Only an associated `get_city` fn matches `city`
#[derive(Debug, Clone)]
pub struct StaticPropertyEmployee {
    pub employee: Employee,
}

introspectable!(StaticPropertyEmployee => |t| t
    .associated_fn("get_city", ReturnKind::Value)
    .embed(|e| &e.employee));

/// Only an associated bare `city` fn matches `city`
#[derive(Debug, Clone)]
pub struct StaticBarePropertyEmployee {
    pub employee: Employee,
}

introspectable!(StaticBarePropertyEmployee => |t| t
    .associated_fn("city", ReturnKind::Value)
    .embed(|e| &e.employee));

/// An associated `is_tall` fn and a `tall` field set to false
#[derive(Debug, Clone)]
pub struct StaticBooleanPropertyEmployee {
    pub employee: Employee,
    tall: bool,
}

impl StaticBooleanPropertyEmployee {
    pub fn new(employee: Employee) -> Self {
        Self { employee, tall: false }
    }
}

introspectable!(StaticBooleanPropertyEmployee => |t| t
    .associated_fn("is_tall", ReturnKind::Bool)
    .private_field("tall", |e| e.tall)
    .embed(|e| &e.employee));

/// `get_city` returns unit
#[derive(Debug, Clone)]
pub struct VoidGetterPropertyEmployee {
    pub employee: Employee,
}

introspectable!(VoidGetterPropertyEmployee => |t| t
    .unit_method("get_city")
    .embed(|e| &e.employee));

// ============================================================================
// Manager, Droid and Point
// ============================================================================

/// Embeds an `Employee`, so its getters and fields resolve on managers
#[derive(Debug, Clone)]
pub struct Manager {
    pub employee: Employee,
    pub reports: Vec<Employee>,
}

introspectable!(Manager => |t| t
    .getter("get_reports", |m| {
        m.reports.iter().cloned().map(Value::object).collect::<Vec<_>>()
    })
    .embed(|m| &m.employee));

/// Only a bare-name `model` method, no `get_` prefix
#[derive(Debug, Clone)]
pub struct Droid {
    pub model: String,
}

introspectable!(Droid => |t| t
    .getter("model", |d| d.model.clone()));

/// A record: bare-name accessors always count as getters
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

introspectable!(Point => |t| t
    .record()
    .getter("x", |p| p.x)
    .getter("y", |p| p.y)
    .with_equality());
