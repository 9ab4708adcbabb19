//! fluent-assert library interface
//!
//! Chainable, type-specific assertions for test suites, with extraction of
//! nested properties and fields from registered types.
//!
//! # Module Organization
//!
//! - [`api`] - Entry points (`assert_that`, soft assertions) and assert types
//! - [`introspection`] - Getter, field and map-key resolution over dotted paths
//! - [`value`] - Dynamic values produced by extraction
//! - [`representation`] - Value formatting in failure messages
//! - [`config`] - Process-wide flags and the config file
//! - [`errors`] - Error types (IntrospectionError, AssertionError, Result)
//!
//! ```rust,ignore
//! use fluent_assert::prelude::*;
//!
//! #[derive(Debug)]
//! struct Jedi { name: String, age: u32 }
//!
//! introspectable!(Jedi => |t| t
//!     .getter("get_name", |j| j.name.clone())
//!     .private_field("age", |j| j.age));
//!
//! let yoda = Jedi { name: "Yoda".into(), age: 800 };
//! assert_that_object(yoda)
//!     .has_field_or_property_with_value("age", 800)
//!     .extracting("name")
//!     .is_equal_to("Yoda");
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod introspection;
pub mod representation;
pub mod value;

pub use api::{
    assert_softly, assert_that, assert_that_comparable, assert_that_object, assert_that_objects,
    Assertable, SoftAssertions,
};
pub use config::Configuration;
pub use errors::{
    AccessorError, AssertionError, FluentAssertError, IntrospectionError, MultipleAssertionsError,
    Result,
};
pub use introspection::Introspect;
pub use value::Value;

/// Everything needed to write assertions and register types
pub mod prelude {
    pub use crate::api::{
        assert_softly, assert_that, assert_that_comparable, assert_that_object,
        assert_that_objects, SoftAssertions,
    };
    pub use crate::errors::AccessorError;
    pub use crate::introspectable;
    pub use crate::introspection::{Introspect, ReturnKind, Visibility};
    pub use crate::value::Value;
}

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
