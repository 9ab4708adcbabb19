//! Error types for fluent-assert

use thiserror::Error;

/// Main error type for fluent-assert
#[derive(Error, Debug)]
pub enum FluentAssertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Introspection(#[from] IntrospectionError),
}

pub type Result<T> = std::result::Result<T, FluentAssertError>;

/// Failure reported by a registered getter, the equivalent of a getter throwing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AccessorError {
    message: String,
}

impl AccessorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure to resolve a property, field, map key or index by name
#[derive(Error, Debug, Clone)]
pub enum IntrospectionError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("No getter for property '{property}' in {target}")]
    NoGetter { property: String, target: String },

    #[error("Unable to obtain the value of the property <'{property}'> from <{target}>: {source}")]
    GetterInvocation {
        property: String,
        target: String,
        source: AccessorError,
    },

    #[error("Unable to obtain the value of the field <'{field}'> from <{target}>: no field named '{field}' in {type_name}")]
    FieldNotFound {
        field: String,
        target: String,
        type_name: String,
    },

    #[error("Unable to obtain the value of the field <'{field}'> from <{target}>, check that field is public or that private field access is enabled")]
    FieldNotAccessible { field: String, target: String },

    #[error("Ambiguous field name '{normalized}' in {type_name}: fields {candidates:?} all normalize to it ({strategy})")]
    AmbiguousField {
        normalized: String,
        type_name: String,
        candidates: Vec<String>,
        strategy: String,
    },

    #[error("\nCan't find any field or property with name '{name}'.\nError when introspecting properties was :\n- {property_error} \nError when introspecting fields was :\n- {field_error}")]
    PropertyOrFieldNotFound {
        name: String,
        property_error: Box<IntrospectionError>,
        #[source]
        field_error: Box<IntrospectionError>,
    },

    #[error("Index {index} out of bounds for '{segment}' with {len} element(s) in <{target}>")]
    IndexOutOfBounds {
        segment: String,
        index: usize,
        len: usize,
        target: String,
    },

    #[error("Cannot apply index {index} to '{segment}': <{target}> is not a list")]
    NotIndexable {
        segment: String,
        index: usize,
        target: String,
    },
}

impl IntrospectionError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        IntrospectionError::InvalidArgument(message.into())
    }

    /// Whether this error was caused by a getter failing rather than by a missing accessor
    pub fn is_getter_invocation(&self) -> bool {
        matches!(self, IntrospectionError::GetterInvocation { .. })
    }
}

/// A single failed assertion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Every failure collected by soft assertions, reported at once
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct MultipleAssertionsError {
    errors: Vec<AssertionError>,
}

impl MultipleAssertionsError {
    pub fn new(errors: Vec<AssertionError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[AssertionError] {
        &self.errors
    }
}

impl std::fmt::Display for MultipleAssertionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "\nMultiple Failures ({} failure{})",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n-- failure {} --\n{}", i + 1, error.message())?;
        }
        Ok(())
    }
}
