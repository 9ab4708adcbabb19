//! Property and field introspection
//!
//! Resolves values by name from objects that registered their accessors in a
//! [`TypeDescriptor`]. Lookups try, in order, a getter-style property method,
//! the field itself and, for maps, the key; dotted paths walk nested values.
//!
//! Register a type with the [`introspectable!`](crate::introspectable) macro:
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, PartialEq)]
//! struct Name { first: String, last: Option<String> }
//!
//! fluent_assert::introspectable!(Name => |t| t
//!     .getter("get_first", |n| n.first.clone())
//!     .private_field("first", |n| n.first.clone())
//!     .private_field("last", |n| Value::nullable(n.last.clone()))
//!     .with_equality());
//! ```

pub mod case_format;
pub mod class_utils;
pub mod descriptor;
pub mod field;
pub mod getter;
pub mod normalize;
pub mod path;
pub mod property;
pub mod property_or_field;

pub use case_format::to_camel_case;
pub use class_utils::{all_embedded_types, is_primitive_or_wrapper, is_primitive_or_wrapper_type};
pub use descriptor::{
    DescriptorBuilder, EmbeddedDescriptor, FieldDescriptor, MethodDescriptor, Receiver, ReturnKind,
    TypeDescriptor, TypeKind, Visibility,
};
pub use field::FieldSupport;
pub use getter::{property_getter, ResolvedMethod};
pub use normalize::{normalize, CamelCaseNormalization, NormalizeStrategy, SnakeOrCamelCase};
pub use property::PropertySupport;
pub use property_or_field::PropertyOrFieldSupport;

use std::any::Any;
use std::fmt;

/// A type exposing its accessors to introspection
///
/// Implement it with [`introspectable!`](crate::introspectable) rather than by hand.
pub trait Introspect: Any + fmt::Debug + Send + Sync {
    /// Descriptor shared by every instance of the type
    fn type_descriptor() -> &'static TypeDescriptor
    where
        Self: Sized;

    fn descriptor(&self) -> &'static TypeDescriptor;

    fn as_any(&self) -> &dyn Any;
}

/// Implements [`Introspect`] for a type from a descriptor-building closure
///
/// The descriptor is built once, on first use.
#[macro_export]
macro_rules! introspectable {
    ($ty:ty => $build:expr) => {
        impl $crate::introspection::Introspect for $ty {
            fn type_descriptor() -> &'static $crate::introspection::TypeDescriptor {
                static DESCRIPTOR: $crate::__private::Lazy<$crate::introspection::TypeDescriptor> =
                    $crate::__private::Lazy::new(|| {
                        let build: fn(
                            $crate::introspection::DescriptorBuilder<$ty>,
                        ) -> $crate::introspection::DescriptorBuilder<$ty> = $build;
                        build($crate::introspection::TypeDescriptor::builder::<$ty>(stringify!($ty)))
                            .build()
                    });
                &DESCRIPTOR
            }

            fn descriptor(&self) -> &'static $crate::introspection::TypeDescriptor {
                <Self as $crate::introspection::Introspect>::type_descriptor()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

/// Short representation of an extraction target for error messages
pub(crate) fn describe_target(target: &crate::value::Value) -> String {
    crate::representation::to_string_of(target)
}
