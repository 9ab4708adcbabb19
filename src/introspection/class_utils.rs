//! Type classification helpers

use std::any::TypeId;

use once_cell::sync::Lazy;

use super::TypeDescriptor;

static PRIMITIVE_OR_WRAPPER_TYPES: Lazy<Vec<TypeId>> = Lazy::new(|| {
    vec![
        TypeId::of::<bool>(),
        TypeId::of::<char>(),
        TypeId::of::<i8>(),
        TypeId::of::<i16>(),
        TypeId::of::<i32>(),
        TypeId::of::<i64>(),
        TypeId::of::<i128>(),
        TypeId::of::<isize>(),
        TypeId::of::<u8>(),
        TypeId::of::<u16>(),
        TypeId::of::<u32>(),
        TypeId::of::<u64>(),
        TypeId::of::<u128>(),
        TypeId::of::<usize>(),
        TypeId::of::<f32>(),
        TypeId::of::<f64>(),
        TypeId::of::<()>(),
        TypeId::of::<Box<bool>>(),
        TypeId::of::<Box<char>>(),
        TypeId::of::<Box<i8>>(),
        TypeId::of::<Box<i16>>(),
        TypeId::of::<Box<i32>>(),
        TypeId::of::<Box<i64>>(),
        TypeId::of::<Box<i128>>(),
        TypeId::of::<Box<isize>>(),
        TypeId::of::<Box<u8>>(),
        TypeId::of::<Box<u16>>(),
        TypeId::of::<Box<u32>>(),
        TypeId::of::<Box<u64>>(),
        TypeId::of::<Box<u128>>(),
        TypeId::of::<Box<usize>>(),
        TypeId::of::<Box<f32>>(),
        TypeId::of::<Box<f64>>(),
        TypeId::of::<Box<()>>(),
    ]
});

/// Scalar primitives, their boxed form and `()`
pub fn is_primitive_or_wrapper(type_id: TypeId) -> bool {
    PRIMITIVE_OR_WRAPPER_TYPES.contains(&type_id)
}

pub fn is_primitive_or_wrapper_type<T: ?Sized + 'static>() -> bool {
    is_primitive_or_wrapper(TypeId::of::<T>())
}

/// Every type embedded in `descriptor`, depth-first, nearest first
pub fn all_embedded_types(descriptor: &TypeDescriptor) -> Vec<&'static TypeDescriptor> {
    let mut types = Vec::new();
    for embedded in descriptor.embedded() {
        let embedded_descriptor = embedded.descriptor();
        types.push(embedded_descriptor);
        types.extend(all_embedded_types(embedded_descriptor));
    }
    types
}
