//! Process-wide configuration
//!
//! Flags are plain atomics: introspection and representation read them on
//! every call, [`Configuration::apply`] and the setters below write them.

mod config;

pub use config::{Configuration, CONFIG_ENV_VAR, PROJECT_CONFIG_FILE};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub const DEFAULT_ALLOW_EXTRACTING_PRIVATE_FIELDS: bool = true;
pub const DEFAULT_ALLOW_COMPARING_PRIVATE_FIELDS: bool = true;
pub const DEFAULT_EXTRACT_BARE_NAME_PROPERTY_METHODS: bool = true;
pub const DEFAULT_MAX_ELEMENTS_FOR_PRINTING: usize = 1000;
pub const DEFAULT_MAX_LENGTH_FOR_SINGLE_LINE_DESCRIPTION: usize = 80;

static ALLOW_EXTRACTING_PRIVATE_FIELDS: AtomicBool =
    AtomicBool::new(DEFAULT_ALLOW_EXTRACTING_PRIVATE_FIELDS);
static ALLOW_COMPARING_PRIVATE_FIELDS: AtomicBool =
    AtomicBool::new(DEFAULT_ALLOW_COMPARING_PRIVATE_FIELDS);
static EXTRACT_BARE_NAME_PROPERTY_METHODS: AtomicBool =
    AtomicBool::new(DEFAULT_EXTRACT_BARE_NAME_PROPERTY_METHODS);
static MAX_ELEMENTS_FOR_PRINTING: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_ELEMENTS_FOR_PRINTING);
static MAX_LENGTH_FOR_SINGLE_LINE_DESCRIPTION: AtomicUsize =
    AtomicUsize::new(DEFAULT_MAX_LENGTH_FOR_SINGLE_LINE_DESCRIPTION);

pub fn allow_extracting_private_fields() -> bool {
    ALLOW_EXTRACTING_PRIVATE_FIELDS.load(Ordering::Relaxed)
}

/// Controls whether `extracting` may read private fields when no getter matches
pub fn set_allow_extracting_private_fields(allow: bool) {
    ALLOW_EXTRACTING_PRIVATE_FIELDS.store(allow, Ordering::Relaxed);
}

pub fn allow_comparing_private_fields() -> bool {
    ALLOW_COMPARING_PRIVATE_FIELDS.load(Ordering::Relaxed)
}

pub fn set_allow_comparing_private_fields(allow: bool) {
    ALLOW_COMPARING_PRIVATE_FIELDS.store(allow, Ordering::Relaxed);
}

pub fn extract_bare_name_property_methods() -> bool {
    EXTRACT_BARE_NAME_PROPERTY_METHODS.load(Ordering::Relaxed)
}

/// Controls whether a method named exactly like the property (`name()`) counts as its getter.
/// Records always allow it.
pub fn set_extract_bare_name_property_methods(enabled: bool) {
    EXTRACT_BARE_NAME_PROPERTY_METHODS.store(enabled, Ordering::Relaxed);
}

pub fn max_elements_for_printing() -> usize {
    MAX_ELEMENTS_FOR_PRINTING.load(Ordering::Relaxed)
}

pub fn set_max_elements_for_printing(max: usize) {
    MAX_ELEMENTS_FOR_PRINTING.store(max.max(1), Ordering::Relaxed);
}

pub fn max_length_for_single_line_description() -> usize {
    MAX_LENGTH_FOR_SINGLE_LINE_DESCRIPTION.load(Ordering::Relaxed)
}

pub fn set_max_length_for_single_line_description(max: usize) {
    MAX_LENGTH_FOR_SINGLE_LINE_DESCRIPTION.store(max.max(1), Ordering::Relaxed);
}
