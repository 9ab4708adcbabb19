//! Config file handling

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::FluentAssertError;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "FLUENT_ASSERT_CONFIG";

/// Config file looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = "fluent-assert.toml";

/// fluent-assert configuration
///
/// ```toml
/// allow_extracting_private_fields = false
/// max_elements_for_printing = 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub allow_extracting_private_fields: bool,
    pub allow_comparing_private_fields: bool,
    pub extract_bare_name_property_methods: bool,
    pub max_elements_for_printing: usize,
    pub max_length_for_single_line_description: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            allow_extracting_private_fields: super::DEFAULT_ALLOW_EXTRACTING_PRIVATE_FIELDS,
            allow_comparing_private_fields: super::DEFAULT_ALLOW_COMPARING_PRIVATE_FIELDS,
            extract_bare_name_property_methods: super::DEFAULT_EXTRACT_BARE_NAME_PROPERTY_METHODS,
            max_elements_for_printing: super::DEFAULT_MAX_ELEMENTS_FOR_PRINTING,
            max_length_for_single_line_description:
                super::DEFAULT_MAX_LENGTH_FOR_SINGLE_LINE_DESCRIPTION,
        }
    }
}

impl Configuration {
    /// Load configuration from the first config file found
    ///
    /// Lookup order: `$FLUENT_ASSERT_CONFIG`, `./fluent-assert.toml`, then
    /// `<config dir>/fluent-assert/config.toml`. Falls back to defaults.
    pub fn load() -> Result<Self, FluentAssertError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            // An explicit path must exist
            return Self::load_from(path);
        }

        Ok(Self::load_first(&Self::candidate_files()))
    }

    /// First candidate that exists and parses, defaults when none does
    fn load_first(candidates: &[PathBuf]) -> Self {
        for candidate in candidates {
            if candidate.is_file() {
                match Self::load_from(candidate) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!(path = %candidate.display(), error = %e, "Ignoring unreadable config file");
                    }
                }
            }
        }

        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, FluentAssertError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FluentAssertError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, FluentAssertError> {
        let config: Configuration = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), FluentAssertError> {
        if self.max_elements_for_printing == 0 {
            return Err(FluentAssertError::Config(
                "max_elements_for_printing must be at least 1".to_string(),
            ));
        }
        if self.max_length_for_single_line_description == 0 {
            return Err(FluentAssertError::Config(
                "max_length_for_single_line_description must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Snapshot of the process-wide flags currently in effect
    pub fn current() -> Self {
        Self {
            allow_extracting_private_fields: super::allow_extracting_private_fields(),
            allow_comparing_private_fields: super::allow_comparing_private_fields(),
            extract_bare_name_property_methods: super::extract_bare_name_property_methods(),
            max_elements_for_printing: super::max_elements_for_printing(),
            max_length_for_single_line_description: super::max_length_for_single_line_description(),
        }
    }

    /// Make this configuration the process-wide one
    pub fn apply(&self) {
        super::set_allow_extracting_private_fields(self.allow_extracting_private_fields);
        super::set_allow_comparing_private_fields(self.allow_comparing_private_fields);
        super::set_extract_bare_name_property_methods(self.extract_bare_name_property_methods);
        super::set_max_elements_for_printing(self.max_elements_for_printing);
        super::set_max_length_for_single_line_description(self.max_length_for_single_line_description);

        info!(
            allow_extracting_private_fields = self.allow_extracting_private_fields,
            allow_comparing_private_fields = self.allow_comparing_private_fields,
            extract_bare_name_property_methods = self.extract_bare_name_property_methods,
            max_elements_for_printing = self.max_elements_for_printing,
            "Configuration applied"
        );
    }

    pub fn describe(&self) -> String {
        format!(
            "Applying configuration {}\n\
             - allow extracting private fields ............ = {}\n\
             - allow comparing private fields ............. = {}\n\
             - extract bare name property methods ......... = {}\n\
             - max elements for printing .................. = {}\n\
             - max length for single line description ..... = {}\n",
            std::any::type_name::<Self>(),
            self.allow_extracting_private_fields,
            self.allow_comparing_private_fields,
            self.extract_bare_name_property_methods,
            self.max_elements_for_printing,
            self.max_length_for_single_line_description,
        )
    }

    fn candidate_files() -> Vec<PathBuf> {
        let mut files = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(dir) = Self::default_config_dir() {
            files.push(dir.join("config.toml"));
        }
        files
    }

    /// Get the default config directory
    fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fluent-assert"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert!(config.allow_extracting_private_fields);
        assert!(config.allow_comparing_private_fields);
        assert!(config.extract_bare_name_property_methods);
        assert_eq!(config.max_elements_for_printing, 1000);
        assert_eq!(config.max_length_for_single_line_description, 80);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Configuration::from_toml_str("allow_extracting_private_fields = false").unwrap();
        assert!(!config.allow_extracting_private_fields);
        assert!(config.extract_bare_name_property_methods);
        assert_eq!(config.max_elements_for_printing, 1000);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Configuration::from_toml_str("max_elements_for_printing = \"lots\"");
        assert!(matches!(result, Err(FluentAssertError::Toml(_))));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = Configuration::from_toml_str("max_elements_for_printing = 0");
        assert!(matches!(result, Err(FluentAssertError::Config(_))));
    }

    #[test]
    fn test_describe_lists_flags() {
        let description = Configuration::default().describe();
        assert!(description.contains("allow extracting private fields"));
        assert!(description.contains("= 1000"));
    }

    #[test]
    fn test_candidate_order() {
        let candidates = Configuration::candidate_files();
        assert_eq!(candidates[0], PathBuf::from(PROJECT_CONFIG_FILE));
        if let Some(user_file) = candidates.get(1) {
            assert!(user_file.ends_with("fluent-assert/config.toml"));
        }
        assert!(candidates.len() <= 2);
    }

    #[test]
    fn test_first_readable_candidate_wins() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        let project_file = project.path().join(PROJECT_CONFIG_FILE);
        let user_file = user.path().join("config.toml");
        std::fs::write(&project_file, "max_elements_for_printing = 5").unwrap();
        std::fs::write(&user_file, "max_elements_for_printing = 7").unwrap();

        let config = Configuration::load_first(&[project_file, user_file]);
        assert_eq!(config.max_elements_for_printing, 5);
    }

    #[test]
    fn test_missing_and_invalid_candidates_are_skipped() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let invalid = dir.path().join("invalid.toml");
        let valid = dir.path().join("valid.toml");
        std::fs::write(&invalid, "max_elements_for_printing = \"lots\"").unwrap();
        std::fs::write(&valid, "extract_bare_name_property_methods = false").unwrap();

        let config = Configuration::load_first(&[missing, invalid, valid]);
        assert!(!config.extract_bare_name_property_methods);
        assert_eq!(config.max_elements_for_printing, 1000);
    }

    #[test]
    fn test_no_candidate_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let invalid = dir.path().join("invalid.toml");
        std::fs::write(&invalid, "max_elements_for_printing = 0").unwrap();

        let config = Configuration::load_first(&[dir.path().join("missing.toml"), invalid]);
        assert_eq!(config, Configuration::default());
    }
}
