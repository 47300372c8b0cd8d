//! Generator configuration
//!
//! An immutable options object shared by both generators. Everything here is
//! about naming and filtering of the generated classes; nothing affects how
//! the specification itself is interpreted.

use serde::Deserialize;

use crate::generation::GenerationError;

/// Configuration consumed by [`DtoGenerator`](crate::generation::DtoGenerator)
/// and [`RequestGenerator`](crate::generation::RequestGenerator).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base output namespace, e.g. `App\Sdk`.
    pub namespace: String,
    /// Sub-namespace for generated DTO classes.
    pub dto_namespace_suffix: String,
    /// Sub-namespace for generated request classes.
    pub request_namespace_suffix: String,
    /// Resource name used when a schema or endpoint lacks a usable name.
    pub fallback_resource_name: String,
    /// Body parameter names excluded from `defaultBody` generation.
    pub ignored_body_params: Vec<String>,
    /// Query parameter names excluded from `defaultQuery` generation.
    pub ignored_query_params: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "App\\Sdk".to_string(),
            dto_namespace_suffix: "Dto".to_string(),
            request_namespace_suffix: "Requests".to_string(),
            fallback_resource_name: "Misc".to_string(),
            ignored_body_params: Vec::new(),
            ignored_query_params: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for the given base namespace with default
    /// suffixes and no ignore lists.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Namespace for generated DTO classes.
    pub fn dto_namespace(&self) -> String {
        format!("{}\\{}", self.namespace, self.dto_namespace_suffix)
    }

    /// Namespace for request classes grouped under `resource`.
    pub fn request_namespace(&self, resource: &str) -> String {
        format!(
            "{}\\{}\\{}",
            self.namespace, self.request_namespace_suffix, resource
        )
    }

    /// Defensive validation of the configuration.
    ///
    /// The original generator accepted any configuration; this check is an
    /// extension, not inherited behavior.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.namespace.is_empty() {
            return Err(GenerationError::InvalidConfiguration(
                "namespace cannot be empty".to_string(),
            ));
        }

        if !self
            .namespace
            .chars()
            .all(|c| c.is_alphanumeric() || c == '\\' || c == '_')
        {
            return Err(GenerationError::InvalidConfiguration(format!(
                "namespace `{}` contains invalid characters",
                self.namespace
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.namespace, "App\\Sdk");
        assert_eq!(config.dto_namespace(), "App\\Sdk\\Dto");
        assert_eq!(
            config.request_namespace("Users"),
            "App\\Sdk\\Requests\\Users"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_namespace() {
        let config = GeneratorConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_invalid_characters() {
        let config = GeneratorConfig::new("App Sdk");
        assert!(config.validate().is_err());

        let config = GeneratorConfig::new("Crescat\\Sdk");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: GeneratorConfig =
            serde_json::from_value(serde_json::json!({"namespace": "Acme\\Api"})).unwrap();
        assert_eq!(config.namespace, "Acme\\Api");
        assert_eq!(config.fallback_resource_name, "Misc");
    }
}
