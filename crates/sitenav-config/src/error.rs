//! Error types for configuration loading.

use std::path::PathBuf;

/// Validation error raised while loading a raw configuration value.
///
/// Field names are paths into the raw value, e.g. `themeConfig.nav[2].text`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required field is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),
    /// A field is present but has the wrong type.
    #[error("Field {0} has the wrong type, expected {1}")]
    TypeMismatch(String, &'static str),
    /// A nav entry provides no link target.
    #[error("Nav entry {0} has neither an internal target nor an external URL")]
    InvalidNavEntry(usize),
    /// A sidebar group key is not of the form `/.../`.
    #[error("Sidebar key {0:?} must be a path that begins and ends with '/'")]
    InvalidSidebarKey(String),
    /// The same page appears twice within one sidebar group.
    #[error("Duplicate page {1:?} in sidebar group {0:?}")]
    DuplicateSlug(String, String),
}

/// Error raised while reading a configuration file from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// File extension does not map to a known format.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The parsed value failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message_names_field_and_type() {
        let err = ConfigError::TypeMismatch("themeConfig.nav".to_owned(), "array");
        assert_eq!(
            err.to_string(),
            "Field themeConfig.nav has the wrong type, expected array"
        );
    }

    #[test]
    fn test_duplicate_slug_message() {
        let err = ConfigError::DuplicateSlug("/guide/".to_owned(), "installation".to_owned());
        let msg = err.to_string();
        assert!(msg.contains("\"/guide/\""));
        assert!(msg.contains("\"installation\""));
    }

    #[test]
    fn test_load_error_wraps_config_error() {
        let err: LoadError = ConfigError::MissingField("title".to_owned()).into();
        assert!(matches!(
            err,
            LoadError::Config(ConfigError::MissingField(_))
        ));
        assert!(err.to_string().contains("title"));
    }
}
