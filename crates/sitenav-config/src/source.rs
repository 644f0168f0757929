//! Reading configuration files from disk.
//!
//! Supports TOML, YAML and JSON files. The format is chosen from the file
//! extension; the parsed value is then passed to [`load`].

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::LoadError;
use crate::loader::load;
use crate::model::SiteConfig;

/// Configuration filenames searched for during discovery, in priority order.
pub const CONFIG_FILENAMES: &[&str] = &[
    "sitenav.toml",
    "sitenav.yaml",
    "sitenav.yml",
    "sitenav.json",
];

/// Serialization format of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse configuration text into a raw value.
///
/// # Errors
///
/// Returns the parser error of the given format.
pub fn parse_str(content: &str, format: Format) -> Result<Value, LoadError> {
    let value = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    Ok(value)
}

/// Read, parse and validate a configuration file.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, has an unknown
/// extension, fails to parse or fails validation.
pub fn load_file(path: &Path) -> Result<SiteConfig, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let format = Format::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path)?;
    let raw = parse_str(&content, format)?;

    tracing::debug!(path = %path.display(), ?format, "Parsed configuration file");
    Ok(load(&raw)?)
}

/// Search for a config file in `start` and its parents.
#[must_use]
pub fn discover_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if let Some(candidate) = CONFIG_FILENAMES
            .iter()
            .map(|name| current.join(name))
            .find(|candidate| candidate.is_file())
        {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

impl SiteConfig {
    /// Load configuration from an explicit file or by discovery.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// the current directory and its parents for one of
    /// [`CONFIG_FILENAMES`].
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if no file exists, or any error from
    /// [`load_file`].
    pub fn load(config_path: Option<&Path>) -> Result<Self, LoadError> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir()?;
                discover_from(&cwd)
                    .ok_or_else(|| LoadError::NotFound(cwd.join(CONFIG_FILENAMES[0])))?
            }
        };

        tracing::info!(path = %path.display(), "Loading site configuration");
        load_file(&path)
    }
}
