//! Configuration for the mockdeck binary.

use derive_getters::Getters;
use mockdeck_error::{ConfigError, MockdeckResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration loaded from `mockdeck.toml`.
///
/// Every field has a default, so an empty file is valid.
///
/// # Example
///
/// ```toml
/// log_filter = "mockdeck=debug"
///
/// [store]
/// directory = "/var/lib/mockdeck/decks"
///
/// [export]
/// pretty = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct MockdeckConfig {
    /// Tracing filter used when `RUST_LOG` is unset
    log_filter: String,
    /// Deck store settings
    store: StoreConfig,
    /// Export settings
    export: ExportConfig,
}

/// Deck store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one JSON document per deck
    directory: PathBuf,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ExportConfig {
    /// Pretty-print exported JSON
    pretty: bool,
}

impl Default for MockdeckConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            store: StoreConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("decks"),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl MockdeckConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> MockdeckResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e)).with_path(path)
        })?;

        Ok(parse(&content).map_err(|e| e.with_path(path))?)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> MockdeckResult<Self> {
        Ok(parse(content)?)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> MockdeckResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

fn parse(content: &str) -> Result<MockdeckConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
}
