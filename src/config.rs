//! # Generator Configuration
//!
//! Free-form settings that steer generation, read from a YAML, JSON or TOML file that
//! usually sits next to the model:
//!
//! ```yaml
//! package: greeter
//! types: [service]          # role annotations selecting interfaces
//! names: [Admin]            # interfaces selected by literal name
//! aliases:
//!   UUID:
//!     type: uuid.UUID
//!     import: github.com/google/uuid
//! logger:
//!   import: app/log
//!   interface: Logger
//! ```

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Package name used when none is configured
pub const DEFAULT_PACKAGE: &str = "myapp";

/// A required symbol and the import path that provides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Rendered symbol, e.g. `uuid.UUID`
    #[serde(rename = "type")]
    pub ty: String,
    /// Import path; absent when the symbol needs no import
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
}

impl Import {
    #[must_use]
    pub fn new(ty: impl Into<String>, import: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            import: Some(import.into()),
        }
    }

    /// A symbol that renders differently but needs no import.
    #[must_use]
    pub fn local(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            import: None,
        }
    }
}

/// Logger integration: where the logger comes from and which interface type to hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub import: String,
    pub interface: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Output package name; [`DEFAULT_PACKAGE`] when unset
    pub package: Option<String>,
    /// Interfaces selected by literal name
    pub names: Vec<String>,
    /// Role annotations selecting interfaces
    pub types: Vec<String>,
    /// Declared type name → import requirement
    pub aliases: IndexMap<String, Import>,
    pub logger: Option<LoggerConfig>,
    /// Emit a "DO NOT EDIT" header
    pub do_not_edit: bool,
}

impl GeneratorConfig {
    #[must_use]
    pub fn package_name(&self) -> &str {
        self.package
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PACKAGE)
    }
}

/// Load generator configuration; the format follows the file extension
/// (`.toml`, `.json`, otherwise YAML).
pub fn load_config(config_path: &Path) -> anyhow::Result<GeneratorConfig> {
    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!(
            "Failed to read generator config: {}",
            config_path.display()
        )
    })?;

    let ext = config_path.extension().and_then(|e| e.to_str());
    let config: GeneratorConfig = match ext {
        Some("toml") => toml::from_str(&contents).map_err(anyhow::Error::from),
        Some("json") => serde_json::from_str(&contents).map_err(anyhow::Error::from),
        _ => serde_yaml::from_str(&contents).map_err(anyhow::Error::from),
    }
    .with_context(|| {
        format!(
            "Failed to parse generator config: {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Look for `iotagen.yaml`, `iotagen.yml` or `iotagen.toml` alongside the model file.
#[must_use]
pub fn auto_detect_config_path(model_path: &Path) -> Option<std::path::PathBuf> {
    let dir = model_path.parent()?;
    ["iotagen.yaml", "iotagen.yml", "iotagen.toml"]
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}
