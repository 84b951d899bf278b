//! Area documents and runtime configuration for Groundwork.
//!
//! Areas can be kept in TOML or YAML files instead of being built in code.
//! Rows are read without assuming they are strings, so a document holding a
//! number or a table where a row belongs is reported as an invalid type by
//! validation rather than as a parse error.
//!
//! # Examples
//!
//! Load an area from a TOML string:
//!
//! ```
//! use groundwork_config::AreaDocument;
//! use groundwork_core::RawRow;
//!
//! let doc = AreaDocument::from_toml_str(r#"
//!     label = "backyard"
//!     area = ["10", "31"]
//! "#).unwrap();
//!
//! assert_eq!(doc.label.as_deref(), Some("backyard"));
//! assert_eq!(doc.area, vec![RawRow::text("10"), RawRow::text("31")]);
//! ```
//!
//! Use default settings when the file is missing:
//!
//! ```
//! use groundwork_config::GroundworkConfig;
//!
//! let config = GroundworkConfig::load("groundwork.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use groundwork_core::RawRow;
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Document format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml`/`.yml` select YAML, `.toml` or no extension select TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(DocumentFormat::Toml),
            Some(ext) => match ext.to_ascii_lowercase().as_str() {
                "toml" => Ok(DocumentFormat::Toml),
                "yaml" | "yml" => Ok(DocumentFormat::Yaml),
                other => Err(ConfigError::Invalid(format!(
                    "unsupported document format: .{other}"
                ))),
            },
        }
    }
}

/// An area as stored in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AreaDocument {
    /// Optional name used in log output.
    #[serde(default)]
    pub label: Option<String>,

    /// Rows of the area, not yet validated.
    pub area: Vec<RawRow>,
}

impl AreaDocument {
    /// Creates a document from text rows.
    pub fn new<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            label: None,
            area: rows.into_iter().map(|r| RawRow::Text(r.into())).collect(),
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Loads a document, picking TOML or YAML from the file extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, has an unsupported
    /// extension, or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match DocumentFormat::from_path(path)? {
            DocumentFormat::Toml => Self::from_toml_file(path),
            DocumentFormat::Yaml => Self::from_yaml_file(path),
        }
    }

    /// Loads a document from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a document from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a document from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a document from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Label for log output, `"area"` when none is set.
    pub fn name(&self) -> &str {
        self.label.as_deref().unwrap_or("area")
    }
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GroundworkConfig {
    /// `tracing` filter directive, e.g. `"groundwork=debug"`.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Whether console output uses colors.
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

fn default_ansi() -> bool {
    true
}

impl Default for GroundworkConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            ansi: default_ansi(),
        }
    }
}

impl GroundworkConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Enables or disables colored output.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}
