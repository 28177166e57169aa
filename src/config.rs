//! YAML Configuration File Support for spanlocate
//!
//! This module loads locator and logging settings from a single YAML file so
//! the `spanlocate` binary (or an embedding service) can be tuned without a
//! rebuild.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # spanlocate configuration
//! version: "1.0"
//! name: "ocr regions"
//!
//! locate:
//!   version: 1
//!   allow_missing_tokens: true
//!   max_candidates: 64
//!
//! logging:
//!   level: "debug"
//!   format: "json"
//! ```

use std::fs;
use std::path::Path;

use locate::LocateConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct SpanlocateConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Locator configuration
    #[serde(default)]
    pub locate: LocateYamlConfig,

    /// Logging configuration for the binary
    #[serde(default)]
    pub logging: LoggingYamlConfig,
}

impl SpanlocateConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SpanlocateConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Locator settings in the form the core crate expects.
    pub fn locate_config(&self) -> LocateConfig {
        LocateConfig {
            version: self.locate.version,
            allow_missing_tokens: self.locate.allow_missing_tokens,
            max_candidates: self.locate.max_candidates,
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.locate.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Default for SpanlocateConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            locate: LocateYamlConfig::default(),
            logging: LoggingYamlConfig::default(),
        }
    }
}

/// Locator YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LocateYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub allow_missing_tokens: bool,

    #[serde(default)]
    pub max_candidates: Option<usize>,
}

impl LocateYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "locate.version must be >= 1".to_string(),
            ));
        }
        if self.max_candidates == Some(0) {
            return Err(ConfigLoadError::Validation(
                "locate.max_candidates must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocateYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            allow_missing_tokens: false,
            max_candidates: None,
        }
    }
}

/// Logging YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingYamlConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"locate=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

impl LoggingYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(ConfigLoadError::Validation(format!(
                "logging.format must be one of: {valid_formats:?}"
            )));
        }

        Ok(())
    }
}

impl Default for LoggingYamlConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_log_format() -> String {
    "text".to_string()
}
