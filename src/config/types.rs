//! Configuration type definitions
//!
//! Defines the configuration of the wire codec and the logging setup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Largest accepted value for `max_document_bytes` (256 MiB)
pub const MAX_DOCUMENT_BYTES_LIMIT: usize = 256 * 1024 * 1024;

/// Document format used by the wire codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
    /// JSON documents, as sent to the service
    #[default]
    Json,
    /// YAML documents, convenient for hand-written channel definitions
    Yaml,
}

impl WireFormat {
    /// Lowercase name, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            WireFormat::Json => "json",
            WireFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(WireFormat::Json),
            "yaml" | "yml" => Ok(WireFormat::Yaml),
            other => Err(ConfigError::InvalidValue(format!(
                "unsupported wire format '{}', expected json or yaml",
                other
            ))),
        }
    }
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "unsupported log format '{}', expected text or json",
                other
            ))),
        }
    }
}

/// Main configuration structure for the MediaLive model library
///
/// # Configuration Sources
///
/// Configuration can be loaded from:
/// - YAML files
/// - Environment variables (with `MEDIALIVE_*` prefix)
/// - Programmatic API (using `ConfigBuilder`)
///
/// # Default Values
///
/// - `wire_format`: `json`
/// - `pretty`: `false`
/// - `max_document_bytes`: `4194304` (4 MiB)
/// - `log_format`: `text`
///
/// # Example
///
/// ```no_run
/// use medialive_model::{ConfigBuilder, WireFormat};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConfigBuilder::new()
///     .wire_format(WireFormat::Yaml)
///     .pretty(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Document format for encoding and decoding (default: json)
    #[serde(default)]
    pub wire_format: WireFormat,

    /// Whether JSON output is pretty-printed (default: false)
    #[serde(default)]
    pub pretty: bool,

    /// Largest document the codec will parse, in bytes (default: 4 MiB)
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,

    /// Log output format (default: text)
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wire_format: WireFormat::default(),
            pretty: false,
            max_document_bytes: default_max_document_bytes(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_document_bytes == 0 {
            return Err(ConfigError::ValidationFailed(
                "max_document_bytes must be greater than 0".to_string(),
            ));
        }

        if self.max_document_bytes > MAX_DOCUMENT_BYTES_LIMIT {
            return Err(ConfigError::ValidationFailed(format!(
                "max_document_bytes must be at most {} ({} given)",
                MAX_DOCUMENT_BYTES_LIMIT, self.max_document_bytes
            )));
        }

        Ok(())
    }
}

/// Builder for creating configurations programmatically
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the wire format
    pub fn wire_format(mut self, format: WireFormat) -> Self {
        self.config.wire_format = format;
        self
    }

    /// Enable or disable pretty-printed output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Set the input size limit in bytes
    pub fn max_document_bytes(mut self, bytes: usize) -> Self {
        self.config.max_document_bytes = bytes;
        self
    }

    /// Set the log format
    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.config.log_format = format;
        self
    }

    /// Build the configuration with validation
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

fn default_max_document_bytes() -> usize {
    4 * 1024 * 1024
}
