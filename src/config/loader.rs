//! Configuration loader
//!
//! Loads configuration from YAML files, environment variables, or programmatic API.
//! Priority: provided config > environment variables > defaults

use std::env;
use std::path::Path;

use crate::config::types::{Config, LogFormat, WireFormat};
use crate::error::ConfigError;
use tracing::{debug, info, warn};

/// Environment variable selecting the wire format (`json` or `yaml`)
pub const ENV_WIRE_FORMAT: &str = "MEDIALIVE_WIRE_FORMAT";
/// Environment variable enabling pretty-printed output
pub const ENV_PRETTY: &str = "MEDIALIVE_PRETTY";
/// Environment variable setting the input size limit in bytes
pub const ENV_MAX_DOCUMENT_BYTES: &str = "MEDIALIVE_MAX_DOCUMENT_BYTES";
/// Environment variable selecting the log format (`text` or `json`)
pub const ENV_LOG_FORMAT: &str = "MEDIALIVE_LOG_FORMAT";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        info!(
            config_path = %path.display(),
            "Loading configuration from YAML file"
        );

        let content = std::fs::read_to_string(path).map_err(|e| {
            warn!(
                config_path = %path.display(),
                error = %e,
                "Failed to read configuration file"
            );
            ConfigError::Read(format!("{}: {}", path.display(), e))
        })?;

        debug!(
            config_path = %path.display(),
            file_size_bytes = content.len(),
            "Read configuration file"
        );

        let mut config: Config = serde_yaml::from_str(&content).map_err(|e| {
            warn!(
                config_path = %path.display(),
                error = %e,
                "Failed to parse YAML configuration"
            );
            ConfigError::Parse(e.to_string())
        })?;

        Self::apply_env_overrides(&mut config);

        config.validate().map_err(|e| {
            warn!(
                config_path = %path.display(),
                error = %e,
                "Configuration validation failed"
            );
            e
        })?;

        info!(
            config_path = %path.display(),
            wire_format = %config.wire_format,
            pretty = config.pretty,
            max_document_bytes = config.max_document_bytes,
            "Configuration loaded and validated successfully"
        );

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Config, ConfigError> {
        info!("Loading configuration from environment variables");

        let mut config = Config::default();
        Self::apply_env_overrides(&mut config);

        config.validate().map_err(|e| {
            warn!(error = %e, "Configuration validation failed");
            e
        })?;

        info!(
            wire_format = %config.wire_format,
            pretty = config.pretty,
            max_document_bytes = config.max_document_bytes,
            "Configuration loaded from environment variables and validated successfully"
        );

        Ok(config)
    }

    /// Load configuration with priority: provided config > environment variables > defaults
    pub fn load(provided: Option<Config>) -> Result<Config, ConfigError> {
        match provided {
            Some(config) => {
                info!("Using provided configuration");
                config.validate()?;
                Ok(config)
            }
            None => Self::from_env(),
        }
    }

    fn apply_env_overrides(config: &mut Config) {
        if let Ok(value) = env::var(ENV_WIRE_FORMAT) {
            match value.parse::<WireFormat>() {
                Ok(format) => {
                    debug!(
                        env_var = ENV_WIRE_FORMAT,
                        value = %format,
                        "Applying environment variable override"
                    );
                    config.wire_format = format;
                }
                Err(e) => {
                    warn!(
                        env_var = ENV_WIRE_FORMAT,
                        value = %value,
                        error = %e,
                        "Failed to parse environment variable, ignoring"
                    );
                }
            }
        }

        if let Ok(value) = env::var(ENV_PRETTY) {
            match value.parse::<bool>() {
                Ok(pretty) => {
                    debug!(
                        env_var = ENV_PRETTY,
                        value = pretty,
                        "Applying environment variable override"
                    );
                    config.pretty = pretty;
                }
                Err(e) => {
                    warn!(
                        env_var = ENV_PRETTY,
                        value = %value,
                        error = %e,
                        "Failed to parse environment variable, ignoring"
                    );
                }
            }
        }

        if let Ok(value) = env::var(ENV_MAX_DOCUMENT_BYTES) {
            match value.parse::<usize>() {
                Ok(bytes) => {
                    debug!(
                        env_var = ENV_MAX_DOCUMENT_BYTES,
                        value = bytes,
                        "Applying environment variable override"
                    );
                    config.max_document_bytes = bytes;
                }
                Err(e) => {
                    warn!(
                        env_var = ENV_MAX_DOCUMENT_BYTES,
                        value = %value,
                        error = %e,
                        "Failed to parse environment variable, ignoring"
                    );
                }
            }
        }

        if let Ok(value) = env::var(ENV_LOG_FORMAT) {
            match value.parse::<LogFormat>() {
                Ok(format) => {
                    debug!(
                        env_var = ENV_LOG_FORMAT,
                        value = ?format,
                        "Applying environment variable override"
                    );
                    config.log_format = format;
                }
                Err(e) => {
                    warn!(
                        env_var = ENV_LOG_FORMAT,
                        value = %value,
                        error = %e,
                        "Failed to parse environment variable, ignoring"
                    );
                }
            }
        }
    }
}
