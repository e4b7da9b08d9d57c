//! Error types for the MediaLive model library
//!
//! Shapes themselves almost never fail: field values are not validated locally,
//! the service does that. The only model-level failure is adding a duplicate key
//! to a map field. Everything else here belongs to the wire codec and the
//! configuration layer.

use thiserror::Error;

/// Main error type for the MediaLive model library
#[derive(Error, Debug)]
pub enum MediaLiveError {
    /// Shape mutation errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Encoding/decoding errors
    #[error("Wire error: {0}")]
    Wire(#[from] WireError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while mutating a shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A map entry was added under a key that is already present
    #[error("Duplicated keys ({key}) are provided for {shape}.{field}")]
    DuplicateKey {
        /// Shape that owns the map field
        shape: &'static str,
        /// Wire name of the map field
        field: &'static str,
        /// The rejected key
        key: String,
    },
}

/// Encoding/decoding errors
#[derive(Error, Debug)]
pub enum WireError {
    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Input document exceeds the configured size limit
    #[error("Document is too large ({size} bytes, max {limit})")]
    DocumentTooLarge {
        /// Size of the rejected document in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// No registered shape has the requested name
    #[error("Unknown shape: {0}")]
    UnknownShape(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value could not be interpreted
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Configuration file could not be read
    #[error("Failed to read config file: {0}")]
    Read(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse config file: {0}")]
    Parse(String),
}
