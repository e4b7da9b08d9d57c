//! Configuration module
//!
//! Provides configuration for the wire codec and logging, loaded from YAML
//! files, environment variables, or the programmatic builder.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{Config, ConfigBuilder, LogFormat, MAX_DOCUMENT_BYTES_LIMIT, WireFormat};
