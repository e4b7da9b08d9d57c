//! MediaLive Model Library
//!
//! Configuration and request/response shapes for AWS Elemental MediaLive, built
//! incrementally, compared structurally and exchanged as JSON or YAML.
//!
//! # Features
//!
//! - Partial records: every field is independently present or absent
//! - Closed-string enumerations that still carry tokens unknown to this version
//! - Deterministic debug rendering and structural hashing
//! - JSON/YAML wire codec honouring the service's field names
//! - Configurable via YAML, environment variables, or programmatic API
//!
//! # Example
//!
//! ```no_run
//! use medialive_model::model::{AudioDescription, AudioType};
//! use medialive_model::{Config, WireCodec};
//!
//! # fn main() -> Result<(), medialive_model::MediaLiveError> {
//! let description = AudioDescription::new()
//!     .with_name("ad1")
//!     .with_audio_selector_name("sel1")
//!     .with_audio_type(AudioType::CleanEffects);
//!
//! let codec = WireCodec::new(&Config::default());
//! println!("{}", description);
//! println!("{}", codec.encode(&description)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod model;
pub mod wire;

// Re-export public API
pub use config::{Config, ConfigBuilder, ConfigLoader, LogFormat, WireFormat};
pub use error::{ConfigError, MediaLiveError, ModelError, WireError};
pub use model::{Render, Shape, StructuralEq, StructuralHash};
pub use wire::{Inspection, WireCodec};

use tracing_subscriber::EnvFilter;

/// Initialize structured logging
///
/// Filtering follows `RUST_LOG`. Calling this more than once is harmless; only
/// the first subscriber is installed.
pub fn init_logging(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging(LogFormat::Text);
        init_logging(LogFormat::Json);
    }
}
