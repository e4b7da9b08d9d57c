//! Wire codec
//!
//! Serializes shapes to and from JSON or YAML. Absent fields are omitted,
//! field keys are the service's PascalCase names and enumerations travel as
//! their exact tokens, including tokens this library does not know.

pub mod registry;

use std::path::Path;

use tracing::{debug, warn};

pub use crate::config::WireFormat;
use crate::config::Config;
use crate::error::{MediaLiveError, WireError};
use crate::model::Shape;

pub use registry::{Inspection, inspect, inspect_file, shape_names};

/// Encodes and decodes shapes according to a [`Config`]
#[derive(Debug, Clone)]
pub struct WireCodec {
    format: WireFormat,
    pretty: bool,
    max_document_bytes: usize,
}

impl Default for WireCodec {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl WireCodec {
    /// Create a codec from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            format: config.wire_format,
            pretty: config.pretty,
            max_document_bytes: config.max_document_bytes,
        }
    }

    /// Document format of this codec
    pub fn format(&self) -> WireFormat {
        self.format
    }

    /// Encode a shape
    pub fn encode<S: Shape>(&self, shape: &S) -> Result<String, WireError> {
        let encoded = match self.format {
            WireFormat::Json if self.pretty => serde_json::to_string_pretty(shape)?,
            WireFormat::Json => serde_json::to_string(shape)?,
            WireFormat::Yaml => serde_yaml::to_string(shape)?,
        };

        debug!(
            shape = S::NAME,
            format = %self.format,
            encoded_bytes = encoded.len(),
            "Encoded shape"
        );

        Ok(encoded)
    }

    /// Decode a shape
    ///
    /// `null` values are treated as absent fields. Unknown keys are ignored.
    pub fn decode<S: Shape>(&self, input: &str) -> Result<S, WireError> {
        self.check_size(S::NAME, input.len())?;

        let shape: S = match self.format {
            WireFormat::Json => serde_json::from_str(input)?,
            WireFormat::Yaml => serde_yaml::from_str(input)?,
        };

        debug!(
            shape = S::NAME,
            format = %self.format,
            input_bytes = input.len(),
            "Decoded shape"
        );

        Ok(shape)
    }

    /// Read and decode a shape from a file
    pub fn decode_file<S: Shape>(&self, path: impl AsRef<Path>) -> Result<S, MediaLiveError> {
        let input = self.read_document(S::NAME, path.as_ref())?;
        Ok(self.decode(&input)?)
    }

    /// Read a document, refusing files over the size limit before reading them
    fn read_document(&self, shape: &str, path: &Path) -> Result<String, MediaLiveError> {
        let size = std::fs::metadata(path)?.len();
        self.check_size(shape, usize::try_from(size).unwrap_or(usize::MAX))?;

        let input = std::fs::read_to_string(path)?;
        debug!(
            shape = shape,
            path = %path.display(),
            "Read document"
        );

        Ok(input)
    }

    fn check_size(&self, shape: &str, size: usize) -> Result<(), WireError> {
        if size > self.max_document_bytes {
            warn!(
                shape = shape,
                size = size,
                limit = self.max_document_bytes,
                "Rejected oversized document"
            );
            return Err(WireError::DocumentTooLarge {
                size,
                limit: self.max_document_bytes,
            });
        }
        Ok(())
    }
}
