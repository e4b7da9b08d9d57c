//! Shape lookup by name
//!
//! Lets callers that only know a shape's name at runtime (the CLI, fixtures)
//! decode a document and look at it.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{MediaLiveError, WireError};
use crate::model::*;
use crate::wire::WireCodec;

/// Result of decoding a document as a named shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// Name of the shape the document was decoded as
    pub shape: &'static str,
    /// Debug rendering, as produced by `Display`
    pub debug: String,
    /// Structural hash of the decoded value
    pub hash: i32,
    /// The value re-encoded with the same codec
    pub encoded: String,
}

type Inspector = fn(&WireCodec, &str) -> Result<Inspection, MediaLiveError>;

fn inspect_as<S: Shape>(codec: &WireCodec, input: &str) -> Result<Inspection, MediaLiveError> {
    let shape: S = codec.decode(input)?;
    Ok(Inspection {
        shape: S::NAME,
        debug: shape.to_string(),
        hash: shape.structural_hash(),
        encoded: codec.encode(&shape)?,
    })
}

macro_rules! registry {
    ($($shape:ty),* $(,)?) => {
        const REGISTRY: &[(&str, Inspector)] = &[
            $( (<$shape as Shape>::NAME, inspect_as::<$shape>), )*
        ];
    };
}

registry![
    AacSettings,
    Ac3Settings,
    AudioChannelMapping,
    AudioCodecSettings,
    AudioDescription,
    AudioNormalizationSettings,
    BurnInDestinationSettings,
    CaptionDescription,
    CaptionDestinationSettings,
    CaptionLanguageMapping,
    ColorSpacePassthroughSettings,
    CreateTagsRequest,
    DescribeReservationRequest,
    DescribeReservationResult,
    DvbNitSettings,
    DvbSdtSettings,
    DvbTdtSettings,
    Eac3Settings,
    EncoderSettings,
    FrameCaptureSettings,
    H264ColorSpaceSettings,
    H264FilterSettings,
    H264Settings,
    H265ColorSpaceSettings,
    H265Settings,
    Hdr10Settings,
    HlsAkamaiSettings,
    HlsBasicPutSettings,
    HlsCdnSettings,
    HlsGroupSettings,
    HlsMediaStoreSettings,
    HlsOutputSettings,
    HlsWebdavSettings,
    InputChannelLevel,
    InputLocation,
    KeyProviderSettings,
    ListTagsForResourceRequest,
    ListTagsForResourceResult,
    M2tsSettings,
    Mp2Settings,
    MsSmoothGroupSettings,
    MsSmoothOutputSettings,
    Output,
    OutputGroup,
    OutputGroupSettings,
    OutputLocationRef,
    OutputSettings,
    PassThroughSettings,
    Rec601Settings,
    Rec709Settings,
    RemixSettings,
    ReservationResourceSpecification,
    StaticKeySettings,
    TemporalFilterSettings,
    TimecodeConfig,
    UdpContainerSettings,
    UdpOutputSettings,
    VideoCodecSettings,
    VideoDescription,
];

/// Names of every registered shape, sorted
pub fn shape_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

fn lookup(shape_name: &str) -> Result<Inspector, WireError> {
    let Some((_, inspector)) = REGISTRY.iter().find(|(name, _)| *name == shape_name) else {
        warn!(shape = shape_name, "Unknown shape requested");
        return Err(WireError::UnknownShape(shape_name.to_string()));
    };
    Ok(*inspector)
}

/// Decode `input` as the shape called `shape_name`
pub fn inspect(
    codec: &WireCodec,
    shape_name: &str,
    input: &str,
) -> Result<Inspection, MediaLiveError> {
    let inspector = lookup(shape_name)?;

    debug!(shape = shape_name, format = %codec.format(), "Inspecting document");
    inspector(codec, input)
}

/// Read the file at `path` and decode it as the shape called `shape_name`
///
/// The file's size is checked against the codec's limit before it is read.
pub fn inspect_file(
    codec: &WireCodec,
    shape_name: &str,
    path: impl AsRef<Path>,
) -> Result<Inspection, MediaLiveError> {
    let inspector = lookup(shape_name)?;
    let input = codec.read_document(shape_name, path.as_ref())?;

    debug!(shape = shape_name, format = %codec.format(), "Inspecting document");
    inspector(codec, &input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_sorted_and_unique() {
        let names: Vec<_> = shape_names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let codec = WireCodec::default();
        let err = inspect(&codec, "ChannelSettings", "{}").unwrap_err();
        assert!(matches!(
            err,
            MediaLiveError::Wire(WireError::UnknownShape(ref name)) if name == "ChannelSettings"
        ));
    }

    #[test]
    fn test_inspect_renders_and_reencodes() {
        let codec = WireCodec::default();
        let inspection = inspect(
            &codec,
            "InputChannelLevel",
            r#"{"InputChannel": 2, "Gain": -6}"#,
        )
        .unwrap();

        assert_eq!(inspection.shape, "InputChannelLevel");
        assert_eq!(inspection.debug, "{Gain: -6,InputChannel: 2}");
        assert_eq!(inspection.encoded, r#"{"Gain":-6,"InputChannel":2}"#);
        assert_eq!(inspection.hash, (31 + -6) * 31 + 2);
    }
}
