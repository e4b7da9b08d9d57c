//! Closed-string enumerations
//!
//! Tokens are spelled exactly as the service expects them on the wire.

use std::fmt;

/// Payload of an `Unknown` enumeration value.
///
/// Only built by token conversion, so it never holds a token that has a named
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownToken(String);

impl UnknownToken {
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Audio

model_enum! {
    /// Audio Type
    AudioType {
        CleanEffects => "CLEAN_EFFECTS",
        HearingImpaired => "HEARING_IMPAIRED",
        Undefined => "UNDEFINED",
        VisualImpairedCommentary => "VISUAL_IMPAIRED_COMMENTARY",
    }
}

model_enum! {
    /// Audio Description Audio Type Control
    AudioDescriptionAudioTypeControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

model_enum! {
    /// Audio Description Language Code Control
    AudioDescriptionLanguageCodeControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

model_enum! {
    /// Audio Normalization Algorithm
    AudioNormalizationAlgorithm {
        Itu17701 => "ITU_1770_1",
        Itu17702 => "ITU_1770_2",
    }
}

model_enum! {
    /// Audio Normalization Algorithm Control
    AudioNormalizationAlgorithmControl {
        CorrectAudio => "CORRECT_AUDIO",
    }
}

model_enum! {
    /// Aac Coding Mode
    AacCodingMode {
        AdReceiverMix => "AD_RECEIVER_MIX",
        CodingMode10 => "CODING_MODE_1_0",
        CodingMode11 => "CODING_MODE_1_1",
        CodingMode20 => "CODING_MODE_2_0",
        CodingMode51 => "CODING_MODE_5_1",
    }
}

model_enum! {
    /// Aac Input Type
    AacInputType {
        BroadcasterMixedAd => "BROADCASTER_MIXED_AD",
        Normal => "NORMAL",
    }
}

model_enum! {
    /// Aac Profile
    AacProfile {
        Hev1 => "HEV1",
        Hev2 => "HEV2",
        Lc => "LC",
    }
}

model_enum! {
    /// Aac Rate Control Mode
    AacRateControlMode {
        Cbr => "CBR",
        Vbr => "VBR",
    }
}

model_enum! {
    /// Aac Raw Format
    AacRawFormat {
        LatmLoas => "LATM_LOAS",
        None => "NONE",
    }
}

model_enum! {
    /// Aac Spec
    AacSpec {
        Mpeg2 => "MPEG2",
        Mpeg4 => "MPEG4",
    }
}

model_enum! {
    /// Aac Vbr Quality
    AacVbrQuality {
        High => "HIGH",
        Low => "LOW",
        MediumHigh => "MEDIUM_HIGH",
        MediumLow => "MEDIUM_LOW",
    }
}

model_enum! {
    /// Ac3 Bitstream Mode
    Ac3BitstreamMode {
        Commentary => "COMMENTARY",
        CompleteMain => "COMPLETE_MAIN",
        Dialogue => "DIALOGUE",
        Emergency => "EMERGENCY",
        HearingImpaired => "HEARING_IMPAIRED",
        MusicAndEffects => "MUSIC_AND_EFFECTS",
        VisuallyImpaired => "VISUALLY_IMPAIRED",
        VoiceOver => "VOICE_OVER",
    }
}

model_enum! {
    /// Ac3 Coding Mode
    Ac3CodingMode {
        CodingMode10 => "CODING_MODE_1_0",
        CodingMode11 => "CODING_MODE_1_1",
        CodingMode20 => "CODING_MODE_2_0",
        CodingMode32Lfe => "CODING_MODE_3_2_LFE",
    }
}

model_enum! {
    /// Ac3 Drc Profile
    Ac3DrcProfile {
        FilmStandard => "FILM_STANDARD",
        None => "NONE",
    }
}

model_enum! {
    /// Ac3 Lfe Filter
    Ac3LfeFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// Ac3 Metadata Control
    Ac3MetadataControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

model_enum! {
    /// Eac3 Attenuation Control
    Eac3AttenuationControl {
        Attenuate3Db => "ATTENUATE_3_DB",
        None => "NONE",
    }
}

model_enum! {
    /// Eac3 Bitstream Mode
    Eac3BitstreamMode {
        Commentary => "COMMENTARY",
        CompleteMain => "COMPLETE_MAIN",
        Emergency => "EMERGENCY",
        HearingImpaired => "HEARING_IMPAIRED",
        VisuallyImpaired => "VISUALLY_IMPAIRED",
    }
}

model_enum! {
    /// Eac3 Coding Mode
    Eac3CodingMode {
        CodingMode10 => "CODING_MODE_1_0",
        CodingMode20 => "CODING_MODE_2_0",
        CodingMode32 => "CODING_MODE_3_2",
    }
}

model_enum! {
    /// Eac3 Dc Filter
    Eac3DcFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// Eac3 Drc Line
    Eac3DrcLine {
        FilmLight => "FILM_LIGHT",
        FilmStandard => "FILM_STANDARD",
        MusicLight => "MUSIC_LIGHT",
        MusicStandard => "MUSIC_STANDARD",
        None => "NONE",
        Speech => "SPEECH",
    }
}

model_enum! {
    /// Eac3 Drc Rf
    Eac3DrcRf {
        FilmLight => "FILM_LIGHT",
        FilmStandard => "FILM_STANDARD",
        MusicLight => "MUSIC_LIGHT",
        MusicStandard => "MUSIC_STANDARD",
        None => "NONE",
        Speech => "SPEECH",
    }
}

model_enum! {
    /// Eac3 Lfe Control
    Eac3LfeControl {
        Lfe => "LFE",
        NoLfe => "NO_LFE",
    }
}

model_enum! {
    /// Eac3 Lfe Filter
    Eac3LfeFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// Eac3 Metadata Control
    Eac3MetadataControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

model_enum! {
    /// Eac3 Passthrough Control
    Eac3PassthroughControl {
        NoPassthrough => "NO_PASSTHROUGH",
        WhenPossible => "WHEN_POSSIBLE",
    }
}

model_enum! {
    /// Eac3 Phase Control
    Eac3PhaseControl {
        NoShift => "NO_SHIFT",
        Shift90Degrees => "SHIFT_90_DEGREES",
    }
}

model_enum! {
    /// Eac3 Stereo Downmix
    Eac3StereoDownmix {
        Dpl2 => "DPL2",
        LoRo => "LO_RO",
        LtRt => "LT_RT",
        NotIndicated => "NOT_INDICATED",
    }
}

model_enum! {
    /// Eac3 Surround Ex Mode
    Eac3SurroundExMode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        NotIndicated => "NOT_INDICATED",
    }
}

model_enum! {
    /// Eac3 Surround Mode
    Eac3SurroundMode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        NotIndicated => "NOT_INDICATED",
    }
}

model_enum! {
    /// Mp2 Coding Mode
    Mp2CodingMode {
        CodingMode10 => "CODING_MODE_1_0",
        CodingMode20 => "CODING_MODE_2_0",
    }
}

// Video

model_enum! {
    /// Afd Signaling
    AfdSignaling {
        Auto => "AUTO",
        Fixed => "FIXED",
        None => "NONE",
    }
}

model_enum! {
    /// Fixed Afd
    FixedAfd {
        Afd0000 => "AFD_0000",
        Afd0010 => "AFD_0010",
        Afd0011 => "AFD_0011",
        Afd0100 => "AFD_0100",
        Afd1000 => "AFD_1000",
        Afd1001 => "AFD_1001",
        Afd1010 => "AFD_1010",
        Afd1011 => "AFD_1011",
        Afd1101 => "AFD_1101",
        Afd1110 => "AFD_1110",
        Afd1111 => "AFD_1111",
    }
}

model_enum! {
    /// Frame Capture Interval Unit
    FrameCaptureIntervalUnit {
        Milliseconds => "MILLISECONDS",
        Seconds => "SECONDS",
    }
}

model_enum! {
    /// H264 Adaptive Quantization
    H264AdaptiveQuantization {
        High => "HIGH",
        Higher => "HIGHER",
        Low => "LOW",
        Max => "MAX",
        Medium => "MEDIUM",
        Off => "OFF",
    }
}

model_enum! {
    /// H264 Color Metadata
    H264ColorMetadata {
        Ignore => "IGNORE",
        Insert => "INSERT",
    }
}

model_enum! {
    /// H264 Entropy Encoding
    H264EntropyEncoding {
        Cabac => "CABAC",
        Cavlc => "CAVLC",
    }
}

model_enum! {
    /// H264 Flicker Aq
    H264FlickerAq {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// H264 Force Field Pictures
    H264ForceFieldPictures {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// H264 Framerate Control
    H264FramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

model_enum! {
    /// H264 Gop BReference
    H264GopBReference {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// H264 Gop Size Units
    H264GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

model_enum! {
    /// H264 Level
    H264Level {
        H264Level1 => "H264_LEVEL_1",
        H264Level11 => "H264_LEVEL_1_1",
        H264Level12 => "H264_LEVEL_1_2",
        H264Level13 => "H264_LEVEL_1_3",
        H264Level2 => "H264_LEVEL_2",
        H264Level21 => "H264_LEVEL_2_1",
        H264Level22 => "H264_LEVEL_2_2",
        H264Level3 => "H264_LEVEL_3",
        H264Level31 => "H264_LEVEL_3_1",
        H264Level32 => "H264_LEVEL_3_2",
        H264Level4 => "H264_LEVEL_4",
        H264Level41 => "H264_LEVEL_4_1",
        H264Level42 => "H264_LEVEL_4_2",
        H264Level5 => "H264_LEVEL_5",
        H264Level51 => "H264_LEVEL_5_1",
        H264Level52 => "H264_LEVEL_5_2",
        H264LevelAuto => "H264_LEVEL_AUTO",
    }
}

model_enum! {
    /// H264 Look Ahead Rate Control
    H264LookAheadRateControl {
        High => "HIGH",
        Low => "LOW",
        Medium => "MEDIUM",
    }
}

model_enum! {
    /// H264 Par Control
    H264ParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

model_enum! {
    /// H264 Profile
    H264Profile {
        Baseline => "BASELINE",
        High => "HIGH",
        High10Bit => "HIGH_10BIT",
        High422 => "HIGH_422",
        High42210Bit => "HIGH_422_10BIT",
        Main => "MAIN",
    }
}

model_enum! {
    /// H264 Quality Level
    H264QualityLevel {
        EnhancedQuality => "ENHANCED_QUALITY",
        StandardQuality => "STANDARD_QUALITY",
    }
}

model_enum! {
    /// H264 Rate Control Mode
    H264RateControlMode {
        Cbr => "CBR",
        Multiplex => "MULTIPLEX",
        Qvbr => "QVBR",
        Vbr => "VBR",
    }
}

model_enum! {
    /// H264 Scan Type
    H264ScanType {
        Interlaced => "INTERLACED",
        Progressive => "PROGRESSIVE",
    }
}

model_enum! {
    /// H264 Scene Change Detect
    H264SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// H264 Spatial Aq
    H264SpatialAq {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// H264 Sub Gop Length
    H264SubGopLength {
        Dynamic => "DYNAMIC",
        Fixed => "FIXED",
    }
}

model_enum! {
    /// H264 Syntax
    H264Syntax {
        Default => "DEFAULT",
        Rp2027 => "RP2027",
    }
}

model_enum! {
    /// H264 Temporal Aq
    H264TemporalAq {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// H264 Timecode Insertion Behavior
    H264TimecodeInsertionBehavior {
        Disabled => "DISABLED",
        PicTimingSei => "PIC_TIMING_SEI",
    }
}

model_enum! {
    /// Temporal Filter Post Filter Sharpening
    TemporalFilterPostFilterSharpening {
        Auto => "AUTO",
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// Temporal Filter Strength
    TemporalFilterStrength {
        Auto => "AUTO",
        Strength1 => "STRENGTH_1",
        Strength2 => "STRENGTH_2",
        Strength3 => "STRENGTH_3",
        Strength4 => "STRENGTH_4",
        Strength5 => "STRENGTH_5",
        Strength6 => "STRENGTH_6",
        Strength7 => "STRENGTH_7",
        Strength8 => "STRENGTH_8",
        Strength9 => "STRENGTH_9",
        Strength10 => "STRENGTH_10",
        Strength11 => "STRENGTH_11",
        Strength12 => "STRENGTH_12",
        Strength13 => "STRENGTH_13",
        Strength14 => "STRENGTH_14",
        Strength15 => "STRENGTH_15",
        Strength16 => "STRENGTH_16",
    }
}

model_enum! {
    /// H265 Adaptive Quantization
    H265AdaptiveQuantization {
        High => "HIGH",
        Higher => "HIGHER",
        Low => "LOW",
        Max => "MAX",
        Medium => "MEDIUM",
        Off => "OFF",
    }
}

model_enum! {
    /// H265 Alternative Transfer Function
    H265AlternativeTransferFunction {
        Insert => "INSERT",
        Omit => "OMIT",
    }
}

model_enum! {
    /// H265 Color Metadata
    H265ColorMetadata {
        Ignore => "IGNORE",
        Insert => "INSERT",
    }
}

model_enum! {
    /// H265 Flicker Aq
    H265FlickerAq {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// H265 Gop Size Units
    H265GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

model_enum! {
    /// H265 Level
    H265Level {
        H265Level1 => "H265_LEVEL_1",
        H265Level2 => "H265_LEVEL_2",
        H265Level21 => "H265_LEVEL_2_1",
        H265Level3 => "H265_LEVEL_3",
        H265Level31 => "H265_LEVEL_3_1",
        H265Level4 => "H265_LEVEL_4",
        H265Level41 => "H265_LEVEL_4_1",
        H265Level5 => "H265_LEVEL_5",
        H265Level51 => "H265_LEVEL_5_1",
        H265Level52 => "H265_LEVEL_5_2",
        H265Level6 => "H265_LEVEL_6",
        H265Level61 => "H265_LEVEL_6_1",
        H265Level62 => "H265_LEVEL_6_2",
        H265LevelAuto => "H265_LEVEL_AUTO",
    }
}

model_enum! {
    /// H265 Look Ahead Rate Control
    H265LookAheadRateControl {
        High => "HIGH",
        Low => "LOW",
        Medium => "MEDIUM",
    }
}

model_enum! {
    /// H265 Profile
    H265Profile {
        Main => "MAIN",
        Main10Bit => "MAIN_10BIT",
    }
}

model_enum! {
    /// H265 Rate Control Mode
    H265RateControlMode {
        Cbr => "CBR",
        Multiplex => "MULTIPLEX",
        Qvbr => "QVBR",
    }
}

model_enum! {
    /// H265 Scan Type
    H265ScanType {
        Progressive => "PROGRESSIVE",
    }
}

model_enum! {
    /// H265 Scene Change Detect
    H265SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// H265 Tier
    H265Tier {
        High => "HIGH",
        Main => "MAIN",
    }
}

model_enum! {
    /// H265 Timecode Insertion Behavior
    H265TimecodeInsertionBehavior {
        Disabled => "DISABLED",
        PicTimingSei => "PIC_TIMING_SEI",
    }
}

model_enum! {
    /// Video Description Respond To Afd
    VideoDescriptionRespondToAfd {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
        Respond => "RESPOND",
    }
}

model_enum! {
    /// Video Description Scaling Behavior
    VideoDescriptionScalingBehavior {
        Default => "DEFAULT",
        StretchToOutput => "STRETCH_TO_OUTPUT",
    }
}

// Captions

model_enum! {
    /// Burn In Alignment
    BurnInAlignment {
        Centered => "CENTERED",
        Left => "LEFT",
        Smart => "SMART",
    }
}

model_enum! {
    /// Burn In Background Color
    BurnInBackgroundColor {
        Black => "BLACK",
        None => "NONE",
        White => "WHITE",
    }
}

model_enum! {
    /// Burn In Font Color
    BurnInFontColor {
        Black => "BLACK",
        Blue => "BLUE",
        Green => "GREEN",
        Red => "RED",
        White => "WHITE",
        Yellow => "YELLOW",
    }
}

model_enum! {
    /// Burn In Outline Color
    BurnInOutlineColor {
        Black => "BLACK",
        Blue => "BLUE",
        Green => "GREEN",
        Red => "RED",
        White => "WHITE",
        Yellow => "YELLOW",
    }
}

model_enum! {
    /// Burn In Shadow Color
    BurnInShadowColor {
        Black => "BLACK",
        None => "NONE",
        White => "WHITE",
    }
}

model_enum! {
    /// Burn In Teletext Grid Control
    BurnInTeletextGridControl {
        Fixed => "FIXED",
        Scaled => "SCALED",
    }
}

// Output groups

model_enum! {
    /// Hls Ad Markers
    HlsAdMarkers {
        Adobe => "ADOBE",
        Elemental => "ELEMENTAL",
        ElementalScte35 => "ELEMENTAL_SCTE35",
    }
}

model_enum! {
    /// Hls Caption Language Setting
    HlsCaptionLanguageSetting {
        Insert => "INSERT",
        None => "NONE",
        Omit => "OMIT",
    }
}

model_enum! {
    /// Hls Client Cache
    HlsClientCache {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// Hls Codec Specification
    HlsCodecSpecification {
        Rfc4281 => "RFC_4281",
        Rfc6381 => "RFC_6381",
    }
}

model_enum! {
    /// Hls Directory Structure
    HlsDirectoryStructure {
        SingleDirectory => "SINGLE_DIRECTORY",
        SubdirectoryPerStream => "SUBDIRECTORY_PER_STREAM",
    }
}

model_enum! {
    /// Hls Encryption Type
    HlsEncryptionType {
        Aes128 => "AES128",
        SampleAes => "SAMPLE_AES",
    }
}

model_enum! {
    /// Hls Id3 Segment Tagging State
    HlsId3SegmentTaggingState {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// IFrame Only Playlist Type
    IFrameOnlyPlaylistType {
        Disabled => "DISABLED",
        Standard => "STANDARD",
    }
}

model_enum! {
    /// Input Loss Action For Hls Out
    InputLossActionForHlsOut {
        EmitOutput => "EMIT_OUTPUT",
        PauseOutput => "PAUSE_OUTPUT",
    }
}

model_enum! {
    /// Hls Iv In Manifest
    HlsIvInManifest {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

model_enum! {
    /// Hls Iv Source
    HlsIvSource {
        Explicit => "EXPLICIT",
        FollowsSegmentNumber => "FOLLOWS_SEGMENT_NUMBER",
    }
}

model_enum! {
    /// Hls Manifest Compression
    HlsManifestCompression {
        Gzip => "GZIP",
        None => "NONE",
    }
}

model_enum! {
    /// Hls Manifest Duration Format
    HlsManifestDurationFormat {
        FloatingPoint => "FLOATING_POINT",
        Integer => "INTEGER",
    }
}

model_enum! {
    /// Hls Mode
    HlsMode {
        Live => "LIVE",
        Vod => "VOD",
    }
}

model_enum! {
    /// Hls Output Selection
    HlsOutputSelection {
        ManifestsAndSegments => "MANIFESTS_AND_SEGMENTS",
        SegmentsOnly => "SEGMENTS_ONLY",
    }
}

model_enum! {
    /// Hls Program Date Time
    HlsProgramDateTime {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

model_enum! {
    /// Hls Redundant Manifest
    HlsRedundantManifest {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// Hls Segmentation Mode
    HlsSegmentationMode {
        UseInputSegmentation => "USE_INPUT_SEGMENTATION",
        UseSegmentDuration => "USE_SEGMENT_DURATION",
    }
}

model_enum! {
    /// Hls Stream Inf Resolution
    HlsStreamInfResolution {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

model_enum! {
    /// Hls Timed Metadata Id3 Frame
    HlsTimedMetadataId3Frame {
        None => "NONE",
        Priv => "PRIV",
        Tdrl => "TDRL",
    }
}

model_enum! {
    /// Hls Ts File Mode
    HlsTsFileMode {
        SegmentedFiles => "SEGMENTED_FILES",
        SingleFile => "SINGLE_FILE",
    }
}

model_enum! {
    /// Hls Akamai Http Transfer Mode
    HlsAkamaiHttpTransferMode {
        Chunked => "CHUNKED",
        NonChunked => "NON_CHUNKED",
    }
}

model_enum! {
    /// Hls Webdav Http Transfer Mode
    HlsWebdavHttpTransferMode {
        Chunked => "CHUNKED",
        NonChunked => "NON_CHUNKED",
    }
}

model_enum! {
    /// Hls Media Store Storage Class
    HlsMediaStoreStorageClass {
        Temporal => "TEMPORAL",
    }
}

model_enum! {
    /// Hls H265 Packaging Type
    HlsH265PackagingType {
        Hev1 => "HEV1",
        Hvc1 => "HVC1",
    }
}

model_enum! {
    /// Smooth Group Audio Only Timecode Control
    SmoothGroupAudioOnlyTimecodeControl {
        Passthrough => "PASSTHROUGH",
        UseConfiguredClock => "USE_CONFIGURED_CLOCK",
    }
}

model_enum! {
    /// Smooth Group Certificate Mode
    SmoothGroupCertificateMode {
        SelfSigned => "SELF_SIGNED",
        VerifyAuthenticity => "VERIFY_AUTHENTICITY",
    }
}

model_enum! {
    /// Smooth Group Event Id Mode
    SmoothGroupEventIdMode {
        NoEventId => "NO_EVENT_ID",
        UseConfigured => "USE_CONFIGURED",
        UseTimestamp => "USE_TIMESTAMP",
    }
}

model_enum! {
    /// Smooth Group Event Stop Behavior
    SmoothGroupEventStopBehavior {
        None => "NONE",
        SendEos => "SEND_EOS",
    }
}

model_enum! {
    /// Input Loss Action For Ms Smooth Out
    InputLossActionForMsSmoothOut {
        EmitOutput => "EMIT_OUTPUT",
        PauseOutput => "PAUSE_OUTPUT",
    }
}

model_enum! {
    /// Smooth Group Segmentation Mode
    SmoothGroupSegmentationMode {
        UseInputSegmentation => "USE_INPUT_SEGMENTATION",
        UseSegmentDuration => "USE_SEGMENT_DURATION",
    }
}

model_enum! {
    /// Smooth Group Sparse Track Type
    SmoothGroupSparseTrackType {
        None => "NONE",
        Scte35 => "SCTE_35",
        Scte35WithoutSegmentation => "SCTE_35_WITHOUT_SEGMENTATION",
    }
}

model_enum! {
    /// Smooth Group Stream Manifest Behavior
    SmoothGroupStreamManifestBehavior {
        DoNotSend => "DO_NOT_SEND",
        Send => "SEND",
    }
}

model_enum! {
    /// Smooth Group Timestamp Offset Mode
    SmoothGroupTimestampOffsetMode {
        UseConfiguredOffset => "USE_CONFIGURED_OFFSET",
        UseEventStartDate => "USE_EVENT_START_DATE",
    }
}

model_enum! {
    /// Ms Smooth H265 Packaging Type
    MsSmoothH265PackagingType {
        Hev1 => "HEV1",
        Hvc1 => "HVC1",
    }
}

// Transport stream

model_enum! {
    /// M2ts Absent Input Audio Behavior
    M2tsAbsentInputAudioBehavior {
        Drop => "DROP",
        EncodeSilence => "ENCODE_SILENCE",
    }
}

model_enum! {
    /// M2ts Arib
    M2tsArib {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// M2ts Arib Captions Pid Control
    M2tsAribCaptionsPidControl {
        Auto => "AUTO",
        UseConfigured => "USE_CONFIGURED",
    }
}

model_enum! {
    /// M2ts Audio Buffer Model
    M2tsAudioBufferModel {
        Atsc => "ATSC",
        Dvb => "DVB",
    }
}

model_enum! {
    /// M2ts Audio Stream Type
    M2tsAudioStreamType {
        Atsc => "ATSC",
        Dvb => "DVB",
    }
}

model_enum! {
    /// M2ts Buffer Model
    M2tsBufferModel {
        Multiplex => "MULTIPLEX",
        None => "NONE",
    }
}

model_enum! {
    /// M2ts Cc Descriptor
    M2tsCcDescriptor {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

model_enum! {
    /// M2ts Ebif Control
    M2tsEbifControl {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
    }
}

model_enum! {
    /// M2ts Audio Interval
    M2tsAudioInterval {
        VideoAndFixedIntervals => "VIDEO_AND_FIXED_INTERVALS",
        VideoInterval => "VIDEO_INTERVAL",
    }
}

model_enum! {
    /// M2ts Ebp Placement
    M2tsEbpPlacement {
        VideoAndAudioPids => "VIDEO_AND_AUDIO_PIDS",
        VideoPid => "VIDEO_PID",
    }
}

model_enum! {
    /// M2ts Es Rate In Pes
    M2tsEsRateInPes {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

model_enum! {
    /// M2ts Klv
    M2tsKlv {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
    }
}

model_enum! {
    /// M2ts Nielsen Id3 Behavior
    M2tsNielsenId3Behavior {
        NoPassthrough => "NO_PASSTHROUGH",
        Passthrough => "PASSTHROUGH",
    }
}

model_enum! {
    /// M2ts Pcr Control
    M2tsPcrControl {
        ConfiguredPcrPeriod => "CONFIGURED_PCR_PERIOD",
        PcrEveryPesPacket => "PCR_EVERY_PES_PACKET",
    }
}

model_enum! {
    /// M2ts Rate Mode
    M2tsRateMode {
        Cbr => "CBR",
        Vbr => "VBR",
    }
}

model_enum! {
    /// M2ts Scte35 Control
    M2tsScte35Control {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
    }
}

model_enum! {
    /// M2ts Segmentation Markers
    M2tsSegmentationMarkers {
        Ebp => "EBP",
        EbpLegacy => "EBP_LEGACY",
        None => "NONE",
        PsiSegstart => "PSI_SEGSTART",
        RaiAdapt => "RAI_ADAPT",
        RaiSegstart => "RAI_SEGSTART",
    }
}

model_enum! {
    /// M2ts Segmentation Style
    M2tsSegmentationStyle {
        MaintainCadence => "MAINTAIN_CADENCE",
        ResetCadence => "RESET_CADENCE",
    }
}

model_enum! {
    /// M2ts Timed Metadata Behavior
    M2tsTimedMetadataBehavior {
        NoPassthrough => "NO_PASSTHROUGH",
        Passthrough => "PASSTHROUGH",
    }
}

model_enum! {
    /// Dvb Sdt Output Sdt
    DvbSdtOutputSdt {
        SdtFollow => "SDT_FOLLOW",
        SdtFollowIfPresent => "SDT_FOLLOW_IF_PRESENT",
        SdtManual => "SDT_MANUAL",
        SdtNone => "SDT_NONE",
    }
}

// Channel

model_enum! {
    /// Timecode Config Source
    TimecodeConfigSource {
        Embedded => "EMBEDDED",
        Systemclock => "SYSTEMCLOCK",
        Zerobased => "ZEROBASED",
    }
}

// Reservations

model_enum! {
    /// Offering Duration Units
    OfferingDurationUnits {
        Months => "MONTHS",
    }
}

model_enum! {
    /// Offering Type
    OfferingType {
        NoUpfront => "NO_UPFRONT",
    }
}

model_enum! {
    /// Reservation State
    ReservationState {
        Active => "ACTIVE",
        Expired => "EXPIRED",
        Canceled => "CANCELED",
        Deleted => "DELETED",
    }
}

model_enum! {
    /// Channel Class
    ChannelClass {
        Standard => "STANDARD",
        SinglePipeline => "SINGLE_PIPELINE",
    }
}

model_enum! {
    /// Reservation Codec
    ReservationCodec {
        Mpeg2 => "MPEG2",
        Avc => "AVC",
        Hevc => "HEVC",
        Audio => "AUDIO",
        Link => "LINK",
    }
}

model_enum! {
    /// Reservation Maximum Bitrate
    ReservationMaximumBitrate {
        Max10Mbps => "MAX_10_MBPS",
        Max20Mbps => "MAX_20_MBPS",
        Max50Mbps => "MAX_50_MBPS",
    }
}

model_enum! {
    /// Reservation Maximum Framerate
    ReservationMaximumFramerate {
        Max30Fps => "MAX_30_FPS",
        Max60Fps => "MAX_60_FPS",
    }
}

model_enum! {
    /// Reservation Resolution
    ReservationResolution {
        Sd => "SD",
        Hd => "HD",
        Fhd => "FHD",
        Uhd => "UHD",
    }
}

model_enum! {
    /// Reservation Resource Type
    ReservationResourceType {
        Input => "INPUT",
        Output => "OUTPUT",
        Multiplex => "MULTIPLEX",
        Channel => "CHANNEL",
    }
}

model_enum! {
    /// Reservation Special Feature
    ReservationSpecialFeature {
        AdvancedAudio => "ADVANCED_AUDIO",
        AudioNormalization => "AUDIO_NORMALIZATION",
    }
}

model_enum! {
    /// Reservation Video Quality
    ReservationVideoQuality {
        Standard => "STANDARD",
        Enhanced => "ENHANCED",
        Premium => "PREMIUM",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_token_converts_to_variant() {
        assert_eq!(H264Profile::from("HIGH"), H264Profile::High);
        assert_eq!(H264Profile::from("HIGH".to_string()), H264Profile::High);
        assert_eq!(
            "FOLLOW_INPUT".parse::<AudioDescriptionAudioTypeControl>().unwrap(),
            AudioDescriptionAudioTypeControl::FollowInput
        );
    }

    #[test]
    fn test_unknown_token_is_preserved() {
        let level = H264Level::from("H264_LEVEL_9");
        assert!(!level.is_known());
        assert_eq!(level.as_str(), "H264_LEVEL_9");
        assert!(matches!(&level, H264Level::Unknown(token) if token.as_str() == "H264_LEVEL_9"));
        assert_eq!(level, H264Level::from("H264_LEVEL_9".to_string()));
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!(!AudioType::from("clean_effects").is_known());
        assert!(AudioType::from("CLEAN_EFFECTS").is_known());
    }

    #[test]
    fn test_values_lists_every_known_token() {
        assert_eq!(H264GopSizeUnits::VALUES, &["FRAMES", "SECONDS"]);
        for token in FixedAfd::VALUES {
            let value = FixedAfd::from(*token);
            assert!(value.is_known());
            assert_eq!(value.as_str(), *token);
        }
    }

    #[test]
    fn test_display_uses_token() {
        assert_eq!(Eac3PhaseControl::Shift90Degrees.to_string(), "SHIFT_90_DEGREES");
        assert_eq!(AudioType::CleanEffects, "CLEAN_EFFECTS");
    }
}
