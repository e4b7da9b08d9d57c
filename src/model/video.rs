//! Video encode shapes

use super::enums::*;

model! {
    /// Video Description
    pub struct VideoDescription {
        /// Video codec settings.
        "CodecSettings" codec_settings: nested(VideoCodecSettings),
        /// Output video height, in pixels. Leave blank to use source video height.
        "Height" height: int,
        /// The name of this VideoDescription. Outputs reference it by name.
        "Name" name: string,
        "RespondToAfd" respond_to_afd: enumeration(VideoDescriptionRespondToAfd),
        "ScalingBehavior" scaling_behavior: enumeration(VideoDescriptionScalingBehavior),
        /// Changes the strength of the anti-alias filter used for scaling. 0 is the softest setting, 100 is the sharpest.
        "Sharpness" sharpness: int,
        /// Output video width, in pixels.
        "Width" width: int,
    }
}

model! {
    /// Video Codec Settings
    pub struct VideoCodecSettings {
        "FrameCaptureSettings" frame_capture_settings: nested(FrameCaptureSettings),
        "H264Settings" h264_settings: nested(H264Settings),
        "H265Settings" h265_settings: nested(H265Settings),
    }
}

model! {
    /// Frame Capture Settings
    pub struct FrameCaptureSettings {
        /// The frequency at which to capture frames for inclusion in the output.
        "CaptureInterval" capture_interval: int,
        "CaptureIntervalUnits" capture_interval_units: enumeration(FrameCaptureIntervalUnit),
    }
}

model! {
    /// H264 Settings
    pub struct H264Settings {
        "AdaptiveQuantization" adaptive_quantization: enumeration(H264AdaptiveQuantization),
        "AfdSignaling" afd_signaling: enumeration(AfdSignaling),
        /// Average bitrate in bits/second.
        "Bitrate" bitrate: int,
        /// Percentage of the buffer that should initially be filled (HRD buffer model).
        "BufFillPct" buf_fill_pct: int,
        /// Size of buffer (HRD buffer model) in bits.
        "BufSize" buf_size: int,
        "ColorMetadata" color_metadata: enumeration(H264ColorMetadata),
        "ColorSpaceSettings" color_space_settings: nested(H264ColorSpaceSettings),
        "EntropyEncoding" entropy_encoding: enumeration(H264EntropyEncoding),
        /// Optional filters that you can apply to an encode.
        "FilterSettings" filter_settings: nested(H264FilterSettings),
        "FixedAfd" fixed_afd: enumeration(FixedAfd),
        "FlickerAq" flicker_aq: enumeration(H264FlickerAq),
        "ForceFieldPictures" force_field_pictures: enumeration(H264ForceFieldPictures),
        "FramerateControl" framerate_control: enumeration(H264FramerateControl),
        "FramerateDenominator" framerate_denominator: int,
        "FramerateNumerator" framerate_numerator: int,
        "GopBReference" gop_b_reference: enumeration(H264GopBReference),
        "GopClosedCadence" gop_closed_cadence: int,
        "GopNumBFrames" gop_num_b_frames: int,
        /// GOP size (keyframe interval) in units of either frames or seconds per gopSizeUnits.
        "GopSize" gop_size: double,
        "GopSizeUnits" gop_size_units: enumeration(H264GopSizeUnits),
        "Level" level: enumeration(H264Level),
        "LookAheadRateControl" look_ahead_rate_control: enumeration(H264LookAheadRateControl),
        /// For QVBR: See the tooltip for Quality level. For VBR: Set the maximum bitrate.
        "MaxBitrate" max_bitrate: int,
        "MinIInterval" min_i_interval: int,
        "NumRefFrames" num_ref_frames: int,
        "ParControl" par_control: enumeration(H264ParControl),
        "ParDenominator" par_denominator: int,
        "ParNumerator" par_numerator: int,
        "Profile" profile: enumeration(H264Profile),
        "QualityLevel" quality_level: enumeration(H264QualityLevel),
        /// Controls the target quality for the video encode. Applies only when the rate control mode is QVBR.
        "QvbrQualityLevel" qvbr_quality_level: int,
        "RateControlMode" rate_control_mode: enumeration(H264RateControlMode),
        "ScanType" scan_type: enumeration(H264ScanType),
        "SceneChangeDetect" scene_change_detect: enumeration(H264SceneChangeDetect),
        /// Number of slices per picture.
        "Slices" slices: int,
        /// Softness. Selects quantizer matrix, larger values reduce high-frequency content.
        "Softness" softness: int,
        "SpatialAq" spatial_aq: enumeration(H264SpatialAq),
        "SubgopLength" subgop_length: enumeration(H264SubGopLength),
        "Syntax" syntax: enumeration(H264Syntax),
        "TemporalAq" temporal_aq: enumeration(H264TemporalAq),
        "TimecodeInsertion" timecode_insertion: enumeration(H264TimecodeInsertionBehavior),
    }
}

model! {
    /// H264 Color Space Settings
    pub struct H264ColorSpaceSettings {
        "ColorSpacePassthroughSettings" color_space_passthrough_settings: nested(ColorSpacePassthroughSettings),
        "Rec601Settings" rec601_settings: nested(Rec601Settings),
        "Rec709Settings" rec709_settings: nested(Rec709Settings),
    }
}

model! {
    /// H264 Filter Settings
    pub struct H264FilterSettings {
        "TemporalFilterSettings" temporal_filter_settings: nested(TemporalFilterSettings),
    }
}

model! {
    /// Temporal Filter Settings
    pub struct TemporalFilterSettings {
        "PostFilterSharpening" post_filter_sharpening: enumeration(TemporalFilterPostFilterSharpening),
        "Strength" strength: enumeration(TemporalFilterStrength),
    }
}

model! {
    /// H265 Settings
    pub struct H265Settings {
        "AdaptiveQuantization" adaptive_quantization: enumeration(H265AdaptiveQuantization),
        "AfdSignaling" afd_signaling: enumeration(AfdSignaling),
        "AlternativeTransferFunction" alternative_transfer_function: enumeration(H265AlternativeTransferFunction),
        /// Average bitrate in bits/second.
        "Bitrate" bitrate: int,
        "BufSize" buf_size: int,
        "ColorMetadata" color_metadata: enumeration(H265ColorMetadata),
        "ColorSpaceSettings" color_space_settings: nested(H265ColorSpaceSettings),
        "FixedAfd" fixed_afd: enumeration(FixedAfd),
        "FlickerAq" flicker_aq: enumeration(H265FlickerAq),
        "FramerateDenominator" framerate_denominator: int,
        "FramerateNumerator" framerate_numerator: int,
        "GopClosedCadence" gop_closed_cadence: int,
        "GopSize" gop_size: double,
        "GopSizeUnits" gop_size_units: enumeration(H265GopSizeUnits),
        "Level" level: enumeration(H265Level),
        "LookAheadRateControl" look_ahead_rate_control: enumeration(H265LookAheadRateControl),
        "MaxBitrate" max_bitrate: int,
        "MinIInterval" min_i_interval: int,
        "ParDenominator" par_denominator: int,
        "ParNumerator" par_numerator: int,
        "Profile" profile: enumeration(H265Profile),
        "QvbrQualityLevel" qvbr_quality_level: int,
        "RateControlMode" rate_control_mode: enumeration(H265RateControlMode),
        "ScanType" scan_type: enumeration(H265ScanType),
        "SceneChangeDetect" scene_change_detect: enumeration(H265SceneChangeDetect),
        "Slices" slices: int,
        "Tier" tier: enumeration(H265Tier),
        "TimecodeInsertion" timecode_insertion: enumeration(H265TimecodeInsertionBehavior),
    }
}

model! {
    /// H265 Color Space Settings
    pub struct H265ColorSpaceSettings {
        "ColorSpacePassthroughSettings" color_space_passthrough_settings: nested(ColorSpacePassthroughSettings),
        "Hdr10Settings" hdr10_settings: nested(Hdr10Settings),
        "Rec601Settings" rec601_settings: nested(Rec601Settings),
        "Rec709Settings" rec709_settings: nested(Rec709Settings),
    }
}

model! {
    /// Hdr10 Settings
    pub struct Hdr10Settings {
        /// Maximum Content Light Level.
        "MaxCll" max_cll: int,
        /// Maximum Frame Average Light Level.
        "MaxFall" max_fall: int,
    }
}

model! {
    /// Passthrough applies no color space conversion to the output
    pub struct ColorSpacePassthroughSettings {}
}

model! {
    /// Rec601 Settings
    pub struct Rec601Settings {}
}

model! {
    /// Rec709 Settings
    pub struct Rec709Settings {}
}
