//! Audio encode shapes

use super::enums::*;

model! {
    /// Audio Description
    pub struct AudioDescription {
        /// Advanced audio normalization settings.
        "AudioNormalizationSettings" audio_normalization_settings: nested(AudioNormalizationSettings),
        /// The name of the AudioSelector used as the source for this AudioDescription.
        "AudioSelectorName" audio_selector_name: string,
        /// Applies only if audioTypeControl is useConfigured.
        "AudioType" audio_type: enumeration(AudioType),
        /// Determines how audio type is determined.
        "AudioTypeControl" audio_type_control: enumeration(AudioDescriptionAudioTypeControl),
        /// Audio codec settings.
        "CodecSettings" codec_settings: nested(AudioCodecSettings),
        /// RFC 5646 language code representing the language of the audio output track.
        "LanguageCode" language_code: string,
        /// Choosing followInput will cause the ISO 639 language code of the output to follow the input.
        "LanguageCodeControl" language_code_control: enumeration(AudioDescriptionLanguageCodeControl),
        /// The name of this AudioDescription. Outputs reference it by name.
        "Name" name: string,
        /// Settings that control how input audio channels are remixed into the output.
        "RemixSettings" remix_settings: nested(RemixSettings),
        /// Used for MS Smooth and Apple HLS outputs.
        "StreamName" stream_name: string,
    }
}

model! {
    /// Audio Normalization Settings
    pub struct AudioNormalizationSettings {
        "Algorithm" algorithm: enumeration(AudioNormalizationAlgorithm),
        "AlgorithmControl" algorithm_control: enumeration(AudioNormalizationAlgorithmControl),
        /// Target LKFS(loudness) to adjust volume to.
        "TargetLkfs" target_lkfs: double,
    }
}

model! {
    /// Remix Settings
    pub struct RemixSettings {
        /// Mapping of input channels to output channels, with appropriate gain adjustments.
        "ChannelMappings" channel_mappings: list(AudioChannelMapping),
        "ChannelsIn" channels_in: int,
        "ChannelsOut" channels_out: int,
    }
}

model! {
    /// Audio Channel Mapping
    pub struct AudioChannelMapping {
        "InputChannelLevels" input_channel_levels: list(InputChannelLevel),
        /// The index of the output channel being produced.
        "OutputChannel" output_channel: int,
    }
}

model! {
    /// Input Channel Level
    pub struct InputChannelLevel {
        /// Remixing value. Units are in dB and acceptable values are within the range from -60 (mute) and 6 dB.
        "Gain" gain: int,
        "InputChannel" input_channel: int,
    }
}

model! {
    /// Audio Codec Settings
    ///
    /// Exactly one member is expected to be present; this is not enforced.
    pub struct AudioCodecSettings {
        "AacSettings" aac_settings: nested(AacSettings),
        "Ac3Settings" ac3_settings: nested(Ac3Settings),
        "Eac3Settings" eac3_settings: nested(Eac3Settings),
        "Mp2Settings" mp2_settings: nested(Mp2Settings),
        "PassThroughSettings" pass_through_settings: nested(PassThroughSettings),
    }
}

model! {
    /// Aac Settings
    pub struct AacSettings {
        /// Average bitrate in bits/second.
        "Bitrate" bitrate: double,
        "CodingMode" coding_mode: enumeration(AacCodingMode),
        "InputType" input_type: enumeration(AacInputType),
        "Profile" profile: enumeration(AacProfile),
        "RateControlMode" rate_control_mode: enumeration(AacRateControlMode),
        "RawFormat" raw_format: enumeration(AacRawFormat),
        /// Sample rate in Hz.
        "SampleRate" sample_rate: double,
        "Spec" spec: enumeration(AacSpec),
        "VbrQuality" vbr_quality: enumeration(AacVbrQuality),
    }
}

model! {
    /// Ac3 Settings
    pub struct Ac3Settings {
        "Bitrate" bitrate: double,
        "BitstreamMode" bitstream_mode: enumeration(Ac3BitstreamMode),
        "CodingMode" coding_mode: enumeration(Ac3CodingMode),
        /// Sets the dialnorm for the output. If excluded and input audio is Dolby Digital, dialnorm will be passed through.
        "Dialnorm" dialnorm: int,
        "DrcProfile" drc_profile: enumeration(Ac3DrcProfile),
        "LfeFilter" lfe_filter: enumeration(Ac3LfeFilter),
        "MetadataControl" metadata_control: enumeration(Ac3MetadataControl),
    }
}

model! {
    /// Eac3 Settings
    pub struct Eac3Settings {
        "AttenuationControl" attenuation_control: enumeration(Eac3AttenuationControl),
        /// Average bitrate in bits/second.
        "Bitrate" bitrate: double,
        "BitstreamMode" bitstream_mode: enumeration(Eac3BitstreamMode),
        "CodingMode" coding_mode: enumeration(Eac3CodingMode),
        "DcFilter" dc_filter: enumeration(Eac3DcFilter),
        "Dialnorm" dialnorm: int,
        "DrcLine" drc_line: enumeration(Eac3DrcLine),
        "DrcRf" drc_rf: enumeration(Eac3DrcRf),
        "LfeControl" lfe_control: enumeration(Eac3LfeControl),
        "LfeFilter" lfe_filter: enumeration(Eac3LfeFilter),
        "LoRoCenterMixLevel" lo_ro_center_mix_level: double,
        "LoRoSurroundMixLevel" lo_ro_surround_mix_level: double,
        "LtRtCenterMixLevel" lt_rt_center_mix_level: double,
        "LtRtSurroundMixLevel" lt_rt_surround_mix_level: double,
        "MetadataControl" metadata_control: enumeration(Eac3MetadataControl),
        "PassthroughControl" passthrough_control: enumeration(Eac3PassthroughControl),
        "PhaseControl" phase_control: enumeration(Eac3PhaseControl),
        "StereoDownmix" stereo_downmix: enumeration(Eac3StereoDownmix),
        "SurroundExMode" surround_ex_mode: enumeration(Eac3SurroundExMode),
        "SurroundMode" surround_mode: enumeration(Eac3SurroundMode),
    }
}

model! {
    /// Mp2 Settings
    pub struct Mp2Settings {
        "Bitrate" bitrate: double,
        "CodingMode" coding_mode: enumeration(Mp2CodingMode),
        "SampleRate" sample_rate: double,
    }
}

model! {
    /// Pass Through Settings
    ///
    /// Carries no fields; its presence selects pass-through.
    pub struct PassThroughSettings {}
}
