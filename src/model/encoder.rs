//! Channel encoder settings

use super::audio::AudioDescription;
use super::captions::CaptionDescription;
use super::enums::TimecodeConfigSource;
use super::output::OutputGroup;
use super::video::VideoDescription;

model! {
    /// Encoder Settings
    pub struct EncoderSettings {
        "AudioDescriptions" audio_descriptions: list(AudioDescription),
        /// Settings for caption decriptions
        "CaptionDescriptions" caption_descriptions: list(CaptionDescription),
        "OutputGroups" output_groups: list(OutputGroup),
        /// Contains settings used to acquire and adjust timecode information from inputs.
        "TimecodeConfig" timecode_config: nested(TimecodeConfig),
        "VideoDescriptions" video_descriptions: list(VideoDescription),
    }
}

model! {
    /// Timecode Config
    pub struct TimecodeConfig {
        /// Identifies the source for the timecode that will be associated with the events outputs.
        "Source" source: enumeration(TimecodeConfigSource),
        /// Threshold in frames beyond which output timecode is resynchronized to the input timecode.
        "SyncThreshold" sync_threshold: int,
    }
}
