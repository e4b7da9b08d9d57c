//! Tests for the JSON/YAML wire codec

use std::fs;

use medialive_model::model::{
    AacSettings, AudioCodecSettings, AudioDescription, AudioType, DescribeReservationResult,
    EncoderSettings, H264Profile, H264RateControlMode, ReservationState,
};
use medialive_model::wire::inspect_file;
use medialive_model::{ConfigBuilder, MediaLiveError, WireCodec, WireError, WireFormat};
use tempfile::TempDir;

fn json_codec() -> WireCodec {
    WireCodec::new(&ConfigBuilder::new().build().unwrap())
}

fn yaml_codec() -> WireCodec {
    WireCodec::new(
        &ConfigBuilder::new()
            .wire_format(WireFormat::Yaml)
            .build()
            .unwrap(),
    )
}

#[test]
fn test_encode_omits_absent_fields() {
    let description = AudioDescription::new()
        .with_name("ad1")
        .with_audio_type(AudioType::CleanEffects);

    let encoded = json_codec().encode(&description).unwrap();

    assert_eq!(encoded, r#"{"AudioType":"CLEAN_EFFECTS","Name":"ad1"}"#);
}

#[test]
fn test_empty_shape_encodes_as_empty_object() {
    assert_eq!(json_codec().encode(&AudioDescription::new()).unwrap(), "{}");
}

#[test]
fn test_nested_values_keep_types() {
    let description = AudioDescription::new().with_codec_settings(
        AudioCodecSettings::new().with_aac_settings(AacSettings::new().with_bitrate(192000.0)),
    );

    let encoded = json_codec().encode(&description).unwrap();

    assert_eq!(
        encoded,
        r#"{"CodecSettings":{"AacSettings":{"Bitrate":192000.0}}}"#
    );
}

#[test]
fn test_decode_treats_null_as_absent() {
    let decoded: AudioDescription = json_codec()
        .decode(r#"{"Name":"ad1","StreamName":null,"AudioType":null}"#)
        .unwrap();

    assert_eq!(decoded, AudioDescription::new().with_name("ad1"));
    assert_eq!(decoded.stream_name(), None);
}

#[test]
fn test_decode_ignores_unknown_keys() {
    let decoded: AudioDescription = json_codec()
        .decode(r#"{"Name":"ad1","SomeFutureField":{"x":1}}"#)
        .unwrap();

    assert_eq!(decoded.to_string(), "{Name: ad1}");
}

#[test]
fn test_unknown_enum_token_round_trips() {
    let codec = json_codec();
    let input = r#"{"AudioType":"AUDIO_DESCRIPTION_V2"}"#;

    let decoded: AudioDescription = codec.decode(input).unwrap();
    let audio_type = decoded.audio_type().unwrap();
    assert!(!audio_type.is_known());
    assert!(matches!(audio_type, AudioType::Unknown(token) if token.as_str() == "AUDIO_DESCRIPTION_V2"));
    assert_eq!(codec.encode(&decoded).unwrap(), input);
}

#[test]
fn test_type_mismatch_is_a_json_error() {
    let err = json_codec()
        .decode::<AudioDescription>(r#"{"Name":42}"#)
        .unwrap_err();

    assert!(matches!(err, WireError::Json(_)));
}

#[test]
fn test_tags_encode_as_object() {
    let mut result = DescribeReservationResult::new().with_state(ReservationState::Active);
    result.add_tags_entry("env", "prod").unwrap();

    let encoded = json_codec().encode(&result).unwrap();

    assert_eq!(encoded, r#"{"State":"ACTIVE","Tags":{"env":"prod"}}"#);
}

#[test]
fn test_yaml_channel_document_decodes() {
    let yaml = r#"
AudioDescriptions:
  - Name: audio_1
    AudioSelectorName: default
    CodecSettings:
      AacSettings:
        Bitrate: 96000
        SampleRate: 48000
VideoDescriptions:
  - Name: video_1080p
    Width: 1920
    Height: 1080
    CodecSettings:
      H264Settings:
        Bitrate: 5000000
        Profile: HIGH
        RateControlMode: CBR
        GopSize: 2
TimecodeConfig:
  Source: SYSTEMCLOCK
"#;

    let settings: EncoderSettings = yaml_codec().decode(yaml).unwrap();

    let audio = &settings.audio_descriptions().unwrap()[0];
    assert_eq!(audio.name(), Some("audio_1"));
    assert_eq!(
        audio
            .codec_settings()
            .and_then(|c| c.aac_settings())
            .and_then(|aac| aac.sample_rate()),
        Some(48000.0)
    );

    let h264 = settings.video_descriptions().unwrap()[0]
        .codec_settings()
        .and_then(|c| c.h264_settings())
        .unwrap();
    assert_eq!(h264.bitrate(), Some(5_000_000));
    assert_eq!(h264.profile(), Some(&H264Profile::High));
    assert_eq!(h264.rate_control_mode(), Some(&H264RateControlMode::Cbr));
    assert_eq!(h264.gop_size(), Some(2.0));
    assert_eq!(h264.slices(), None);
}

#[test]
fn test_yaml_encode_then_decode_preserves_shape() {
    let codec = yaml_codec();
    let description = AudioDescription::new()
        .with_name("ad1")
        .with_language_code("eng");

    let encoded = codec.encode(&description).unwrap();
    assert!(encoded.contains("LanguageCode: eng"));

    let decoded: AudioDescription = codec.decode(&encoded).unwrap();
    assert_eq!(decoded, description);
}

#[test]
fn test_pretty_json_is_multiline() {
    let codec = WireCodec::new(&ConfigBuilder::new().pretty(true).build().unwrap());
    let encoded = codec
        .encode(&AudioDescription::new().with_name("ad1").with_stream_name("main"))
        .unwrap();

    assert_eq!(encoded.lines().count(), 4);
}

#[test]
fn test_oversized_document_is_rejected() {
    let codec = WireCodec::new(&ConfigBuilder::new().max_document_bytes(16).build().unwrap());
    let input = r#"{"Name":"a-rather-long-name"}"#;

    let err = codec.decode::<AudioDescription>(input).unwrap_err();

    match err {
        WireError::DocumentTooLarge { size, limit } => {
            assert_eq!(size, input.len());
            assert_eq!(limit, 16);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_decode_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audio.json");
    fs::write(&path, r#"{"Name":"ad1","LanguageCode":"eng"}"#).unwrap();

    let decoded: AudioDescription = json_codec().decode_file(&path).unwrap();

    assert_eq!(decoded.to_string(), "{LanguageCode: eng,Name: ad1}");
}

#[test]
fn test_decode_file_missing_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = json_codec()
        .decode_file::<AudioDescription>(temp_dir.path().join("missing.json"))
        .unwrap_err();

    assert!(matches!(err, MediaLiveError::Io(_)));
}

#[test]
fn test_inspect_file_rejects_oversized_file() {
    let codec = WireCodec::new(&ConfigBuilder::new().max_document_bytes(16).build().unwrap());
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("large.json");
    let input = format!(r#"{{"Name":"{}"}}"#, "x".repeat(64));
    fs::write(&path, &input).unwrap();

    let err = inspect_file(&codec, "AudioDescription", &path).unwrap_err();

    match err {
        MediaLiveError::Wire(WireError::DocumentTooLarge { size, limit }) => {
            assert_eq!(size, input.len());
            assert_eq!(limit, 16);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_inspect_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("level.json");
    fs::write(&path, r#"{"InputChannel": 2, "Gain": -6}"#).unwrap();

    let inspection = inspect_file(&json_codec(), "InputChannelLevel", &path).unwrap();

    assert_eq!(inspection.debug, "{Gain: -6,InputChannel: 2}");
    assert_eq!(inspection.encoded, r#"{"Gain":-6,"InputChannel":2}"#);
}

#[test]
fn test_inspect_file_checks_shape_before_reading() {
    let temp_dir = TempDir::new().unwrap();
    let err = inspect_file(&json_codec(), "ChannelSettings", temp_dir.path().join("missing.json"))
        .unwrap_err();

    assert!(matches!(err, MediaLiveError::Wire(WireError::UnknownShape(_))));
}
