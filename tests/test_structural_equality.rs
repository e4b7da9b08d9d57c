//! Tests for structural equality and hashing

use medialive_model::StructuralHash;
use medialive_model::model::{
    EncoderSettings, H264ColorSpaceSettings, H264GopSizeUnits, H264Profile,
    H264RateControlMode, H264Settings, Hdr10Settings, Rec709Settings, TimecodeConfig,
    TimecodeConfigSource, VideoCodecSettings, VideoDescription,
};

fn h264_settings() -> H264Settings {
    H264Settings::new()
        .with_bitrate(5_000_000)
        .with_buf_size(10_000_000)
        .with_gop_size(2.0)
        .with_gop_size_units(H264GopSizeUnits::Seconds)
        .with_profile(H264Profile::High)
        .with_rate_control_mode(H264RateControlMode::Cbr)
        .with_color_space_settings(
            H264ColorSpaceSettings::new().with_rec709_settings(Rec709Settings::new()),
        )
}

#[test]
fn test_identical_settings_are_equal_and_hash_alike() {
    let a = h264_settings();
    let b = h264_settings();

    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());
}

#[test]
fn test_changing_one_scalar_breaks_equality() {
    let a = h264_settings();
    let mut b = h264_settings();
    b.set_bitrate(6_000_000);

    assert_ne!(a, b);
    assert_ne!(a.structural_hash(), b.structural_hash());
}

#[test]
fn test_presence_pattern_matters() {
    let a = h264_settings();
    let mut b = h264_settings();
    b.clear_buf_size();

    assert_ne!(a, b);
    assert_ne!(H264Settings::new().with_slices(0), H264Settings::new());
}

#[test]
fn test_equality_is_reflexive_and_symmetric() {
    let a = h264_settings();
    let b = h264_settings();
    let c = h264_settings().with_softness(16);

    assert_eq!(a, a);
    assert_eq!(a == b, b == a);
    assert_eq!(a == c, c == a);
    assert_ne!(a, c);
}

#[test]
fn test_nested_difference_breaks_equality() {
    let a = h264_settings();
    let b = h264_settings().with_color_space_settings(H264ColorSpaceSettings::new());

    assert_ne!(a, b);
}

#[test]
fn test_nan_field_equals_itself_and_its_clone() {
    let a = H264Settings::new().with_gop_size(f64::NAN);
    let b = a.clone();

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());
}

#[test]
fn test_nan_payloads_are_equal_and_hash_alike() {
    let a = H264Settings::new().with_gop_size(f64::NAN);
    let b = H264Settings::new().with_gop_size(f64::from_bits(0x7ff8_0000_0000_0001));

    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());
    assert_ne!(a, H264Settings::new().with_gop_size(2.0));
}

#[test]
fn test_nested_nan_keeps_equality_reflexive() {
    let encoder = EncoderSettings::new().with_video_descriptions([VideoDescription::new()
        .with_codec_settings(
            VideoCodecSettings::new().with_h264_settings(H264Settings::new().with_gop_size(f64::NAN)),
        )]);

    assert_eq!(encoder, encoder.clone());
}

#[test]
fn test_signed_zero_is_equal_and_hashes_alike() {
    let a = H264Settings::new().with_gop_size(0.0);
    let b = H264Settings::new().with_gop_size(-0.0);

    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());
}

#[test]
fn test_hash_folds_fields_in_declaration_order() {
    let settings = Hdr10Settings::new().with_max_cll(1000).with_max_fall(400);
    assert_eq!(settings.structural_hash(), (31 + 1000) * 31 + 400);

    // Absent fields contribute 0.
    let only_fall = Hdr10Settings::new().with_max_fall(400);
    assert_eq!(only_fall.structural_hash(), 31 * 31 + 400);

    assert_eq!(Hdr10Settings::new().structural_hash(), 31 * 31);
}

#[test]
fn test_deep_tree_equality() {
    let build = || {
        EncoderSettings::new()
            .with_timecode_config(
                TimecodeConfig::new().with_source(TimecodeConfigSource::Systemclock),
            )
            .with_video_descriptions([VideoDescription::new()
                .with_name("video_1080p")
                .with_width(1920)
                .with_height(1080)
                .with_codec_settings(VideoCodecSettings::new().with_h264_settings(h264_settings()))])
    };

    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());

    let c = build().with_video_descriptions([VideoDescription::new().with_name("video_720p")]);
    assert_ne!(a, c);
}

#[test]
fn test_clone_is_structurally_equal() {
    let original = h264_settings();
    let mut copy = original.clone();
    assert_eq!(original, copy);

    copy.set_profile(H264Profile::Main);
    assert_ne!(original, copy);
    assert_eq!(original.profile(), Some(&H264Profile::High));
}
