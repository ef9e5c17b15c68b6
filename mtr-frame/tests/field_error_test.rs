//! 字段错误与确定性测试
//!
//! 验证数值边界、非数字电话号码、未知代际以及并发构建结果一致

use mtr_frame::{
    build_frame, EncodeError, FeatureConfig, FieldCatalog, FrameBuilder, FrameError, Generation,
    ProtocolContext,
};
use std::sync::Arc;

fn ctx(generation: Generation) -> ProtocolContext {
    ProtocolContext::new(generation, 10).unwrap()
}

#[test]
fn test_byte_field_boundary() {
    let mut profile = FeatureConfig::default();
    profile.ias_timeout = 255;
    let frame = build_frame(&profile, &ctx(Generation::Two)).unwrap();
    let offset = FieldCatalog::feature_config()
        .offset_of("ias_timeout", &ctx(Generation::Two))
        .unwrap();
    assert_eq!(frame[offset], 0xFF);

    profile.ias_timeout = 256;
    let err = build_frame(&profile, &ctx(Generation::Two)).unwrap_err();
    assert_eq!(
        err,
        FrameError::Field {
            field: "ias_timeout",
            source: EncodeError::ValueOutOfRange { value: 256, max: 255 },
        }
    );
}

#[test]
fn test_word_field_boundary() {
    let mut profile = FeatureConfig::default();
    profile.card_alarm_duration = 65535;
    let built = FrameBuilder::default()
        .build_fields(&profile, &ctx(Generation::One))
        .unwrap();
    assert_eq!(built.field_bytes("card_alarm_duration"), Some(&[0xFF, 0xFF][..]));

    profile.card_alarm_duration = 65536;
    let err = build_frame(&profile, &ctx(Generation::One)).unwrap_err();
    assert!(err.is_value_out_of_range());
    assert_eq!(err.field(), Some("card_alarm_duration"));
}

#[test]
fn test_nullable_byte_field_out_of_range() {
    let mut profile = FeatureConfig::default();
    profile.spare_d = Some(1000);

    // 仅 MTR 1.x 输出该字段
    assert!(build_frame(&profile, &ctx(Generation::Two)).is_ok());
    let err = build_frame(&profile, &ctx(Generation::One)).unwrap_err();
    assert_eq!(err.field(), Some("spare_d"));
}

#[test]
fn test_invalid_aos_number() {
    let mut profile = FeatureConfig::default();
    profile.aos_number = Some("800 555 1234".to_string());

    let err = build_frame(&profile, &ctx(Generation::One)).unwrap_err();
    assert!(err.is_invalid_digit_string());
    assert_eq!(err.field(), Some("aos_number"));

    // MTR 2.x 不包含 AOS 号码字段
    assert!(build_frame(&profile, &ctx(Generation::Two)).is_ok());
}

#[test]
fn test_unknown_generation() {
    assert_eq!(
        ProtocolContext::from_raw(3, 10).unwrap_err(),
        FrameError::UnknownGeneration(3)
    );
    assert_eq!(
        ProtocolContext::from_raw(0, 10).unwrap_err(),
        FrameError::UnknownGeneration(0)
    );
}

#[test]
fn test_build_is_deterministic() {
    let mut profile = FeatureConfig::named("deterministic");
    profile.aos_number = Some("5551234".to_string());
    let ctx = ctx(Generation::One);

    let first = build_frame(&profile, &ctx).unwrap();
    for _ in 0..10 {
        assert_eq!(build_frame(&profile, &ctx).unwrap(), first);
    }
}

#[test]
fn test_concurrent_builds_share_profile() {
    let profile = Arc::new(FeatureConfig::named("shared"));
    let ctx = ctx(Generation::Two);
    let expected = build_frame(&profile, &ctx).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let profile = Arc::clone(&profile);
            std::thread::spawn(move || build_frame(&profile, &ctx).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_long_tel_num_len_builds() {
    let ctx = ProtocolContext::new(Generation::One, 33).unwrap();
    let mut profile = FeatureConfig::default();
    profile.aos_number = Some("8005551234".to_string());

    let built = FrameBuilder::default().build_fields(&profile, &ctx).unwrap();
    let aos = built.field_bytes("aos_number").unwrap();
    assert_eq!(aos.len(), 17);
    assert_eq!(&aos[..5], &[0x80, 0x05, 0x55, 0x12, 0x34]);
    assert!(aos[5..].iter().all(|&b| b == 0xFF));
    assert_eq!(built.bytes.len(), 71 - 5 + 17);
}
