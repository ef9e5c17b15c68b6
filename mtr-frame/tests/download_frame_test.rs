//! 下载帧整帧测试
//!
//! 验证默认档案在两代固件下生成的完整字节序列

use mtr_core::utils::hex_to_bytes;
use mtr_frame::options::{
    AccsInfo, CodedOption, CoinCallFeature, OosPotsFlag, RatingFlag, SmartCardFlag,
};
use mtr_frame::{
    build_frame, FeatureConfig, FieldCatalog, FrameBuilder, Generation, ProtocolContext,
};

const SUFFIX: &str = "06 0005 0078 05 0A 00 2D 0000 0000 00 00 00 00 00 \
                      01 0E 00 00 0E 05 05 00 00 \
                      01F4 0064 03E8 0032 0032 012C 08 05 5A 00 00";

fn decode(spaced: &str) -> Vec<u8> {
    hex_to_bytes(spaced).unwrap()
}

#[test]
fn test_default_profile_mtr2() {
    let ctx = ProtocolContext::new(Generation::Two, 10).unwrap();
    let frame = build_frame(&FeatureConfig::default(), &ctx).unwrap();

    let expected = decode(&format!(
        "1A 02 01 05 05 01 01 00 0F 00 \
         01 02 02 00 00 00 00 00 00 00 00 00 \
         01 01 01 08 08 \
         00 \
         {SUFFIX}"
    ));
    assert_eq!(frame, expected);
    assert_eq!(frame.len(), 72);
}

#[test]
fn test_default_profile_mtr1_with_aos_number() {
    let ctx = ProtocolContext::new(Generation::One, 10).unwrap();
    let mut profile = FeatureConfig::default();
    profile.aos_number = Some("8005551234".to_string());

    let frame = build_frame(&profile, &ctx).unwrap();

    let expected = decode(&format!(
        "1A 02 01 05 05 01 01 00 0F 00 \
         08 00 00 00 00 00 8005551234 \
         01 01 01 08 08 \
         03 \
         {SUFFIX}"
    ));
    assert_eq!(frame, expected);
    assert_eq!(frame.len(), 71);
}

#[test]
fn test_generations_differ_in_length() {
    let profile = FeatureConfig::default();
    let gen1 = ProtocolContext::new(Generation::One, 10).unwrap();
    let gen2 = ProtocolContext::new(Generation::Two, 10).unwrap();

    let frame1 = build_frame(&profile, &gen1).unwrap();
    let frame2 = build_frame(&profile, &gen2).unwrap();
    assert_ne!(frame1.len(), frame2.len());
    assert_eq!(frame1[0], 0x1A);
    assert_eq!(frame2[0], 0x1A);
}

#[test]
fn test_missing_aos_number_is_all_filler() {
    let ctx = ProtocolContext::new(Generation::One, 10).unwrap();
    let frame = build_frame(&FeatureConfig::default(), &ctx).unwrap();
    let offset = FieldCatalog::feature_config()
        .offset_of("aos_number", &ctx)
        .unwrap();
    assert_eq!(&frame[offset..offset + 5], &[0xFF; 5]);
}

#[test]
fn test_long_aos_number_truncated() {
    let ctx = ProtocolContext::new(Generation::One, 10).unwrap();
    let mut profile = FeatureConfig::default();
    profile.aos_number = Some("18005551234".to_string());

    let frame = build_frame(&profile, &ctx).unwrap();
    let offset = FieldCatalog::feature_config()
        .offset_of("aos_number", &ctx)
        .unwrap();
    assert_eq!(&frame[offset..offset + 5], &[0x18, 0x00, 0x55, 0x51, 0x23]);
}

#[test]
fn test_flag_fields_single_byte() {
    let ctx = ProtocolContext::new(Generation::Two, 10).unwrap();
    let catalog = FieldCatalog::feature_config();
    let baseline = build_frame(&FeatureConfig::default(), &ctx).unwrap();

    // 全选与全不选都不改变帧长度
    let mut all = FeatureConfig::default();
    all.accs_info = AccsInfo::ALL.to_vec();
    all.oos_pots_flags = Vec::new();
    all.rating_flags = vec![
        RatingFlag::NpaSbr,
        RatingFlag::IntlSbr,
        RatingFlag::DialAround,
        RatingFlag::ShowTimeAndCharge,
        RatingFlag::RoundUpCharge,
        RatingFlag::SevenDigitNoWait,
    ];
    all.coin_call_features = Vec::new();

    let frame = build_frame(&all, &ctx).unwrap();
    assert_eq!(frame.len(), baseline.len());

    let at = |name: &str| frame[catalog.offset_of(name, &ctx).unwrap()];
    assert_eq!(at("accs_info"), 0xBF);
    assert_eq!(at("oos_pots_flags"), 0x00);
    assert_eq!(at("rating_flags"), 0x3F);
    assert_eq!(at("coin_call_features"), 0x00);
}

#[test]
fn test_mtr_specific_flag_meaning_same_code() {
    // MTR 1.x 的 Spare 位在 MTR 2.x 有具体含义，但代码一致
    let mut profile = FeatureConfig::default();
    profile.oos_pots_flags = vec![OosPotsFlag::Force11DigitsLocal];
    profile.coin_call_features = vec![CoinCallFeature::Overtime];

    for generation in [Generation::One, Generation::Two] {
        let ctx = ProtocolContext::new(generation, 10).unwrap();
        let frame = build_frame(&profile, &ctx).unwrap();
        assert_eq!(frame[8], 0x80);
        let offset = FieldCatalog::feature_config()
            .offset_of("coin_call_features", &ctx)
            .unwrap();
        assert_eq!(frame[offset], 0x01);
    }
}

#[test]
fn test_default_smart_card_flags_keep_factory_code() {
    let profile = FeatureConfig::default();
    assert_eq!(profile.smart_card_flags, vec![SmartCardFlag::Legacy]);

    for generation in [Generation::One, Generation::Two] {
        let ctx = ProtocolContext::new(generation, 10).unwrap();
        let built = FrameBuilder::default().build_fields(&profile, &ctx).unwrap();
        assert_eq!(built.field_bytes("smart_card_flags"), Some(&[0x01][..]));
    }

    let mut cleared = FeatureConfig::default();
    cleared.smart_card_flags = vec![
        SmartCardFlag::PostPaymentRateRequest,
        SmartCardFlag::SuppressTerminalRateInfo,
    ];
    let ctx = ProtocolContext::new(Generation::Two, 10).unwrap();
    let built = FrameBuilder::default().build_fields(&cleared, &ctx).unwrap();
    assert_eq!(built.field_bytes("smart_card_flags"), Some(&[0xA0][..]));
}
