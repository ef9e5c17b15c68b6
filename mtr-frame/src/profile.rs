//! 配置档案
//!
//! 终端"功能配置与呼叫选项"档案：下载帧中每个字段对应的类型化属性。
//! 默认值与已部署终端的出厂配置一致。

use crate::options::{
    AccsInfo, AdvertFlag, AntiFraud, CalledNumberDisplay, CardValidation, CoinCallFeature,
    DialingConversion, IncomingCallMode, Language, LanguageCount, OosPotsFlag, RatingFlag,
    SmartCardFlag, TerminalType,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 档案加载错误
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 功能配置与呼叫选项
///
/// 数值属性以 `u32` 保存，超出字段宽度的值在编码时被拒绝。
/// 可空属性缺省时按 0（字节字段）或全填充（电话号码字段）编码。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub name: String,

    // 公共前缀
    pub terminal_type: TerminalType,
    pub display_present: bool,
    pub num_call_follow_on: Option<u32>,
    pub card_validation_info: Vec<CardValidation>,
    pub accs_info: Vec<AccsInfo>,
    pub incoming_call_mode: IncomingCallMode,
    pub incoming_call_anti_fraud: Vec<AntiFraud>,
    pub oos_pots_flags: Vec<OosPotsFlag>,
    pub data_jack_visual_display: bool,

    // MTR 1.x
    pub incoming_call_rate: u32,
    pub spare_b: Option<u32>,
    pub spare_c: Option<u32>,
    pub spare_d: Option<u32>,
    pub spare_e: Option<u32>,
    pub spare_f: Option<u32>,
    pub aos_number: Option<String>,

    // MTR 2.x
    pub language_scrolling_order: Language,
    pub language_scrolling_order_2: Language,
    pub number_of_languages: LanguageCount,
    pub rating_flags: Vec<RatingFlag>,
    pub dial_around_timer: Option<u32>,
    pub opr_interntl_access_ptr: Option<u32>,
    pub aos_interlata_access: Option<u32>,
    pub aos_interntl_access: Option<u32>,
    pub djack_grace_before_collect: Option<u32>,
    pub opr_collection_tmr: Option<u32>,
    pub opr_intralata_access_ptr: Option<u32>,
    pub opr_interlata_access_ptr: Option<u32>,

    // 公共中段
    pub advert_enable: Vec<AdvertFlag>,
    pub default_language: Language,
    pub display_called_number: Vec<CalledNumberDisplay>,
    pub dtmf_duration: u32,
    pub inter_digit_pause: u32,

    /// 仅 MTR 1.x
    pub dialing_conversion: Vec<DialingConversion>,
    /// 仅 MTR 2.x
    pub ppu_pre_auth_credit_limit: u32,

    // 公共后缀
    pub coin_call_features: Vec<CoinCallFeature>,
    pub coin_call_overtime_period: u32,
    pub coin_call_pots_time: u32,
    pub min_international_digits: u32,
    pub def_rate_req_payment: u32,
    pub next_call_revalidation_freq: u32,
    pub cutoff_on_disconnect_duration: u32,
    pub cdr_upload_timer_int: u32,
    pub cdr_upload_timer_nonint: u32,
    pub perf_stats_dialog_fails: u32,
    pub co_line_check_fails: u32,
    pub alt_ncc_dialog_fails: u32,
    pub dialog_fails_till_oos: u32,
    pub dialog_fails_till_alarm: u32,
    pub smart_card_flags: Vec<SmartCardFlag>,
    pub max_man_card_dig: u32,
    pub aos_intra_access_ptr: u32,
    pub carrier_reroute_flags: u32,
    pub min_man_card_dig: u32,
    pub max_smart_card_inserts: u32,
    pub max_diff_smart_card_inserts: u32,
    pub aos_operator_access_ptr: u32,
    pub data_jack_flags: u32,
    pub onhook_alarm_delay: u32,
    pub post_onhook_alarm_delay: u32,
    pub card_alarm_duration: u32,
    pub alarm_cadence_on_timer: u32,
    pub alarm_cadence_off_timer: u32,
    pub cardrdr_blocked_alarm_delay: u32,
    pub settle_time: u32,
    pub grace_period_domestic: u32,
    pub ias_timeout: u32,
    pub grace_period_international: u32,
    pub settle_time_datajack: u32,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),

            terminal_type: TerminalType::Universal,
            display_present: true,
            num_call_follow_on: Some(5),
            card_validation_info: vec![CardValidation::LocalAuth, CardValidation::MceLocalAuth],
            accs_info: vec![AccsInfo::Available],
            incoming_call_mode: IncomingCallMode::RingingIncomingVoice,
            incoming_call_anti_fraud: vec![AntiFraud::AnswerSupervision],
            oos_pots_flags: vec![
                OosPotsFlag::CdrFullNoOos,
                OosPotsFlag::DisplayRate,
                OosPotsFlag::IncomingCallFcaPreced,
                OosPotsFlag::FcaZeroValueCard,
            ],
            data_jack_visual_display: false,

            incoming_call_rate: 8,
            spare_b: None,
            spare_c: None,
            spare_d: None,
            spare_e: None,
            spare_f: None,
            aos_number: None,

            language_scrolling_order: Language::English,
            language_scrolling_order_2: Language::French,
            number_of_languages: LanguageCount::Two,
            rating_flags: Vec::new(),
            dial_around_timer: None,
            opr_interntl_access_ptr: None,
            aos_interlata_access: None,
            aos_interntl_access: None,
            djack_grace_before_collect: None,
            opr_collection_tmr: None,
            opr_intralata_access_ptr: None,
            opr_interlata_access_ptr: None,

            advert_enable: vec![AdvertFlag::OnHook],
            default_language: Language::French,
            display_called_number: vec![CalledNumberDisplay::CalledNumberPrompt],
            dtmf_duration: 8,
            inter_digit_pause: 8,

            dialing_conversion: vec![
                DialingConversion::OperatorToToll,
                DialingConversion::TollToOperator,
            ],
            ppu_pre_auth_credit_limit: 0,

            coin_call_features: vec![CoinCallFeature::VoiceFeedback, CoinCallFeature::SecondWarning],
            coin_call_overtime_period: 5,
            coin_call_pots_time: 120,
            min_international_digits: 5,
            def_rate_req_payment: 10,
            next_call_revalidation_freq: 0,
            cutoff_on_disconnect_duration: 45,
            cdr_upload_timer_int: 0,
            cdr_upload_timer_nonint: 0,
            perf_stats_dialog_fails: 0,
            co_line_check_fails: 0,
            alt_ncc_dialog_fails: 0,
            dialog_fails_till_oos: 0,
            dialog_fails_till_alarm: 0,
            smart_card_flags: vec![SmartCardFlag::Legacy],
            max_man_card_dig: 14,
            aos_intra_access_ptr: 0,
            carrier_reroute_flags: 0,
            min_man_card_dig: 14,
            max_smart_card_inserts: 5,
            max_diff_smart_card_inserts: 5,
            aos_operator_access_ptr: 0,
            data_jack_flags: 0,
            onhook_alarm_delay: 500,
            post_onhook_alarm_delay: 100,
            card_alarm_duration: 1000,
            alarm_cadence_on_timer: 50,
            alarm_cadence_off_timer: 50,
            cardrdr_blocked_alarm_delay: 300,
            settle_time: 8,
            grace_period_domestic: 5,
            ias_timeout: 90,
            grace_period_international: 0,
            settle_time_datajack: 0,
        }
    }
}

impl FeatureConfig {
    /// 以给定名称创建默认档案
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 从 JSON 文本解析档案，缺失的属性取默认值
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 文件加载档案
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 序列化为格式化的 JSON
    pub fn to_json_pretty(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
