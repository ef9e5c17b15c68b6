//! 字段目录
//!
//! 定义下载帧布局的静态有序表：每个条目给出字段名、所在区段、适用代际
//! 以及从档案取值并编码的强类型访问器。条目顺序即固件期望的字节顺序。

use crate::encoders::{encode_bool, encode_byte, encode_flags, encode_telephone, encode_word};
use crate::options::CodedOption;
use crate::profile::FeatureConfig;
use mtr_core::{FrameError, Generation, ProtocolContext};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// 帧类型操作码
pub const FRAME_OPCODE: u8 = 0x1A;

/// 字段适用范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Applicability {
    Common,
    Generation1Only,
    Generation2Only,
}

impl Applicability {
    pub fn applies_to(self, generation: Generation) -> bool {
        match self {
            Applicability::Common => true,
            Applicability::Generation1Only => generation == Generation::One,
            Applicability::Generation2Only => generation == Generation::Two,
        }
    }

    fn only(generation: Generation) -> Self {
        match generation {
            Generation::One => Applicability::Generation1Only,
            Generation::Two => Applicability::Generation2Only,
        }
    }
}

/// 帧区段，按出现顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Section {
    /// 公共前缀
    Prefix,
    /// 代际分支
    Branch,
    /// 公共中段
    Middle,
    /// 代际分支2
    BranchTail,
    /// 公共后缀
    Suffix,
}

impl Section {
    /// 该区段是否按代际分支
    pub fn is_branch(self) -> bool {
        matches!(self, Section::Branch | Section::BranchTail)
    }
}

/// 字段编码方式及其访问器
#[derive(Clone, Copy)]
pub enum FieldEncoding {
    Byte(fn(&FeatureConfig) -> u64),
    Bool(fn(&FeatureConfig) -> bool),
    Word(fn(&FeatureConfig) -> u64),
    Flags(fn(&FeatureConfig) -> [u8; 1]),
    Telephone(fn(&FeatureConfig) -> Option<&str>),
}

impl FieldEncoding {
    /// 编码方式名称
    pub fn kind(&self) -> &'static str {
        match self {
            FieldEncoding::Byte(_) => "byte",
            FieldEncoding::Bool(_) => "bool",
            FieldEncoding::Word(_) => "word",
            FieldEncoding::Flags(_) => "flags",
            FieldEncoding::Telephone(_) => "telephone",
        }
    }
}

impl std::fmt::Debug for FieldEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

/// 目录条目
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub applicability: Applicability,
    pub encoding: FieldEncoding,
}

impl FieldSpec {
    /// 两代固件共有的字段
    pub const fn common(
        section: Section,
        name: &'static str,
        label: &'static str,
        encoding: FieldEncoding,
    ) -> Self {
        Self {
            name,
            label,
            section,
            applicability: Applicability::Common,
            encoding,
        }
    }

    const fn mtr1(
        section: Section,
        name: &'static str,
        label: &'static str,
        encoding: FieldEncoding,
    ) -> Self {
        Self {
            name,
            label,
            section,
            applicability: Applicability::Generation1Only,
            encoding,
        }
    }

    const fn mtr2(
        section: Section,
        name: &'static str,
        label: &'static str,
        encoding: FieldEncoding,
    ) -> Self {
        Self {
            name,
            label,
            section,
            applicability: Applicability::Generation2Only,
            encoding,
        }
    }

    /// 字段在帧中占用的字节数
    pub fn width(&self, ctx: &ProtocolContext) -> usize {
        match self.encoding {
            FieldEncoding::Byte(_) | FieldEncoding::Bool(_) | FieldEncoding::Flags(_) => 1,
            FieldEncoding::Word(_) => 2,
            FieldEncoding::Telephone(_) => ctx.tel_num_bytes(),
        }
    }

    /// 编码该字段并追加到输出
    pub fn encode_into(
        &self,
        profile: &FeatureConfig,
        ctx: &ProtocolContext,
        out: &mut Vec<u8>,
    ) -> Result<(), FrameError> {
        let at = |e| FrameError::at_field(self.name, e);
        match self.encoding {
            FieldEncoding::Byte(get) => {
                out.extend_from_slice(&encode_byte(get(profile)).map_err(at)?);
            }
            FieldEncoding::Bool(get) => out.extend_from_slice(&encode_bool(get(profile))),
            FieldEncoding::Word(get) => {
                out.extend_from_slice(&encode_word(get(profile)).map_err(at)?);
            }
            FieldEncoding::Flags(get) => out.extend_from_slice(&get(profile)),
            FieldEncoding::Telephone(get) => {
                let digits = get(profile).unwrap_or_default();
                out.extend(encode_telephone(digits, ctx.tel_num_len()).map_err(at)?);
            }
        }
        Ok(())
    }
}

/// 目录结构错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate field: {0}")]
    DuplicateField(&'static str),

    #[error("field '{0}' breaks section order")]
    SectionOrder(&'static str),

    #[error("field '{field}' has applicability {applicability:?} in section {section:?}")]
    MisplacedField {
        field: &'static str,
        section: Section,
        applicability: Applicability,
    },
}

/// 字段目录
#[derive(Debug, Clone, Copy)]
pub struct FieldCatalog {
    fields: &'static [FieldSpec],
}

impl FieldCatalog {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// 功能配置下载帧的目录
    pub fn feature_config() -> FieldCatalog {
        FieldCatalog::new(FEATURE_CONFIG_FIELDS)
    }

    /// 全部条目（含两代分支）
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// 指定代际下按顺序输出的条目
    pub fn applicable(
        &self,
        generation: Generation,
    ) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields
            .iter()
            .filter(move |spec| spec.applicability.applies_to(generation))
    }

    /// 按名称查找条目
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// 获取指定代际下的字段名列表
    pub fn field_names(&self, generation: Generation) -> Vec<&'static str> {
        self.applicable(generation).map(|spec| spec.name).collect()
    }

    /// 校验目录结构：名称唯一、区段有序、分支字段只在分支区段
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        let mut current = Section::Prefix;
        for spec in self.fields {
            if !seen.insert(spec.name) {
                return Err(CatalogError::DuplicateField(spec.name));
            }
            if spec.section < current {
                return Err(CatalogError::SectionOrder(spec.name));
            }
            current = spec.section;
            let is_common = spec.applicability == Applicability::Common;
            if is_common == spec.section.is_branch() {
                return Err(CatalogError::MisplacedField {
                    field: spec.name,
                    section: spec.section,
                    applicability: spec.applicability,
                });
            }
        }
        Ok(())
    }

    /// 指定代际在某个分支区段中的条目数
    pub fn branch_len(&self, generation: Generation, section: Section) -> usize {
        self.fields
            .iter()
            .filter(|spec| {
                spec.section == section && spec.applicability == Applicability::only(generation)
            })
            .count()
    }
}

fn opt(value: Option<u32>) -> u64 {
    u64::from(value.unwrap_or(0))
}

use FieldEncoding::{Bool, Byte, Flags, Telephone, Word};
use Section::{Branch, BranchTail, Middle, Prefix, Suffix};

/// 功能配置下载帧字段表
#[rustfmt::skip]
pub static FEATURE_CONFIG_FIELDS: &[FieldSpec] = &[
    // 公共前缀
    FieldSpec::common(Prefix, "terminal_type", "Terminal Type", Byte(|c| u64::from(c.terminal_type.code()))),
    FieldSpec::common(Prefix, "display_present", "Display present", Bool(|c| c.display_present)),
    FieldSpec::common(Prefix, "num_call_follow_on", "Number of Call follows", Byte(|c| opt(c.num_call_follow_on))),
    FieldSpec::common(Prefix, "card_validation_info", "Card validation info", Flags(|c| encode_flags(&c.card_validation_info))),
    FieldSpec::common(Prefix, "accs_info", "ACCS-Mode/Info", Flags(|c| encode_flags(&c.accs_info))),
    FieldSpec::common(Prefix, "incoming_call_mode", "Incoming Call mode", Byte(|c| u64::from(c.incoming_call_mode.code()))),
    FieldSpec::common(Prefix, "incoming_call_anti_fraud", "Anti-Fraud for Incoming Call", Flags(|c| encode_flags(&c.incoming_call_anti_fraud))),
    FieldSpec::common(Prefix, "oos_pots_flags", "Out-Of-Service POTS Flags", Flags(|c| encode_flags(&c.oos_pots_flags))),
    FieldSpec::common(Prefix, "data_jack_visual_display", "Datajack visual display", Bool(|c| c.data_jack_visual_display)),
    // MTR 1.x 分支
    FieldSpec::mtr1(Branch, "incoming_call_rate", "Incoming call rate", Byte(|c| u64::from(c.incoming_call_rate))),
    FieldSpec::mtr1(Branch, "spare_b", "Spare B", Byte(|c| opt(c.spare_b))),
    FieldSpec::mtr1(Branch, "spare_c", "Spare C", Byte(|c| opt(c.spare_c))),
    FieldSpec::mtr1(Branch, "spare_d", "Spare D", Byte(|c| opt(c.spare_d))),
    FieldSpec::mtr1(Branch, "spare_e", "Spare E", Byte(|c| opt(c.spare_e))),
    FieldSpec::mtr1(Branch, "spare_f", "Spare F", Byte(|c| opt(c.spare_f))),
    FieldSpec::mtr1(Branch, "aos_number", "AOS number", Telephone(|c| c.aos_number.as_deref())),
    // MTR 2.x 分支
    FieldSpec::mtr2(Branch, "language_scrolling_order", "Language Scrolling Order - 1st language", Byte(|c| u64::from(c.language_scrolling_order.scrolling_code()))),
    FieldSpec::mtr2(Branch, "language_scrolling_order_2", "Language Scrolling Order - 2nd language", Byte(|c| u64::from(c.language_scrolling_order_2.scrolling_code()))),
    FieldSpec::mtr2(Branch, "number_of_languages", "Number of Languages", Byte(|c| u64::from(c.number_of_languages.code()))),
    FieldSpec::mtr2(Branch, "rating_flags", "Rating Flags", Flags(|c| encode_flags(&c.rating_flags))),
    FieldSpec::mtr2(Branch, "dial_around_timer", "Dial-around timer", Byte(|c| opt(c.dial_around_timer))),
    FieldSpec::mtr2(Branch, "opr_interntl_access_ptr", "Pointer to international Access Operator", Byte(|c| opt(c.opr_interntl_access_ptr))),
    FieldSpec::mtr2(Branch, "aos_interlata_access", "Pointer to Inter-LATA AOS-number", Byte(|c| opt(c.aos_interlata_access))),
    FieldSpec::mtr2(Branch, "aos_interntl_access", "Pointer to International Access AOS-number", Byte(|c| opt(c.aos_interntl_access))),
    FieldSpec::mtr2(Branch, "djack_grace_before_collect", "Datajack grace-period before collection", Byte(|c| opt(c.djack_grace_before_collect))),
    FieldSpec::mtr2(Branch, "opr_collection_tmr", "Operator collection timer", Byte(|c| opt(c.opr_collection_tmr))),
    FieldSpec::mtr2(Branch, "opr_intralata_access_ptr", "Pointer to Intra-LATA operator access number", Byte(|c| opt(c.opr_intralata_access_ptr))),
    FieldSpec::mtr2(Branch, "opr_interlata_access_ptr", "Pointer to Inter-LATA operator access number", Byte(|c| opt(c.opr_interlata_access_ptr))),
    // 公共中段
    FieldSpec::common(Middle, "advert_enable", "Enable Advertising", Flags(|c| encode_flags(&c.advert_enable))),
    FieldSpec::common(Middle, "default_language", "Default Language", Byte(|c| u64::from(c.default_language.code()))),
    FieldSpec::common(Middle, "display_called_number", "Called Number Displaying", Flags(|c| encode_flags(&c.display_called_number))),
    FieldSpec::common(Middle, "dtmf_duration", "DTMF Duration", Byte(|c| u64::from(c.dtmf_duration))),
    FieldSpec::common(Middle, "inter_digit_pause", "Inter-digit Pause", Byte(|c| u64::from(c.inter_digit_pause))),
    // 代际分支2
    FieldSpec::mtr1(BranchTail, "dialing_conversion", "Dialing conversion", Flags(|c| encode_flags(&c.dialing_conversion))),
    FieldSpec::mtr2(BranchTail, "ppu_pre_auth_credit_limit", "PPU PreAuth Credit Limit", Byte(|c| u64::from(c.ppu_pre_auth_credit_limit))),
    // 公共后缀
    FieldSpec::common(Suffix, "coin_call_features", "Coin calling Features", Flags(|c| encode_flags(&c.coin_call_features))),
    FieldSpec::common(Suffix, "coin_call_overtime_period", "Coin call overtime period", Word(|c| u64::from(c.coin_call_overtime_period))),
    FieldSpec::common(Suffix, "coin_call_pots_time", "Coin call POTS time", Word(|c| u64::from(c.coin_call_pots_time))),
    FieldSpec::common(Suffix, "min_international_digits", "Minimum number of digits for international calls", Byte(|c| u64::from(c.min_international_digits))),
    FieldSpec::common(Suffix, "def_rate_req_payment", "Default rate request payment type", Byte(|c| u64::from(c.def_rate_req_payment))),
    FieldSpec::common(Suffix, "next_call_revalidation_freq", "Next Call re-validation frequency", Byte(|c| u64::from(c.next_call_revalidation_freq))),
    FieldSpec::common(Suffix, "cutoff_on_disconnect_duration", "Cutoff on disconnect duration", Byte(|c| u64::from(c.cutoff_on_disconnect_duration))),
    FieldSpec::common(Suffix, "cdr_upload_timer_int", "CDR Upload timer for international calls", Word(|c| u64::from(c.cdr_upload_timer_int))),
    FieldSpec::common(Suffix, "cdr_upload_timer_nonint", "CDR Upload timer for non-international calls", Word(|c| u64::from(c.cdr_upload_timer_nonint))),
    FieldSpec::common(Suffix, "perf_stats_dialog_fails", "Number of performance statistics dialog fails", Byte(|c| u64::from(c.perf_stats_dialog_fails))),
    FieldSpec::common(Suffix, "co_line_check_fails", "Number of CO-line-check fails", Byte(|c| u64::from(c.co_line_check_fails))),
    FieldSpec::common(Suffix, "alt_ncc_dialog_fails", "Number of alternative NCC-dialog-check fails", Byte(|c| u64::from(c.alt_ncc_dialog_fails))),
    FieldSpec::common(Suffix, "dialog_fails_till_oos", "Number of failed dialogues until Terminal goes Out-Of-Service", Byte(|c| u64::from(c.dialog_fails_till_oos))),
    FieldSpec::common(Suffix, "dialog_fails_till_alarm", "Number of failed dialogues until alarm is sent", Byte(|c| u64::from(c.dialog_fails_till_alarm))),
    FieldSpec::common(Suffix, "smart_card_flags", "Smartcard Flags", Flags(|c| encode_flags(&c.smart_card_flags))),
    FieldSpec::common(Suffix, "max_man_card_dig", "Maximum number of digits of manual card entry", Byte(|c| u64::from(c.max_man_card_dig))),
    FieldSpec::common(Suffix, "aos_intra_access_ptr", "Pointer to Intra-AOS access-number", Byte(|c| u64::from(c.aos_intra_access_ptr))),
    FieldSpec::common(Suffix, "carrier_reroute_flags", "Carrier reroute-flags", Byte(|c| u64::from(c.carrier_reroute_flags))),
    FieldSpec::common(Suffix, "min_man_card_dig", "Minimum number of digits of manual card entry", Byte(|c| u64::from(c.min_man_card_dig))),
    FieldSpec::common(Suffix, "max_smart_card_inserts", "Maximum number of smartcard-inserts", Byte(|c| u64::from(c.max_smart_card_inserts))),
    FieldSpec::common(Suffix, "max_diff_smart_card_inserts", "Maximum number of different smartcard-inserts", Byte(|c| u64::from(c.max_diff_smart_card_inserts))),
    FieldSpec::common(Suffix, "aos_operator_access_ptr", "Pointer to Operator AOS-number", Byte(|c| u64::from(c.aos_operator_access_ptr))),
    FieldSpec::common(Suffix, "data_jack_flags", "Datajack-flag", Byte(|c| u64::from(c.data_jack_flags))),
    FieldSpec::common(Suffix, "onhook_alarm_delay", "Delay for on-hook card alarm", Word(|c| u64::from(c.onhook_alarm_delay))),
    FieldSpec::common(Suffix, "post_onhook_alarm_delay", "Delay for on-hook card alarm after call", Word(|c| u64::from(c.post_onhook_alarm_delay))),
    FieldSpec::common(Suffix, "card_alarm_duration", "Duration of card-alarm", Word(|c| u64::from(c.card_alarm_duration))),
    FieldSpec::common(Suffix, "alarm_cadence_on_timer", "Card-alarm On-cadence", Word(|c| u64::from(c.alarm_cadence_on_timer))),
    FieldSpec::common(Suffix, "alarm_cadence_off_timer", "Card-alarm Off-cadence", Word(|c| u64::from(c.alarm_cadence_off_timer))),
    FieldSpec::common(Suffix, "cardrdr_blocked_alarm_delay", "Delay until card-reader blocked Alarm", Word(|c| u64::from(c.cardrdr_blocked_alarm_delay))),
    FieldSpec::common(Suffix, "settle_time", "Settlement time", Byte(|c| u64::from(c.settle_time))),
    FieldSpec::common(Suffix, "grace_period_domestic", "Grace period for domestic calls", Byte(|c| u64::from(c.grace_period_domestic))),
    FieldSpec::common(Suffix, "ias_timeout", "IAS timeout", Byte(|c| u64::from(c.ias_timeout))),
    FieldSpec::common(Suffix, "grace_period_international", "Grace period for international calls", Byte(|c| u64::from(c.grace_period_international))),
    FieldSpec::common(Suffix, "settle_time_datajack", "Settlement-time for datajack-calls", Byte(|c| u64::from(c.settle_time_datajack))),
];
