//! 枚举字节字段的取值表

use super::CodedOption;

coded_options! {
    /// 终端类型
    ///
    /// 注意：Coin 与 Maximum 共用代码 0x03，沿用固件目录原样。
    pub enum TerminalType {
        /// Unknown Terminal Type
        Unknown = 0x00,
        /// Card Type Terminal
        Card = 0x01,
        /// Universal Type Terminal
        Universal = 0x02,
        /// Coin Terminal Type
        Coin = 0x03,
        /// Maximum Terminal Type
        Maximum = 0x03,
        /// Smart Card Terminal Type
        SmartCard = 0x10,
    }
}

coded_options! {
    /// 来电处理模式
    pub enum IncomingCallMode {
        /// Ringing disabled
        RingingDisabled = 0,
        /// Ringing / Incoming Voice
        RingingIncomingVoice = 1,
        /// No Ringing / Data Call
        NoRingingDataCall = 2,
        /// Ringing / Voice / Delayed Data Call
        RingingDelayedDataCall = 3,
    }
}

coded_options! {
    /// 终端语言
    ///
    /// `code()` 为默认语言字段使用的从0开始的代码；滚动顺序字段使用
    /// [`Language::scrolling_code`]。
    pub enum Language {
        /// English
        English = 0,
        /// French
        French = 1,
        /// Spanish
        Spanish = 2,
        /// Japanese
        Japanese = 3,
    }
}

impl Language {
    /// 语言滚动顺序字段的代码（从1开始）
    pub fn scrolling_code(self) -> u8 {
        self.code() + 1
    }
}

coded_options! {
    /// 终端支持的语言数量（3、4种仅 MTR 2.x）
    pub enum LanguageCount {
        /// 1 Language
        One = 1,
        /// 2 Languages
        Two = 2,
        /// 3 Languages (MTR 2.x only)
        Three = 3,
        /// 4 Languages (MTR 2.x only)
        Four = 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), 0);
        assert_eq!(Language::English.scrolling_code(), 1);
        assert_eq!(Language::Japanese.code(), 3);
        assert_eq!(Language::Japanese.scrolling_code(), 4);
    }

    #[test]
    fn test_choice_serde_names() {
        let json = serde_json::to_string(&TerminalType::SmartCard).unwrap();
        assert_eq!(json, r#""smart_card""#);
        let mode: IncomingCallMode = serde_json::from_str(r#""no_ringing_data_call""#).unwrap();
        assert_eq!(mode, IncomingCallMode::NoRingingDataCall);
        assert!(serde_json::from_str::<Language>(r#""german""#).is_err());
    }
}
