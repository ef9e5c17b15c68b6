//! 选项表
//!
//! 枚举字节字段与位标志字段的封闭取值集合。每个选项携带固件约定的数值代码。

use std::collections::BTreeMap;

/// 带固定数值代码的选项
pub trait CodedOption: Copy + Eq + 'static {
    /// 按目录顺序排列的全部选项
    const ALL: &'static [Self];

    /// 固件数值代码
    fn code(self) -> u8;
}

/// 定义一个选项枚举及其代码表
macro_rules! coded_options {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $crate::options::CodedOption for $name {
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }
    };
}

pub mod choices;
pub mod flags;

pub use choices::{IncomingCallMode, Language, LanguageCount, TerminalType};
pub use flags::{
    AccsInfo, AdvertFlag, AntiFraud, CalledNumberDisplay, CardValidation, CoinCallFeature,
    DialingConversion, OosPotsFlag, RatingFlag, SmartCardFlag,
};

/// 查找多个选项共用同一数值代码的情况
///
/// 返回 (代码, 共用该代码的选项)，按代码升序。
pub fn aliased_codes<T: CodedOption>() -> Vec<(u8, Vec<T>)> {
    let mut by_code: BTreeMap<u8, Vec<T>> = BTreeMap::new();
    for &option in T::ALL {
        by_code.entry(option.code()).or_default().push(option);
    }
    by_code
        .into_iter()
        .filter(|(_, options)| options.len() > 1)
        .collect()
}

/// 代码为0的标志选项：选中与否都不影响编码结果
pub fn zero_coded<T: CodedOption>() -> Vec<T> {
    T::ALL.iter().copied().filter(|o| o.code() == 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_type_aliases() {
        let aliases = aliased_codes::<TerminalType>();
        assert_eq!(
            aliases,
            vec![(0x03, vec![TerminalType::Coin, TerminalType::Maximum])]
        );
    }

    #[test]
    fn test_card_validation_aliases() {
        let aliases = aliased_codes::<CardValidation>();
        assert_eq!(
            aliases,
            vec![(
                0x08,
                vec![CardValidation::International, CardValidation::InsertNpaLocal]
            )]
        );
        assert_eq!(zero_coded::<CardValidation>(), vec![CardValidation::AccsModeNcc]);
    }

    #[test]
    fn test_anti_fraud_is_zero_coded() {
        assert_eq!(zero_coded::<AntiFraud>(), vec![AntiFraud::AnswerSupervision]);
        assert!(aliased_codes::<AntiFraud>().is_empty());
    }

    #[test]
    fn test_flag_codes_fit_single_bits() {
        // 除已知的0代码外，每个标志代码都是单个位
        fn check<T: CodedOption + std::fmt::Debug>() {
            for &option in T::ALL {
                let code = option.code();
                assert!(
                    code == 0 || code.is_power_of_two(),
                    "{option:?} has multi-bit code {code:#04x}"
                );
            }
        }
        check::<CardValidation>();
        check::<AccsInfo>();
        check::<AntiFraud>();
        check::<OosPotsFlag>();
        check::<RatingFlag>();
        check::<AdvertFlag>();
        check::<CalledNumberDisplay>();
        check::<DialingConversion>();
        check::<CoinCallFeature>();
        check::<SmartCardFlag>();
    }
}
