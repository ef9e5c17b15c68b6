//! 基本编码器
//!
//! 将单个类型化的值转换为固件约定的字节表示。所有函数都是纯函数；
//! 超出宽度的数值返回错误而不是截断。

use crate::options::CodedOption;
use mtr_core::utils::{pack_nibbles, FILLER_NIBBLE};
use mtr_core::EncodeError;

/// 单字节字段的最大值
pub const BYTE_MAX: u64 = u8::MAX as u64;

/// 双字节字段的最大值
pub const WORD_MAX: u64 = u16::MAX as u64;

/// 单字节编码
pub fn encode_byte(value: u64) -> Result<[u8; 1], EncodeError> {
    u8::try_from(value)
        .map(|v| [v])
        .map_err(|_| EncodeError::ValueOutOfRange {
            value,
            max: BYTE_MAX,
        })
}

/// 布尔值编码为 0x01 / 0x00
pub fn encode_bool(value: bool) -> [u8; 1] {
    [u8::from(value)]
}

/// 双字节编码，大端序（高字节在前）
pub fn encode_word(value: u64) -> Result<[u8; 2], EncodeError> {
    u16::try_from(value)
        .map(u16::to_be_bytes)
        .map_err(|_| EncodeError::ValueOutOfRange {
            value,
            max: WORD_MAX,
        })
}

/// 位标志编码：所选选项代码按位或
///
/// 空选择编码为 0x00；重复选择不影响结果。
pub fn encode_flags<T: CodedOption>(selected: &[T]) -> [u8; 1] {
    [selected.iter().fold(0u8, |acc, option| acc | option.code())]
}

/// 电话号码编码
///
/// 输出固定 `target_len` 个半字节（两个一字节，高位在前），共
/// `ceil(target_len / 2)` 字节。号码过长时从头截取，过短时以 0xF 填充。
pub fn encode_telephone(digits: &str, target_len: usize) -> Result<Vec<u8>, EncodeError> {
    let mut nibbles = Vec::with_capacity(target_len);
    for (position, ch) in digits.chars().enumerate() {
        let digit = ch.to_digit(10).ok_or_else(|| EncodeError::InvalidDigitString {
            digits: digits.to_string(),
            position,
        })?;
        if nibbles.len() < target_len {
            nibbles.push(digit as u8);
        }
    }
    nibbles.resize(target_len, FILLER_NIBBLE);
    Ok(pack_nibbles(&nibbles))
}
