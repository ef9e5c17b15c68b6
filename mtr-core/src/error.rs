//! 帧编码错误定义

use thiserror::Error;

/// 基本编码器错误
///
/// 由单个字段的编码函数返回，不携带字段名；帧构建器负责补充字段上下文。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// 数值超出编码宽度
    #[error("value {value} out of range (max {max})")]
    ValueOutOfRange { value: u64, max: u64 },
    /// 电话号码中出现非数字字符
    #[error("invalid digit string {digits:?}: non-digit at position {position}")]
    InvalidDigitString { digits: String, position: usize },
}

/// 帧构建错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// 某个目录字段编码失败
    #[error("field '{field}': {source}")]
    Field {
        field: &'static str,
        #[source]
        source: EncodeError,
    },
    /// 未知的固件代际
    #[error("unknown MTR generation: {0}")]
    UnknownGeneration(u8),
    /// 协议上下文参数无效
    #[error("invalid protocol context: {0}")]
    InvalidContext(String),
}

impl FrameError {
    /// 将基本编码错误绑定到字段名
    pub fn at_field(field: &'static str, source: EncodeError) -> Self {
        FrameError::Field { field, source }
    }

    /// 出错字段名（仅字段级错误有）
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FrameError::Field { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn is_value_out_of_range(&self) -> bool {
        matches!(
            self,
            FrameError::Field {
                source: EncodeError::ValueOutOfRange { .. },
                ..
            }
        )
    }

    pub fn is_invalid_digit_string(&self) -> bool {
        matches!(
            self,
            FrameError::Field {
                source: EncodeError::InvalidDigitString { .. },
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FrameError::at_field(
            "dtmf_duration",
            EncodeError::ValueOutOfRange { value: 256, max: 255 },
        );
        assert_eq!(
            err.to_string(),
            "field 'dtmf_duration': value 256 out of range (max 255)"
        );
        assert_eq!(err.field(), Some("dtmf_duration"));
        assert!(err.is_value_out_of_range());
        assert!(!err.is_invalid_digit_string());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = FrameError::at_field(
            "aos_number",
            EncodeError::InvalidDigitString {
                digits: "12a4".to_string(),
                position: 2,
            },
        );
        let source = err.source().expect("field errors carry a source");
        assert!(source.to_string().contains("position 2"));
        assert!(err.is_invalid_digit_string());
    }

    #[test]
    fn test_generation_error_has_no_field() {
        let err = FrameError::UnknownGeneration(3);
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "unknown MTR generation: 3");
    }
}
