//! 协议上下文
//!
//! 每次帧构建时由调用方提供的只读参数：固件代际以及电话号码编码长度。

use crate::error::FrameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 北美长途电话号码的默认位数
pub const DEFAULT_TEL_NUM_LEN: usize = 10;

/// 终端固件代际（MTR 1.x / MTR 2.x）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Generation {
    One,
    Two,
}

impl Generation {
    /// 代际编号
    pub fn number(self) -> u8 {
        match self {
            Generation::One => 1,
            Generation::Two => 2,
        }
    }
}

impl TryFrom<u8> for Generation {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Generation::One),
            2 => Ok(Generation::Two),
            other => Err(FrameError::UnknownGeneration(other)),
        }
    }
}

impl From<Generation> for u8 {
    fn from(generation: Generation) -> Self {
        generation.number()
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MTR {}.x", self.number())
    }
}

/// 协议上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolContext {
    #[serde(rename = "mtr")]
    generation: Generation,
    #[serde(default = "default_tel_num_len")]
    na_ldist_tel_num_len: usize,
}

fn default_tel_num_len() -> usize {
    DEFAULT_TEL_NUM_LEN
}

impl Default for ProtocolContext {
    fn default() -> Self {
        Self {
            generation: Generation::Two,
            na_ldist_tel_num_len: DEFAULT_TEL_NUM_LEN,
        }
    }
}

impl ProtocolContext {
    /// 创建协议上下文，校验电话号码长度
    pub fn new(generation: Generation, na_ldist_tel_num_len: usize) -> Result<Self, FrameError> {
        let ctx = Self {
            generation,
            na_ldist_tel_num_len,
        };
        ctx.validate()?;
        Ok(ctx)
    }

    /// 从原始代际编号创建，未知代际立即失败
    pub fn from_raw(mtr: u8, na_ldist_tel_num_len: usize) -> Result<Self, FrameError> {
        Self::new(Generation::try_from(mtr)?, na_ldist_tel_num_len)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// 电话号码字段的半字节数
    pub fn tel_num_len(&self) -> usize {
        self.na_ldist_tel_num_len
    }

    /// 电话号码字段占用的字节数
    pub fn tel_num_bytes(&self) -> usize {
        self.na_ldist_tel_num_len.div_ceil(2)
    }

    /// 校验上下文参数
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.na_ldist_tel_num_len == 0 {
            return Err(FrameError::InvalidContext(
                "telephone number length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
