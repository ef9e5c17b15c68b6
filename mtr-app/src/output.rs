//! 输出格式

use clap::ValueEnum;
use mtr_core::utils::bytes_to_hex;
use mtr_frame::FieldSlot;
use std::fmt::Write;
use thiserror::Error;

/// 输出错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    #[error("raw output of {0} frames to stdout cannot be split, use --output <dir>")]
    RawToStdout(usize),
}

/// 帧输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// 连续大写十六进制
    #[default]
    Hex,
    /// 以空格分隔的十六进制
    Spaced,
    /// 原始字节
    Raw,
}

impl OutputFormat {
    /// 渲染帧字节
    pub fn render(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            OutputFormat::Hex => hex::encode_upper(bytes).into_bytes(),
            OutputFormat::Spaced => bytes_to_hex(bytes).into_bytes(),
            OutputFormat::Raw => bytes.to_vec(),
        }
    }

    /// 输出文件扩展名
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Hex | OutputFormat::Spaced => "hex",
            OutputFormat::Raw => "bin",
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, OutputFormat::Raw)
    }

    /// 检查能否将指定数量的帧写到标准输出
    ///
    /// 原始字节没有分隔符，多于一帧时必须写入目录。
    pub fn check_stdout(self, frames: usize) -> Result<(), OutputError> {
        if !self.is_text() && frames > 1 {
            return Err(OutputError::RawToStdout(frames));
        }
        Ok(())
    }
}

/// 渲染偏移表
pub fn render_layout(slots: &[FieldSlot]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} {:>5}  {:<10} {:<10} {}",
        "OFFSET", "WIDTH", "SECTION", "KIND", "FIELD"
    );
    for slot in slots {
        let _ = writeln!(
            out,
            "{:>6} {:>5}  {:<10} {:<10} {}",
            slot.offset,
            slot.width,
            format!("{:?}", slot.section),
            slot.kind,
            slot.name
        );
    }
    out
}
