//! 应用配置
//!
//! 从 TOML 文件加载，命令行参数可覆盖协议段。

use mtr_core::{FrameError, Generation, ProtocolContext};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 所有帧共用的协议上下文
    #[serde(default)]
    pub protocol: ProtocolContext,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            protocol: ProtocolContext::default(),
        }
    }
}

impl AppConfig {
    /// 从 TOML 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// 解析 TOML 文本
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 输出为 TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }
        self.protocol.validate()?;
        Ok(())
    }

    /// 应用命令行覆盖后的协议上下文
    pub fn protocol_with(
        &self,
        mtr: Option<u8>,
        tel_len: Option<usize>,
    ) -> Result<ProtocolContext, ConfigError> {
        let generation = match mtr {
            Some(raw) => Generation::try_from(raw)?,
            None => self.protocol.generation(),
        };
        let tel_len = tel_len.unwrap_or(self.protocol.tel_num_len());
        Ok(ProtocolContext::new(generation, tel_len)?)
    }
}
