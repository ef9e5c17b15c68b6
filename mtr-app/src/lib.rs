//! MTR 下载帧工具
//!
//! `mtr` 命令行程序的可复用部分：TOML 配置、批量构建与输出格式。

pub mod batch;
pub mod config;
pub mod output;

pub use batch::{build_all, build_one, BatchError, FrameOutput};
pub use config::{AppConfig, ConfigError};
pub use output::{render_layout, OutputError, OutputFormat};
