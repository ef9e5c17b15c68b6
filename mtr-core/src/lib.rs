//! MTR Core Library
//!
//! This crate provides the shared types for the payphone download-frame
//! engine: error kinds, the firmware generation selector and the protocol
//! context supplied to every frame build.

pub mod context;
pub mod error;
pub mod utils;

// 导出错误类型
pub use error::{EncodeError, FrameError};

// 导出协议上下文类型
pub use context::{Generation, ProtocolContext};
