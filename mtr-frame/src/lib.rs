//! MTR 下载帧编码引擎
//!
//! 将类型化的终端配置档案转换为固件消费的定长二进制下载帧

pub mod catalog;
pub mod encoders;
pub mod frame_builder;
pub mod layout;
pub mod options;
pub mod profile;

// 导出主要类型
pub use catalog::{
    Applicability, CatalogError, FieldCatalog, FieldEncoding, FieldSpec, Section, FRAME_OPCODE,
};
pub use frame_builder::{build_frame, BuiltFrame, FrameBuilder};
pub use layout::FieldSlot;
pub use mtr_core::{EncodeError, FrameError, Generation, ProtocolContext};
pub use profile::{FeatureConfig, ProfileError};
