//! 下载帧构建器
//!
//! 按目录顺序遍历字段，依代际选择分支字段，将各字段编码结果依次拼接。
//! 构建是确定性的：要么完整成功，要么在第一个无效字段处失败且不返回部分帧。

use crate::catalog::{CatalogError, FieldCatalog, FRAME_OPCODE};
use crate::profile::FeatureConfig;
use mtr_core::{FrameError, ProtocolContext};
use std::ops::Range;
use tracing::{debug, trace};

/// 构建结果及每个字段在帧中的字节范围
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltFrame {
    pub bytes: Vec<u8>,
    pub fields: Vec<(&'static str, Range<usize>)>,
}

impl BuiltFrame {
    /// 获取字段的编码字节
    pub fn field_bytes(&self, name: &str) -> Option<&[u8]> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, range)| &self.bytes[range.clone()])
    }
}

/// 下载帧构建器
#[derive(Debug, Clone, Copy)]
pub struct FrameBuilder {
    catalog: FieldCatalog,
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self {
            catalog: FieldCatalog::feature_config(),
        }
    }
}

impl FrameBuilder {
    /// 使用自定义目录创建构建器，目录结构无效时拒绝
    pub fn new(catalog: FieldCatalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// 构建下载帧
    pub fn build(
        &self,
        profile: &FeatureConfig,
        ctx: &ProtocolContext,
    ) -> Result<Vec<u8>, FrameError> {
        ctx.validate()?;

        let mut frame = Vec::with_capacity(self.catalog.frame_len(ctx));
        frame.push(FRAME_OPCODE);
        for spec in self.catalog.applicable(ctx.generation()) {
            spec.encode_into(profile, ctx, &mut frame)?;
            trace!(field = spec.name, end = frame.len(), "field encoded");
        }

        debug!(
            profile = %profile.name,
            generation = %ctx.generation(),
            len = frame.len(),
            "download frame built"
        );
        Ok(frame)
    }

    /// 构建下载帧并记录每个字段的字节范围
    pub fn build_fields(
        &self,
        profile: &FeatureConfig,
        ctx: &ProtocolContext,
    ) -> Result<BuiltFrame, FrameError> {
        ctx.validate()?;

        let mut bytes = vec![FRAME_OPCODE];
        let mut fields = Vec::new();
        for spec in self.catalog.applicable(ctx.generation()) {
            let start = bytes.len();
            spec.encode_into(profile, ctx, &mut bytes)?;
            fields.push((spec.name, start..bytes.len()));
        }
        Ok(BuiltFrame { bytes, fields })
    }
}

/// 使用功能配置目录构建下载帧
pub fn build_frame(
    profile: &FeatureConfig,
    ctx: &ProtocolContext,
) -> Result<Vec<u8>, FrameError> {
    FrameBuilder::default().build(profile, ctx)
}

impl FeatureConfig {
    /// 生成该档案的下载帧
    pub fn frame(&self, ctx: &ProtocolContext) -> Result<Vec<u8>, FrameError> {
        build_frame(self, ctx)
    }
}
