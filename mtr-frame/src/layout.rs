//! 帧布局
//!
//! 字段偏移随代际分支和电话号码长度变化，因此偏移表总是从目录推导。

use crate::catalog::{FieldCatalog, Section};
use mtr_core::ProtocolContext;
use serde::Serialize;

/// 帧中一个字段的位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSlot {
    pub name: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: &'static str,
    pub offset: usize,
    pub width: usize,
}

impl FieldSlot {
    /// 字段结束位置（不含）
    pub fn end(&self) -> usize {
        self.offset + self.width
    }
}

impl FieldCatalog {
    /// 计算指定上下文下的偏移表，从操作码之后的偏移 1 开始
    pub fn layout(&self, ctx: &ProtocolContext) -> Vec<FieldSlot> {
        let mut offset = 1;
        self.applicable(ctx.generation())
            .map(|spec| {
                let width = spec.width(ctx);
                let slot = FieldSlot {
                    name: spec.name,
                    label: spec.label,
                    section: spec.section,
                    kind: spec.encoding.kind(),
                    offset,
                    width,
                };
                offset += width;
                slot
            })
            .collect()
    }

    /// 帧总长度（含操作码）
    pub fn frame_len(&self, ctx: &ProtocolContext) -> usize {
        1 + self
            .applicable(ctx.generation())
            .map(|spec| spec.width(ctx))
            .sum::<usize>()
    }

    /// 获取字段偏移
    pub fn offset_of(&self, name: &str, ctx: &ProtocolContext) -> Option<usize> {
        self.layout(ctx)
            .into_iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtr_core::Generation;

    #[test]
    fn test_frame_len_by_generation() {
        let catalog = FieldCatalog::feature_config();
        let gen1 = ProtocolContext::new(Generation::One, 10).unwrap();
        let gen2 = ProtocolContext::new(Generation::Two, 10).unwrap();

        // 1 + 9 + (6 + 5) + 5 + 1 + 44
        assert_eq!(catalog.frame_len(&gen1), 71);
        // 1 + 9 + 12 + 5 + 1 + 44
        assert_eq!(catalog.frame_len(&gen2), 72);
    }

    #[test]
    fn test_tel_len_shifts_later_offsets() {
        let catalog = FieldCatalog::feature_config();
        let short = ProtocolContext::new(Generation::One, 10).unwrap();
        let long = ProtocolContext::new(Generation::One, 12).unwrap();

        assert_eq!(catalog.offset_of("aos_number", &short), Some(16));
        assert_eq!(catalog.offset_of("aos_number", &long), Some(16));
        assert_eq!(catalog.offset_of("advert_enable", &short), Some(21));
        assert_eq!(catalog.offset_of("advert_enable", &long), Some(22));
    }

    #[test]
    fn test_layout_is_contiguous() {
        let catalog = FieldCatalog::feature_config();
        for generation in [Generation::One, Generation::Two] {
            let ctx = ProtocolContext::new(generation, 11).unwrap();
            let layout = catalog.layout(&ctx);
            assert_eq!(layout[0].offset, 1);
            for pair in layout.windows(2) {
                assert_eq!(pair[0].end(), pair[1].offset);
            }
            assert_eq!(layout.last().unwrap().end(), catalog.frame_len(&ctx));
        }
    }

    #[test]
    fn test_common_offsets() {
        let catalog = FieldCatalog::feature_config();
        let gen2 = ProtocolContext::new(Generation::Two, 10).unwrap();
        assert_eq!(catalog.offset_of("terminal_type", &gen2), Some(1));
        assert_eq!(catalog.offset_of("data_jack_visual_display", &gen2), Some(9));
        assert_eq!(catalog.offset_of("language_scrolling_order", &gen2), Some(10));
        assert_eq!(catalog.offset_of("ppu_pre_auth_credit_limit", &gen2), Some(27));
        assert_eq!(catalog.offset_of("settle_time_datajack", &gen2), Some(71));
        assert_eq!(catalog.offset_of("aos_number", &gen2), None);
    }
}
