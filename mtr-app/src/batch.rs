//! 批量构建
//!
//! 每个档案文件作为独立的阻塞任务在 tokio 运行时上构建，结果按输入顺序返回。

use mtr_core::{FrameError, ProtocolContext};
use mtr_frame::{FeatureConfig, ProfileError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info};

/// 批量构建错误
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("profile {}: {source}", path.display())]
    Profile {
        path: PathBuf,
        #[source]
        source: ProfileError,
    },

    #[error("profile {}: {source}", path.display())]
    Frame {
        path: PathBuf,
        #[source]
        source: FrameError,
    },

    #[error("build task failed: {0}")]
    Join(#[from] JoinError),
}

/// 单个档案的构建结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutput {
    pub path: PathBuf,
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FrameOutput {
    /// 输出文件名主干，取自档案文件名
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// 加载并构建单个档案
pub fn build_one(path: &Path, ctx: &ProtocolContext) -> Result<FrameOutput, BatchError> {
    let profile = FeatureConfig::from_file(path).map_err(|source| BatchError::Profile {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = profile.frame(ctx).map_err(|source| BatchError::Frame {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), len = bytes.len(), "profile built");
    Ok(FrameOutput {
        path: path.to_path_buf(),
        name: profile.name,
        bytes,
    })
}

/// 并发构建所有档案
///
/// 结果与输入顺序一致；若有失败，返回输入顺序中第一个失败。
pub async fn build_all(
    paths: Vec<PathBuf>,
    ctx: ProtocolContext,
) -> Result<Vec<FrameOutput>, BatchError> {
    let total = paths.len();
    let mut set = JoinSet::new();
    for (index, path) in paths.into_iter().enumerate() {
        set.spawn_blocking(move || (index, build_one(&path, &ctx)));
    }

    let mut slots: Vec<Option<FrameOutput>> = vec![None; total];
    let mut first_error: Option<(usize, BatchError)> = None;
    while let Some(joined) = set.join_next().await {
        let (index, result) = joined?;
        match result {
            Ok(output) => slots[index] = Some(output),
            Err(err) => {
                if first_error.as_ref().map_or(true, |(first, _)| index < *first) {
                    first_error = Some((index, err));
                }
            }
        }
    }

    if let Some((_, err)) = first_error {
        return Err(err);
    }

    info!(count = total, generation = %ctx.generation(), "frames built");
    Ok(slots.into_iter().flatten().collect())
}
