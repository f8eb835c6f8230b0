//! # 批量执行器
//!
//! 按顺序逐个调用转换器，遇到第一个失败立即中止整个批次。
//!
//! ## 功能
//! - 按需创建目标目录
//! - 收集源目录顶层的 `.md` 文件
//! - 同步调用 pandoc，每次等待子进程结束后再处理下一个
//! - 将所有失败路径汇总为 `BatchResult`，不向外抛出错误
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/collector.rs`, `pandoc/invoke.rs`

use crate::batch::collector::collect_markdown_files;
use crate::error::{Md2DocxError, Result};
use crate::models::job::ConversionJob;
use crate::pandoc::run_pandoc;

use std::fs;
use std::path::Path;

/// 未找到输入文件时的提示
pub const NO_MARKDOWN_FILES: &str = "no Markdown files found";

/// 批次结束状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// 所有文件转换完成
    Completed,
    /// 源目录中没有 Markdown 文件（非致命）
    NoMarkdownFiles,
    /// 出错中止
    Failed,
}

/// 批量转换结果
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub status: BatchStatus,
    /// 面向用户的消息
    pub message: String,
    /// 中止前已成功完成的任务
    pub converted: Vec<ConversionJob>,
}

impl BatchResult {
    pub fn success(&self) -> bool {
        self.status == BatchStatus::Completed
    }

    /// 拆分为 (是否成功, 消息)
    pub fn into_parts(self) -> (bool, String) {
        (self.success(), self.message)
    }
}

/// 进度事件
#[derive(Debug, Clone, Copy)]
pub enum BatchEvent<'a> {
    /// 收集完成，共 `total` 个文件
    Started { total: usize },
    /// 开始转换第 `index` 个文件（从 0 开始）
    Converting { index: usize, job: &'a ConversionJob },
    /// 第 `index` 个文件转换成功
    Converted { index: usize, job: &'a ConversionJob },
}

/// 批量转换 `source_dir` 中的 Markdown 文件到 `dest_dir`
pub fn convert_batch(source_dir: &Path, dest_dir: &Path, converter: &Path) -> BatchResult {
    convert_batch_with_progress(source_dir, dest_dir, converter, |_| {})
}

/// 同 [`convert_batch`]，并在每一步回调 `on_event`
pub fn convert_batch_with_progress<F>(
    source_dir: &Path,
    dest_dir: &Path,
    converter: &Path,
    mut on_event: F,
) -> BatchResult
where
    F: FnMut(BatchEvent<'_>),
{
    let mut converted = Vec::new();

    let outcome = run_batch(source_dir, dest_dir, converter, &mut converted, &mut on_event);

    let (status, message) = match outcome {
        Ok(BatchStatus::NoMarkdownFiles) => {
            (BatchStatus::NoMarkdownFiles, NO_MARKDOWN_FILES.to_string())
        }
        Ok(status) => (
            status,
            format!("Successfully converted {} file(s)", converted.len()),
        ),
        Err(e) => {
            if let Md2DocxError::CommandFailed { command, .. } = &e {
                log::debug!("failed command: {}", command);
            }
            log::debug!("batch aborted after {} file(s): {}", converted.len(), e);
            (BatchStatus::Failed, format!("error during conversion: {}", e))
        }
    };

    BatchResult {
        status,
        message,
        converted,
    }
}

fn run_batch<F>(
    source_dir: &Path,
    dest_dir: &Path,
    converter: &Path,
    converted: &mut Vec<ConversionJob>,
    on_event: &mut F,
) -> Result<BatchStatus>
where
    F: FnMut(BatchEvent<'_>),
{
    // 创建输出目录
    fs::create_dir_all(dest_dir).map_err(|e| Md2DocxError::CreateDirError {
        path: dest_dir.display().to_string(),
        source: e,
    })?;

    let files = collect_markdown_files(source_dir)?;
    if files.is_empty() {
        log::info!("no Markdown files in {}", source_dir.display());
        return Ok(BatchStatus::NoMarkdownFiles);
    }

    on_event(BatchEvent::Started { total: files.len() });

    for (index, input) in files.iter().enumerate() {
        let job = ConversionJob::new(input, dest_dir);
        log::debug!("[{}/{}] {}", index + 1, files.len(), job);
        on_event(BatchEvent::Converting { index, job: &job });

        run_pandoc(converter, &job)?;

        on_event(BatchEvent::Converted { index, job: &job });
        converted.push(job);
    }

    Ok(BatchStatus::Completed)
}
