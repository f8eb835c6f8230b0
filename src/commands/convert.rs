//! # convert 命令实现
//!
//! 批量转换 Markdown 文件为 Word 文档。
//!
//! ## 功能
//! - 解析默认输入/输出目录
//! - 检查输入目录与 pandoc 是否存在
//! - 调用批量引擎，显示进度条与结果表格
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `pandoc/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{convert_batch_with_progress, BatchEvent, BatchStatus};
use crate::cli::convert::ConvertArgs;
use crate::commands::locate::resolve_converter;
use crate::error::{Md2DocxError, Result};
use crate::models::job::ConversionJob;
use crate::pandoc::locate_executable;
use crate::utils::output::{self, Status};
use crate::utils::progress;

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 默认输入目录名（位于可执行文件旁）
const DEFAULT_INPUT_DIR: &str = "input";
/// 默认输出目录名
const DEFAULT_OUTPUT_DIR: &str = "output";

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct ConvertedRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Markdown")]
    input: String,
    #[tabled(rename = "Word")]
    output: String,
}

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Converting Markdown to Word");

    let input = match args.input {
        Some(path) => path,
        None => default_folder(DEFAULT_INPUT_DIR)?,
    };
    let output_dir = match args.output {
        Some(path) => path,
        None => default_folder(DEFAULT_OUTPUT_DIR)?,
    };

    validate_input_dir(&input)?;

    let converter = locate_executable(&resolve_converter(&args.converter))?;

    output::print(Status::Info, &format!("Input:  {}", input.display()));
    output::print(Status::Info, &format!("Output: {}", output_dir.display()));
    output::print(Status::Info, &format!("Pandoc: {}", converter.display()));

    let mut pb: Option<ProgressBar> = None;
    let result = convert_batch_with_progress(&input, &output_dir, &converter, |event| match event {
        BatchEvent::Started { total } => {
            output::print(Status::Info, &format!("Found {} Markdown file(s)", total));
            pb = Some(if args.no_progress {
                ProgressBar::hidden()
            } else {
                progress::create_progress_bar(total as u64, "Converting")
            });
        }
        BatchEvent::Converting { job, .. } => {
            if let Some(pb) = &pb {
                pb.set_message(display_name(&job.input));
            }
        }
        BatchEvent::Converted { .. } => {
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if !result.converted.is_empty() {
        println!("{}", Table::new(converted_rows(&result.converted)));
    }

    match result.status {
        BatchStatus::Completed => {
            output::print(Status::Done, &result.message);
            Ok(())
        }
        BatchStatus::NoMarkdownFiles => {
            output::print(Status::Warning, &format!("{} in {}", result.message, input.display()));
            Ok(())
        }
        BatchStatus::Failed => Err(Md2DocxError::ConversionFailed(result.message)),
    }
}

/// 输入目录必须存在且为目录
fn validate_input_dir(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(Md2DocxError::DirectoryNotFound {
            path: input.display().to_string(),
        });
    }
    if !input.is_dir() {
        return Err(Md2DocxError::NotADirectory {
            path: input.display().to_string(),
        });
    }
    Ok(())
}

/// 可执行文件所在目录下的子目录
fn default_folder(name: &str) -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| {
        Md2DocxError::InvalidArgument(format!("cannot locate executable directory: {}", e))
    })?;
    let dir = exe.parent().ok_or_else(|| {
        Md2DocxError::InvalidArgument(format!(
            "executable '{}' has no parent directory",
            exe.display()
        ))
    })?;
    Ok(dir.join(name))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn converted_rows(jobs: &[ConversionJob]) -> Vec<ConvertedRow> {
    jobs.iter()
        .enumerate()
        .map(|(i, job)| ConvertedRow {
            index: i + 1,
            input: display_name(&job.input),
            output: display_name(&job.output),
        })
        .collect()
}
