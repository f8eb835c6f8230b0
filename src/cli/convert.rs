//! # convert 子命令 CLI 定义
//!
//! 批量转换 Markdown 文件为 Word 文档 (.md -> .docx)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use super::locate::ConverterOptions;
use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input directory containing Markdown files [default: <exe dir>/input]
    #[arg(short, long, env = "MD2DOCX_INPUT")]
    pub input: Option<PathBuf>,

    /// Output directory for Word documents [default: <exe dir>/output]
    #[arg(short, long, env = "MD2DOCX_OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub converter: ConverterOptions,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
