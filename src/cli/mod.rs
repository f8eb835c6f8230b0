//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 批量转换 Markdown 为 docx
//! - `locate`: 显示 pandoc 路径
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, locate

pub mod convert;
pub mod locate;

use clap::{ArgAction, Parser, Subcommand};

/// md2docx - Markdown 批量转 Word 工具
#[derive(Parser)]
#[command(name = "md2docx")]
#[command(version)]
#[command(about = "Batch-convert Markdown files to Word documents with pandoc", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert every top-level .md file of a folder to .docx
    Convert(convert::ConvertArgs),

    /// Show which pandoc executable would be used
    Locate(locate::LocateArgs),
}
