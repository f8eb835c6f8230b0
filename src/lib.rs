//! # md2docx
//!
//! 批量将 Markdown 转换为 Word 文档的核心库。
//!
//! 对外的两个核心操作：
//! - [`pandoc::resolve_converter_path`] 解析 pandoc 路径
//! - [`batch::convert_batch`] 顺序转换一个目录中的所有 `.md` 文件
//!
//! ```no_run
//! use md2docx::batch::convert_batch;
//! use md2docx::pandoc::{resolve_converter_path, ExecutionMode, HostOs};
//! use std::path::Path;
//!
//! let pandoc = resolve_converter_path(&ExecutionMode::Source, HostOs::current());
//! let (ok, message) = convert_batch(Path::new("input"), Path::new("output"), &pandoc).into_parts();
//! println!("{} {}", ok, message);
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod pandoc;
pub mod utils;
