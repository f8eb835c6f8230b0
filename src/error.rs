//! # 统一错误处理模块
//!
//! 定义 md2docx 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// md2docx 统一错误类型
#[derive(Error, Debug)]
pub enum Md2DocxError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDirError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory '{path}': {reason}")]
    DirectoryReadError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Pandoc not found: {path}")]
    ConverterNotFound { path: String },

    #[error("Failed to launch '{command}': {source}")]
    CommandLaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("pandoc error: {stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    ConversionFailed(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Md2DocxError>;
