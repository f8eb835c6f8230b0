//! # 批量处理模块
//!
//! 批量转换引擎：收集输入文件并逐个交给 pandoc。
//!
//! ## 功能
//! - 收集源目录顶层的 Markdown 文件
//! - 顺序执行，首个失败即中止
//! - 进度回调与结果汇总
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `pandoc/` 调用外部转换器

pub mod collector;
pub mod runner;

pub use collector::collect_markdown_files;
pub use runner::{
    convert_batch, convert_batch_with_progress, BatchEvent, BatchResult, BatchStatus,
};
