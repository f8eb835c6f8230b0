//! # Pandoc 模块
//!
//! 外部转换器的定位与调用。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 使用
//! - 子模块: locator, invoke

pub mod invoke;
pub mod locator;

pub use invoke::run_pandoc;
pub use locator::{locate_executable, resolve_converter_path, ExecutionMode, HostOs};
