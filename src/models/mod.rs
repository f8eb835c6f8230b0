//! # 数据模型模块
//!
//! 定义转换任务数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/`, `pandoc/` 和 `commands/` 使用
//! - 子模块: job

pub mod job;

pub use job::ConversionJob;
