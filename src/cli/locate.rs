//! # locate 子命令 CLI 定义
//!
//! 显示将要使用的 pandoc 路径
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `ConverterOptions` 同时被 `cli/convert.rs` 使用
//! - 参数传递给 `commands/locate.rs`

use clap::Args;
use std::path::PathBuf;

/// 转换器定位选项
#[derive(Args, Debug, Clone, Default)]
pub struct ConverterOptions {
    /// Use this pandoc executable instead of resolving one
    #[arg(long, env = "MD2DOCX_PANDOC")]
    pub pandoc: Option<PathBuf>,

    /// Extraction root of a packaged deployment (bundled pandoc under pandoc/bin/)
    #[arg(long, env = "MD2DOCX_BUNDLE_ROOT")]
    pub bundle_root: Option<PathBuf>,
}

/// locate 子命令参数
#[derive(Args, Debug)]
pub struct LocateArgs {
    #[command(flatten)]
    pub converter: ConverterOptions,
}
