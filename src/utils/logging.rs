//! # 日志初始化
//!
//! 使用 `log` + `env_logger`。终端状态信息走 `utils/output.rs`，
//! 日志只记录调试细节（pandoc 命令行、退出码等）。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use log::LevelFilter;

/// 根据 `-v` 次数选择日志级别
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// 初始化日志；`RUST_LOG` 优先于 `-v`
pub fn init(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbose));
    builder.parse_env("RUST_LOG");
    builder.format_timestamp(None);
    // 重复初始化时忽略
    builder.try_init().ok();
}
