//! # md2docx - Markdown 批量转 Word 工具
//!
//! 调用外部 pandoc，将一个目录顶层的所有 `.md` 文件转换为 `.docx`。
//!
//! ## 子命令
//! - `convert` - 批量转换 (.md -> .docx)
//! - `locate`  - 显示将使用的 pandoc 路径
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   └── lib.rs
//!         ├── cli/        (命令行参数定义)
//!         ├── commands/   (命令执行逻辑)
//!         │     ├── batch/   (批量转换引擎)
//!         │     ├── pandoc/  (pandoc 定位与调用)
//!         │     └── models/  (转换任务)
//!         ├── utils/      (输出、进度条、日志)
//!         └── error.rs    (错误处理)
//! ```

use clap::Parser;
use md2docx::cli::Cli;
use md2docx::utils::output::Status;
use md2docx::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print(Status::Error, &format!("{}", e));
        std::process::exit(1);
    }
}
