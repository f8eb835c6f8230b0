//! # 终端状态输出
//!
//! 所有面向用户的状态行都带一个彩色标签，如 `[OK] ...`、`[ERR] ...`。
//! 错误写到 stderr，其余写到 stdout。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

const HEADER_WIDTH: usize = 60;

/// 状态行种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Done,
}

impl Status {
    fn tag(self) -> ColoredString {
        match self {
            Status::Success => "[OK]".green().bold(),
            Status::Error => "[ERR]".red().bold(),
            Status::Warning => "[WARN]".yellow().bold(),
            Status::Info => "[*]".blue().bold(),
            Status::Done => "[DONE]".green().bold(),
        }
    }
}

/// 格式化一行状态消息
pub fn status_line(status: Status, msg: &str) -> String {
    format!("{} {}", status.tag(), msg)
}

/// 打印一行状态消息
pub fn print(status: Status, msg: &str) {
    let line = status_line(status, msg);
    match status {
        Status::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let rule = "─".repeat(HEADER_WIDTH).dimmed();
    println!("\n{}\n  {}\n{}\n", rule, title.bold(), rule);
}
