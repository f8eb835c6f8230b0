//! # locate 命令实现
//!
//! 显示解析得到的 pandoc 路径以及是否可用。
//!
//! ## 依赖关系
//! - 使用 `cli/locate.rs` 定义的参数
//! - 使用 `pandoc/locator.rs`
//! - `resolve_converter` 同时被 `commands/convert.rs` 使用

use crate::cli::locate::{ConverterOptions, LocateArgs};
use crate::error::Result;
use crate::pandoc::{locate_executable, resolve_converter_path, ExecutionMode, HostOs};
use crate::utils::output::{self, Status};

use std::path::PathBuf;

/// 执行 locate 命令
pub fn execute(args: LocateArgs) -> Result<()> {
    output::print_header("Locating pandoc");

    let mode = ExecutionMode::from_bundle_root(args.converter.bundle_root.clone());
    let mode_line = match (&args.converter.pandoc, &mode) {
        (Some(_), _) => "explicit --pandoc override".to_string(),
        (None, ExecutionMode::Source) => "source (system pandoc)".to_string(),
        (None, ExecutionMode::Packaged { extraction_root }) => format!(
            "packaged (extraction root '{}')",
            extraction_root.display()
        ),
    };
    output::print(Status::Info, &format!("Mode: {}", mode_line));

    let resolved = resolve_converter(&args.converter);
    output::print(Status::Info, &format!("Resolved: {}", resolved.display()));

    let found = locate_executable(&resolved)?;
    output::print(Status::Success, &format!("pandoc found at '{}'", found.display()));
    Ok(())
}

/// 得到转换器路径：显式指定优先，否则按运行模式解析
pub fn resolve_converter(options: &ConverterOptions) -> PathBuf {
    if let Some(path) = &options.pandoc {
        return path.clone();
    }
    let mode = ExecutionMode::from_bundle_root(options.bundle_root.clone());
    resolve_converter_path(&mode, HostOs::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let options = ConverterOptions {
            pandoc: Some(PathBuf::from("/custom/pandoc")),
            bundle_root: Some(PathBuf::from("/bundle")),
        };
        assert_eq!(resolve_converter(&options), PathBuf::from("/custom/pandoc"));
    }

    #[test]
    fn test_default_is_bare_command() {
        assert_eq!(
            resolve_converter(&ConverterOptions::default()),
            PathBuf::from("pandoc")
        );
    }

    #[test]
    fn test_bundle_root_is_used() {
        let options = ConverterOptions {
            pandoc: None,
            bundle_root: Some(PathBuf::from("/bundle")),
        };
        let path = resolve_converter(&options);
        assert!(path.starts_with("/bundle/pandoc/bin"));
    }
}
