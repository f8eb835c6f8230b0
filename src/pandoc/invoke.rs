//! # Pandoc 调用
//!
//! 以固定参数模板同步调用外部转换器：
//!
//! ```text
//! <pandoc> <input> -f markdown -t docx --standalone -o <output>
//! ```
//!
//! 标准输出与标准错误被捕获，不直接转发给调用方。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `models/job.rs`

use crate::error::{Md2DocxError, Result};
use crate::models::job::{ConversionJob, TARGET_EXTENSION};

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// 输入格式
pub const SOURCE_FORMAT: &str = "markdown";

/// 构造参数列表（不含可执行文件本身）
pub fn build_args(job: &ConversionJob) -> Vec<OsString> {
    vec![
        job.input.clone().into_os_string(),
        "-f".into(),
        SOURCE_FORMAT.into(),
        "-t".into(),
        TARGET_EXTENSION.into(),
        "--standalone".into(),
        "-o".into(),
        job.output.clone().into_os_string(),
    ]
}

/// 运行一次转换，非零退出码返回 `CommandFailed`
pub fn run_pandoc(converter: &Path, job: &ConversionJob) -> Result<()> {
    let args = build_args(job);
    let command_line = format_command_line(converter, &args);
    log::debug!("running: {}", command_line);

    let output = Command::new(converter)
        .args(&args)
        .output()
        .map_err(|e| Md2DocxError::CommandLaunchFailed {
            command: converter.display().to_string(),
            source: e,
        })?;

    if output.status.success() {
        log::trace!("{} exited with {}", converter.display(), output.status);
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
        log::debug!("{} failed with {}: {}", converter.display(), output.status, stderr);
        Err(Md2DocxError::CommandFailed {
            command: command_line,
            stderr,
        })
    }
}

fn format_command_line(converter: &Path, args: &[OsString]) -> String {
    let mut line = converter.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_argument_template() {
        let job = ConversionJob::new(Path::new("in/a.md"), Path::new("out"));
        let args = build_args(&job);
        let expected: Vec<OsString> = [
            "in/a.md",
            "-f",
            "markdown",
            "-t",
            "docx",
            "--standalone",
            "-o",
            PathBuf::from("out").join("a.docx").to_str().unwrap(),
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_missing_executable_is_launch_failure() {
        let job = ConversionJob::new(Path::new("a.md"), Path::new("out"));
        let err = run_pandoc(Path::new("/nonexistent/dir/pandoc"), &job).unwrap_err();
        assert!(matches!(err, Md2DocxError::CommandLaunchFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_captures_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("pandoc");
        std::fs::write(&stub, "#!/bin/sh\necho \"bad input: $1\" >&2\nexit 2\n").unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

        let job = ConversionJob::new(Path::new("a.md"), dir.path());
        match run_pandoc(&stub, &job) {
            Err(Md2DocxError::CommandFailed { stderr, .. }) => {
                assert_eq!(stderr, "bad input: a.md");
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }
}
