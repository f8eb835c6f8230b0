//! # 转换任务数据模型
//!
//! 一个转换任务即一对 (输入 Markdown 路径, 输出 docx 路径)，
//! 在批量循环中临时构造，调用转换器后即丢弃。
//!
//! ## 依赖关系
//! - 被 `batch/`, `pandoc/invoke.rs` 使用
//! - 无外部模块依赖

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// 输入文件后缀（区分大小写）
pub const SOURCE_SUFFIX: &str = ".md";

/// 输出文件扩展名
pub const TARGET_EXTENSION: &str = "docx";

/// 单个文件的转换任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// 输入 Markdown 文件
    pub input: PathBuf,
    /// 输出 docx 文件
    pub output: PathBuf,
}

impl ConversionJob {
    /// 根据输入文件和目标目录构造任务
    pub fn new(input: &Path, dest_dir: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            output: dest_dir.join(output_file_name(input)),
        }
    }
}

impl fmt::Display for ConversionJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input.display(), self.output.display())
    }
}

/// 推导输出文件名：仅替换末尾扩展名，保留中间的点
///
/// `report.final.md` -> `report.final.docx`，`.md` -> `.md.docx`。
pub fn output_file_name(input: &Path) -> OsString {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(TARGET_EXTENSION);
    name
}

/// 文件名是否以 `.md` 结尾
///
/// 按原始字节比较，非 UTF-8 文件名同样适用。
pub fn is_markdown_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(SOURCE_SUFFIX.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name_keeps_inner_dots() {
        let name = output_file_name(Path::new("notes/report.final.md"));
        assert_eq!(name, OsString::from("report.final.docx"));
    }

    #[test]
    fn test_output_name_simple() {
        assert_eq!(
            output_file_name(Path::new("readme.md")),
            OsString::from("readme.docx")
        );
    }

    #[test]
    fn test_output_name_dotfile() {
        // 与 splitext 一致：".md" 视为无扩展名
        assert_eq!(
            output_file_name(Path::new(".md")),
            OsString::from(".md.docx")
        );
    }

    #[test]
    fn test_job_places_output_in_dest_dir() {
        let job = ConversionJob::new(Path::new("/src/a.md"), Path::new("/out"));
        assert_eq!(job.input, PathBuf::from("/src/a.md"));
        assert_eq!(job.output, PathBuf::from("/out/a.docx"));
    }

    #[test]
    fn test_markdown_suffix_is_case_sensitive() {
        let is_md = |name: &str| is_markdown_name(OsStr::new(name));
        assert!(is_md("a.md"));
        assert!(is_md("report.final.md"));
        assert!(!is_md("A.MD"));
        assert!(!is_md("a.markdown"));
        assert!(!is_md("a.md.bak"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_markdown_name() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.md");
        assert!(is_markdown_name(name));
        assert_eq!(
            output_file_name(Path::new(name)).as_bytes(),
            b"caf\xe9.docx"
        );
    }

    #[test]
    fn test_display_shows_both_paths() {
        let job = ConversionJob::new(Path::new("a.md"), Path::new("out"));
        assert_eq!(
            job.to_string(),
            format!("a.md -> {}", Path::new("out").join("a.docx").display())
        );
    }
}
