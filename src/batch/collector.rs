//! # 文件收集器
//!
//! 收集源目录顶层中以 `.md` 结尾的文件（不递归，区分大小写）。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{Md2DocxError, Result};
use crate::models::job::is_markdown_name;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 收集 `source_dir` 顶层的 Markdown 文件，按路径排序
///
/// 源目录本身无法读取时返回错误；单个条目读取失败仅记录警告并跳过。
pub fn collect_markdown_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(Md2DocxError::DirectoryReadError {
                    path: source_dir.display().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if is_markdown_name(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
