//! # Pandoc 路径定位
//!
//! 决定外部转换器可执行文件的路径：
//! - 打包部署：`<解压根目录>/pandoc/bin/pandoc`，Windows 下追加 `.exe`
//! - 源码运行：裸命令名 `pandoc`，交给进程启动时的 PATH 搜索
//!
//! 运行模式与操作系统都作为参数传入，不读取全局状态。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/locate.rs` 使用
//! - 使用 `which` 在 PATH 中查找裸命令

use crate::error::{Md2DocxError, Result};

use std::path::{Path, PathBuf};

/// 转换器命令名
pub const PANDOC_COMMAND: &str = "pandoc";

/// 运行模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// 从源码 / 系统安装运行
    Source,
    /// 打包部署，转换器解压在 `extraction_root` 下
    Packaged { extraction_root: PathBuf },
}

impl ExecutionMode {
    /// 由 `--bundle-root` (或 `MD2DOCX_BUNDLE_ROOT`) 构造
    pub fn from_bundle_root(root: Option<PathBuf>) -> Self {
        match root {
            Some(extraction_root) => ExecutionMode::Packaged { extraction_root },
            None => ExecutionMode::Source,
        }
    }
}

/// 宿主操作系统
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Other,
}

impl HostOs {
    /// 编译目标的操作系统
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Other
        }
    }
}

/// 解析转换器路径（不检查是否存在）
pub fn resolve_converter_path(mode: &ExecutionMode, os: HostOs) -> PathBuf {
    match mode {
        ExecutionMode::Source => PathBuf::from(PANDOC_COMMAND),
        ExecutionMode::Packaged { extraction_root } => {
            let file_name = match os {
                HostOs::Windows => format!("{}.exe", PANDOC_COMMAND),
                HostOs::Other => PANDOC_COMMAND.to_string(),
            };
            extraction_root.join("pandoc").join("bin").join(file_name)
        }
    }
}

/// 确认转换器存在，返回实际可执行文件路径
///
/// 含目录分量的路径必须是已存在的文件；裸命令名在 PATH 中查找。
pub fn locate_executable(path: &Path) -> Result<PathBuf> {
    if path.components().count() > 1 {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(Md2DocxError::ConverterNotFound {
            path: path.display().to_string(),
        });
    }

    which::which(path).map_err(|e| {
        log::debug!("PATH lookup for '{}' failed: {}", path.display(), e);
        Md2DocxError::ConverterNotFound {
            path: path.display().to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_mode_returns_bare_command() {
        let path = resolve_converter_path(&ExecutionMode::Source, HostOs::Other);
        assert_eq!(path, PathBuf::from("pandoc"));
        assert_eq!(path.components().count(), 1);

        // Windows 下源码模式同样不加后缀
        let path = resolve_converter_path(&ExecutionMode::Source, HostOs::Windows);
        assert_eq!(path, PathBuf::from("pandoc"));
    }

    #[test]
    fn test_packaged_mode_unix() {
        let mode = ExecutionMode::Packaged {
            extraction_root: PathBuf::from("/tmp/_MEI1234"),
        };
        let path = resolve_converter_path(&mode, HostOs::Other);
        assert_eq!(
            path,
            PathBuf::from("/tmp/_MEI1234").join("pandoc").join("bin").join("pandoc")
        );
    }

    #[test]
    fn test_packaged_mode_windows_appends_exe() {
        let mode = ExecutionMode::Packaged {
            extraction_root: PathBuf::from("bundle"),
        };
        let path = resolve_converter_path(&mode, HostOs::Windows);
        assert_eq!(
            path,
            PathBuf::from("bundle").join("pandoc").join("bin").join("pandoc.exe")
        );
        assert!(path.starts_with("bundle"));
    }

    #[test]
    fn test_mode_from_bundle_root() {
        assert_eq!(ExecutionMode::from_bundle_root(None), ExecutionMode::Source);
        assert_eq!(
            ExecutionMode::from_bundle_root(Some(PathBuf::from("/opt/app"))),
            ExecutionMode::Packaged {
                extraction_root: PathBuf::from("/opt/app")
            }
        );
    }

    #[test]
    fn test_locate_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("pandoc");
        std::fs::write(&exe, "").unwrap();

        assert_eq!(locate_executable(&exe).unwrap(), exe);
    }

    #[test]
    fn test_locate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("pandoc").join("bin").join("pandoc");

        let err = locate_executable(&exe).unwrap_err();
        assert!(matches!(err, Md2DocxError::ConverterNotFound { .. }));
    }

    #[test]
    fn test_locate_unknown_bare_command() {
        let err = locate_executable(Path::new("md2docx-no-such-converter-xyz")).unwrap_err();
        assert!(matches!(err, Md2DocxError::ConverterNotFound { .. }));
    }
}
