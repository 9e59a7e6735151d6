//! # 文件读写工具
//!
//! 报告文本的读取与结果文件的写出。解析器本身不接触文件系统，
//! 由命令层通过这里读入文本后交给解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `error.rs`

use crate::error::{GaussReportError, Result};
use std::fs;
use std::path::{Component, Path};

/// 读取完整报告文本
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GaussReportError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(path).map_err(|e| GaussReportError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 写出文本文件
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| GaussReportError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 创建输出目录（含父目录）
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| GaussReportError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 以 JSON 格式写出可序列化数据
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_text(path, &json)
}

/// 文件名主干（无扩展名）
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// 相对输入根目录的路径；单文件输入时为文件名
pub fn relative_display(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

/// 作业名：相对路径去掉扩展名，目录分隔符换为 `_`
///
/// `root/a/b/job.log` → `a_b_job`；单文件输入时退化为文件名主干。
pub fn job_name(path: &Path, root: &Path) -> String {
    let relative = match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel,
        _ => return file_stem(path),
    };

    let mut parts: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.push(file_stem(relative));
    parts.join("_")
}
