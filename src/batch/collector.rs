//! # 文件收集器
//!
//! 根据输入路径和模式收集待处理文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配（逗号分隔多模式）
//! - 递归目录搜索
//! - 为批量输出分配不冲突的作业名
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/collect.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{GaussReportError, Result};
use crate::utils::files;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<glob::Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器（默认匹配所有文件）
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                glob::Pattern::new(s).map_err(|e| {
                    GaussReportError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件（排序后返回）
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| self.matches_patterns(entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(filename))
    }
}

/// 为文件列表分配作业名（见 [`files::job_name`]）
///
/// 作业名与排在前面的文件重复时记为 `None`，例如同目录下的
/// `job.log` 与 `job.out`。
pub fn assign_job_names(inputs: &[PathBuf], root: &Path) -> HashMap<PathBuf, Option<String>> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|path| {
            let name = files::job_name(path, root);
            let name = if taken.insert(name.clone()) {
                Some(name)
            } else {
                log::warn!(
                    "'{}' maps to job name '{}' already used by another input",
                    path.display(),
                    name
                );
                None
            };
            (path.clone(), name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "gaussreport-collector-{}-{}",
            tag,
            std::process::id()
        ));
        fs::create_dir_all(dir.join("nested")).unwrap();
        for name in ["water.log", "benzene.log", "water.fchk", "nested/ethanol.log"] {
            fs::write(dir.join(name), "").unwrap();
        }
        dir
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_collect_with_pattern() {
        let dir = scratch_dir("flat");
        let files = FileCollector::new(dir.clone())
            .with_pattern("*.log")
            .unwrap()
            .collect();

        assert_eq!(names(&files), vec!["benzene.log", "water.log"]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_collect_recursive_multi_pattern() {
        let dir = scratch_dir("recursive");
        let files = FileCollector::new(dir.clone())
            .with_pattern("*.log, *.fchk")
            .unwrap()
            .recursive(true)
            .collect();

        assert_eq!(files.len(), 4);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_single_file_input() {
        let dir = scratch_dir("single");
        let file = dir.join("water.fchk");
        let files = FileCollector::new(file.clone())
            .with_pattern("*.log")
            .unwrap()
            .collect();

        assert_eq!(files, vec![file]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_assign_job_names_same_stem() {
        let root = Path::new("/runs");
        let inputs: Vec<PathBuf> = [
            "/runs/a/job.log",
            "/runs/b/job.log",
            "/runs/job.log",
            "/runs/job.out",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        let assigned = assign_job_names(&inputs, root);

        assert_eq!(assigned[&inputs[0]].as_deref(), Some("a_job"));
        assert_eq!(assigned[&inputs[1]].as_deref(), Some("b_job"));
        assert_eq!(assigned[&inputs[2]].as_deref(), Some("job"));
        assert_eq!(assigned[&inputs[3]], None);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileCollector::new(PathBuf::from(".")).with_pattern("[*.log");
        assert!(matches!(result, Err(GaussReportError::InvalidArgument(_))));
    }
}
