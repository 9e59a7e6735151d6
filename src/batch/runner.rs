//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果保持输入文件顺序
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/collect.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{GaussReportError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 跳过（如输出已存在）
    Skipped(String),
    /// 处理失败
    Failed(String),
}

/// 批量处理结果汇总
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功的文件及其输出
    pub outputs: Vec<(PathBuf, T)>,
    /// 跳过的文件及原因
    pub skipped: Vec<(PathBuf, String)>,
    /// 失败的文件及错误信息
    pub failures: Vec<(PathBuf, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        BatchResult {
            outputs: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并处理结果
    pub fn merge(&mut self, path: PathBuf, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(output) => self.outputs.push((path, output)),
            ProcessResult::Skipped(reason) => self.skipped.push((path, reason)),
            ProcessResult::Failed(err) => self.failures.push((path, err)),
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.outputs.len() + self.skipped.len() + self.failures.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 自动检测 CPU 数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表
    pub fn run<T, F>(&self, files: Vec<PathBuf>, processor: F) -> Result<BatchResult<T>>
    where
        T: Send,
        F: Fn(&PathBuf) -> ProcessResult<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Processing");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| GaussReportError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for (file, result) in files.into_iter().zip(results) {
            batch_result.merge(file, result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_preserves_order_and_counts() {
        let files: Vec<PathBuf> = (0..20).map(|i| PathBuf::from(format!("{}.log", i))).collect();
        let runner = BatchRunner::new(4);

        let result = runner
            .run(files, |path| {
                let stem: usize = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0);
                match stem % 5 {
                    0 => ProcessResult::Failed("broken".to_string()),
                    1 => ProcessResult::Skipped("exists".to_string()),
                    _ => ProcessResult::Success(stem * 10),
                }
            })
            .unwrap();

        assert_eq!(result.total(), 20);
        assert_eq!(result.failures.len(), 4);
        assert_eq!(result.skipped.len(), 4);
        assert_eq!(result.outputs.len(), 12);

        let values: Vec<usize> = result.outputs.iter().map(|(_, v)| *v).collect();
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(values, sorted);
        assert_eq!(result.outputs[0], (PathBuf::from("2.log"), 20));
    }

    #[test]
    fn test_zero_jobs_means_auto() {
        assert!(BatchRunner::new(0).jobs() >= 1);
    }
}
