//! # collect 子命令 CLI 定义
//!
//! 批量扫描 Gaussian 日志并提取优化结构
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/collect.rs`

use super::analyze::Orientation;
use clap::Args;
use std::path::PathBuf;

/// collect 子命令参数
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Directory containing Gaussian log files
    pub log_dir: PathBuf,

    /// Glob pattern for log files (comma separated)
    #[arg(short, long, default_value = "*.log,*.out")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Orientation block to read geometries from
    #[arg(long, value_enum, default_value = "standard")]
    pub orientation: Orientation,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "GAUSSREPORT_JOBS")]
    pub jobs: usize,

    /// Filename for the CSV summary
    #[arg(long, default_value = "optimized_geometries.csv")]
    pub output: PathBuf,

    /// Directory to write XYZ files of converged geometries
    #[arg(long)]
    pub xyz_dir: Option<PathBuf>,
}
