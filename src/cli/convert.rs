//! # convert 子命令 CLI 定义
//!
//! XYZ 坐标列表 → Gaussian 几何优化输入文件 (.gjf)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input: XYZ file or directory containing XYZ files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for generated input files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Calculation method
    #[arg(long, default_value = "b3lyp")]
    pub method: String,

    /// Basis set
    #[arg(long, default_value = "6-31g(d)")]
    pub basis: String,

    /// Memory for Gaussian (%mem)
    #[arg(long, default_value = "2GB")]
    pub mem: String,

    /// Number of shared-memory processors (%nprocshared)
    #[arg(long, default_value_t = 4)]
    pub nproc: u32,

    /// Molecular charge
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub charge: i32,

    /// Spin multiplicity
    #[arg(long, default_value_t = 1)]
    pub multiplicity: u32,

    /// Title line (default: XYZ comment line, else "Molecular Optimization")
    #[arg(long)]
    pub title: Option<String>,

    /// Glob pattern for input files (directory mode)
    #[arg(short, long, default_value = "*.xyz")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "GAUSSREPORT_JOBS")]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
