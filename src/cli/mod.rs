//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: XYZ 坐标 → Gaussian 优化输入文件
//! - `analyze`: 报告分析（嵌套子命令）
//!   - `geom`: 从 .log 提取优化结构
//!   - `fchk`: 从 .fchk 提取能量与 HOMO/LUMO
//!   - `esp`: 解析 Multiwfn 表面分析输出
//! - `collect`: 批量提取优化结构
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, analyze, collect

pub mod analyze;
pub mod collect;
pub mod convert;

use clap::{Parser, Subcommand};

/// gaussreport - Gaussian/Multiwfn 报告解析工具
#[derive(Parser)]
#[command(name = "gaussreport")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Extract structured results from Gaussian and Multiwfn reports", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print parser diagnostics (skipped lines, unmapped elements)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert XYZ coordinate listings into Gaussian optimization inputs (.gjf)
    Convert(convert::ConvertArgs),

    /// Analyze Gaussian logs, formatted checkpoints and Multiwfn reports
    Analyze(analyze::AnalyzeArgs),

    /// Collect optimized geometries from many Gaussian logs
    Collect(collect::CollectArgs),
}
