//! # analyze 子命令 CLI 定义
//!
//! 分析功能统一入口，包含多个子命令：
//! - `geom`: Gaussian .log 优化结构提取
//! - `fchk`: .fchk 电子结构摘要
//! - `esp`: Multiwfn 定量分子表面分析
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze/` 相应模块

use crate::parsers::OrientationBlock;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// Analyze 主命令
// ─────────────────────────────────────────────────────────────

/// analyze 主命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    pub command: AnalyzeCommands,
}

/// analyze 子命令
#[derive(Subcommand, Debug)]
pub enum AnalyzeCommands {
    /// Extract the optimized geometry from a Gaussian log
    Geom(GeomArgs),

    /// Extract total energy and HOMO/LUMO from a formatted checkpoint
    Fchk(FchkArgs),

    /// Parse a Multiwfn quantitative molecular surface analysis report
    Esp(EspArgs),
}

// ─────────────────────────────────────────────────────────────
// 优化结构子命令
// ─────────────────────────────────────────────────────────────

/// 坐标表类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Orientation {
    /// "Standard orientation:" block
    #[default]
    Standard,
    /// "Input orientation:" block (nosymm jobs)
    Input,
}

impl From<Orientation> for OrientationBlock {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Standard => OrientationBlock::Standard,
            Orientation::Input => OrientationBlock::Input,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Standard => write!(f, "standard"),
            Orientation::Input => write!(f, "input"),
        }
    }
}

/// geom 子命令参数
#[derive(Args, Debug)]
pub struct GeomArgs {
    /// Gaussian log file
    pub log: PathBuf,

    /// Orientation block to read the geometry from
    #[arg(long, value_enum, default_value = "standard")]
    pub orientation: Orientation,

    /// Write the optimized geometry to this XYZ file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ─────────────────────────────────────────────────────────────
// fchk 子命令
// ─────────────────────────────────────────────────────────────

/// fchk 子命令参数
#[derive(Args, Debug)]
pub struct FchkArgs {
    /// Formatted checkpoint file (.fchk)
    pub fchk: PathBuf,

    /// Number of orbitals to list on each side of the HOMO/LUMO gap
    #[arg(long, default_value_t = 3)]
    pub window: usize,

    /// Write the summary as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

// ─────────────────────────────────────────────────────────────
// esp 子命令
// ─────────────────────────────────────────────────────────────

/// esp 子命令参数
#[derive(Args, Debug)]
pub struct EspArgs {
    /// Multiwfn output captured from the surface analysis run
    pub report: PathBuf,

    /// Write the parsed result as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}
