//! # analyze 命令实现
//!
//! 分析功能统一入口，包含多个子命令：
//! - `geom`: 优化结构提取
//! - `fchk`: 电子结构摘要
//! - `esp`: 分子表面分析
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 子模块: geom, fchk, esp

pub mod esp;
pub mod fchk;
pub mod geom;

use crate::cli::analyze::{AnalyzeArgs, AnalyzeCommands};
use crate::error::Result;

/// 执行 analyze 命令
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    match args.command {
        AnalyzeCommands::Geom(geom_args) => geom::execute(geom_args),
        AnalyzeCommands::Fchk(fchk_args) => fchk::execute(fchk_args),
        AnalyzeCommands::Esp(esp_args) => esp::execute(esp_args),
    }
}
