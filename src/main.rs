//! # gaussreport - Gaussian/Multiwfn 报告解析工具
//!
//! 从量子化学计算流程产生的文本报告中提取结构化数值结果。
//!
//! ## 子命令
//! - `convert` - XYZ 坐标 → Gaussian 优化输入文件 (.gjf)
//! - `analyze` - 报告分析
//!   - `geom` - 从 .log 提取优化后结构
//!   - `fchk` - 从 .fchk 提取总能量与 HOMO/LUMO
//!   - `esp`  - 解析 Multiwfn 定量分子表面分析输出
//! - `collect` - 批量提取优化结构并汇总
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (报告解析器，纯文本 → 结构化数据)
//!   │     ├── models/    (数据模型)
//!   │     └── batch/     (批量并行处理)
//!   ├── utils/      (输出、日志、文件读写)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::output::init_logger(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
