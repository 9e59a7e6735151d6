//! # collect 命令实现
//!
//! 批量扫描 Gaussian 日志，提取优化结构并汇总。
//!
//! ## 功能
//! - 并行解析目录下所有日志
//! - 区分 "已收敛"、"未得到结构" (异常结束/未收敛/缺少坐标表) 与 "解析失败"
//! - 生成终端表格和 CSV 汇总
//! - 可选为收敛结构写出 XYZ 文件（文件名取相对日志目录的路径，重名不覆盖）
//!
//! ## 依赖关系
//! - 使用 `cli/collect.rs` 定义的参数
//! - 使用 `parsers/gaussian_log.rs`, `parsers/xyz.rs`
//! - 使用 `batch/`, `utils/`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::collect::CollectArgs;
use crate::error::{GaussReportError, Result};
use crate::models::structure::formula;
use crate::models::Atom;
use crate::parsers::xyz::to_xyz_string;
use crate::parsers::{extract_optimized_structure_with, OptimizedGeometry, OrientationBlock};
use crate::utils::{files, output};

use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 单个日志的提取结果
#[derive(Debug, Clone)]
struct LogOutcome {
    /// 相对日志目录的路径
    file: String,
    /// 导出文件用的作业名
    name: String,
    geometry: OptimizedGeometry,
}

/// CSV 汇总行
#[derive(Debug, Clone, Serialize, Tabled)]
struct SummaryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Atoms")]
    atoms: usize,
    #[tabled(rename = "Formula")]
    formula: String,
}

impl From<&LogOutcome> for SummaryRow {
    fn from(outcome: &LogOutcome) -> Self {
        match &outcome.geometry {
            OptimizedGeometry::Found(atoms) => SummaryRow {
                file: outcome.file.clone(),
                status: "converged".to_string(),
                atoms: atoms.len(),
                formula: formula(atoms),
            },
            OptimizedGeometry::NoResult(reason) => SummaryRow {
                file: outcome.file.clone(),
                status: reason.to_string(),
                atoms: 0,
                formula: String::new(),
            },
        }
    }
}

/// 执行 collect 命令
pub fn execute(args: CollectArgs) -> Result<()> {
    output::print_header("Collecting Optimized Geometries");

    if !args.log_dir.is_dir() {
        return Err(GaussReportError::DirectoryNotFound {
            path: args.log_dir.display().to_string(),
        });
    }

    let logs = FileCollector::new(args.log_dir.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if logs.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.log_dir.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Scanning {} log file(s)...", logs.len()));

    let orientation: OrientationBlock = args.orientation.into();
    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} worker thread(s)", runner.jobs()));
    let result = runner.run(logs, |path| process_log(path, &args.log_dir, orientation))?;
    let total = result.total();

    let outcomes: Vec<LogOutcome> = result.outputs.into_iter().map(|(_, o)| o).collect();
    let rows: Vec<SummaryRow> = outcomes.iter().map(SummaryRow::from).collect();
    let converged = outcomes
        .iter()
        .filter(|o| matches!(o.geometry, OptimizedGeometry::Found(_)))
        .count();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    for (path, err) in result.failures.iter().take(10) {
        output::print_error(&format!("{}: {}", path.display(), err));
    }
    if result.failures.len() > 10 {
        output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
    }

    save_summary_csv(&rows, &args.output)?;
    output::print_success(&format!("Summary saved to '{}'", args.output.display()));

    if let Some(ref dir) = args.xyz_dir {
        let export = write_xyz_files(&outcomes, dir)?;
        for file in &export.duplicates {
            output::print_skip(&format!("{}: XYZ name already used by another log", file));
        }
        output::print_success(&format!(
            "Wrote {} XYZ file(s) to '{}'",
            export.written,
            dir.display()
        ));
    }

    output::print_separator();
    output::print_done(&format!(
        "{} log(s): {} converged, {} without result, {} failed",
        total,
        converged,
        outcomes.len() - converged,
        result.failures.len()
    ));

    Ok(())
}

/// 处理单个日志文件
fn process_log(path: &Path, root: &Path, orientation: OrientationBlock) -> ProcessResult<LogOutcome> {
    let content = match files::read_text(path) {
        Ok(c) => c,
        Err(e) => return ProcessResult::Failed(e.to_string()),
    };

    match extract_optimized_structure_with(&content, orientation) {
        Ok(geometry) => ProcessResult::Success(LogOutcome {
            file: files::relative_display(path, root),
            name: files::job_name(path, root),
            geometry,
        }),
        Err(e) => ProcessResult::Failed(e.to_string()),
    }
}

/// 保存汇总 CSV
fn save_summary_csv(rows: &[SummaryRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| GaussReportError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// XYZ 导出统计
#[derive(Debug, Default)]
struct XyzExport {
    written: usize,
    /// 作业名与先前日志重复而未写出的文件
    duplicates: Vec<String>,
}

/// 为收敛结构写出 XYZ 文件
fn write_xyz_files(outcomes: &[LogOutcome], dir: &Path) -> Result<XyzExport> {
    files::ensure_dir(dir)?;

    let mut export = XyzExport::default();
    let mut taken = HashSet::new();
    for outcome in outcomes {
        let Some(atoms) = outcome.geometry.atoms() else {
            continue;
        };
        if !taken.insert(outcome.name.as_str()) {
            export.duplicates.push(outcome.file.clone());
            continue;
        }
        let path: PathBuf = dir.join(format!("{}.xyz", outcome.name));
        files::write_text(&path, &xyz_for(&outcome.name, atoms))?;
        export.written += 1;
    }

    Ok(export)
}

fn xyz_for(name: &str, atoms: &[Atom]) -> String {
    to_xyz_string(atoms, &format!("{} optimized geometry", name))
}
