//! # convert 命令实现
//!
//! 将 XYZ 坐标列表批量转换为 Gaussian 几何优化输入文件。
//!
//! ## 功能
//! - 单文件或目录输入
//! - 标题默认取 XYZ 注释行
//! - 输出文件名取相对输入目录的路径，重名输入跳过
//! - 支持并行处理
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `parsers/xyz.rs`, `parsers/gjf.rs`
//! - 使用 `batch/`, `utils/`

use crate::batch::{assign_job_names, BatchRunner, FileCollector, ProcessResult};
use crate::cli::convert::ConvertArgs;
use crate::error::{GaussReportError, Result};
use crate::parsers::gjf::{to_gjf_string, JobSettings};
use crate::parsers::xyz::{parse_xyz_content, parse_xyz_header};
use crate::utils::{files, output};

use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "Molecular Optimization";

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Generating Gaussian Optimization Inputs");

    if !args.input.exists() {
        return Err(GaussReportError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    files::ensure_dir(&args.output)?;

    let inputs = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if inputs.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} XYZ file(s) to convert", inputs.len()));
    output::print_info(&format!(
        "Route: # opt {}/{}  (charge {}, multiplicity {})",
        args.method, args.basis, args.charge, args.multiplicity
    ));

    let names = assign_job_names(&inputs, &args.input);
    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} worker thread(s)", runner.jobs()));

    let result = runner.run(inputs, |input| match names.get(input) {
        Some(Some(jobname)) => convert_one(input, jobname, &args),
        _ => ProcessResult::Skipped("output name already used by another input".to_string()),
    })?;

    for (from, to) in &result.outputs {
        output::print_conversion(&from.display().to_string(), &to.display().to_string());
    }
    for (path, reason) in &result.skipped {
        output::print_skip(&format!("{}: {}", path.display(), reason));
    }
    for (path, err) in &result.failures {
        output::print_error(&format!("{}: {}", path.display(), err));
    }

    output::print_done(&format!(
        "Processed {} file(s): wrote {} to '{}' ({} skipped, {} failed)",
        result.total(),
        result.outputs.len(),
        args.output.display(),
        result.skipped.len(),
        result.failures.len()
    ));

    Ok(())
}

/// 转换单个 XYZ 文件
fn convert_one(input: &Path, jobname: &str, args: &ConvertArgs) -> ProcessResult<PathBuf> {
    let output_path = args.output.join(format!("{}.gjf", jobname));

    if output_path.exists() && !args.overwrite {
        return ProcessResult::Skipped(format!("'{}' exists", output_path.display()));
    }

    match write_input_deck(input, &output_path, jobname, args) {
        Ok(()) => ProcessResult::Success(output_path),
        Err(e) => ProcessResult::Failed(e.to_string()),
    }
}

fn write_input_deck(input: &Path, output_path: &Path, jobname: &str, args: &ConvertArgs) -> Result<()> {
    let content = files::read_text(input)?;
    let atoms = parse_xyz_content(&content)?;

    let title = args
        .title
        .clone()
        .or_else(|| parse_xyz_header(&content).and_then(|h| h.comment))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let settings = JobSettings {
        jobname: jobname.to_string(),
        method: args.method.clone(),
        basis: args.basis.clone(),
        mem: args.mem.clone(),
        nproc: args.nproc,
        charge: args.charge,
        multiplicity: args.multiplicity,
        title,
    };

    files::write_text(output_path, &to_gjf_string(&atoms, &settings))
}
