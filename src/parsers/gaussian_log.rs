//! # Gaussian .log 输出解析器
//!
//! 从 Gaussian 几何优化日志中提取最终优化结构。
//!
//! ## 定位规则
//! 1. 日志必须包含 `Normal termination`，否则视为计算未正常结束
//! 2. 日志必须包含 `Optimization completed.`，否则视为优化未收敛
//! 3. 从第一个 `Optimization completed.` 所在行开始，向后寻找第一个
//!    `Standard orientation:` 表头
//! 4. 表头后第 5 行开始为坐标表，直到 `-------` 分隔线
//!
//! ```text
//!                          Standard orientation:
//!  ---------------------------------------------------------------------
//!  Center     Atomic      Atomic             Coordinates (Angstroms)
//!  Number     Number       Type             X           Y           Z
//!  ---------------------------------------------------------------------
//!       1          8           0        0.000000    0.000000    0.119262
//!  ---------------------------------------------------------------------
//! ```
//!
//! 前置条件不满足时返回 [`OptimizedGeometry::NoResult`] 而非错误，
//! 以区分 "优化未成功" 与 "坐标表格式错误"。
//!
//! ## 依赖关系
//! - 被 `commands/analyze/geom.rs`, `commands/collect.rs` 使用
//! - 使用 `models/structure.rs`, `models/element.rs`

use crate::error::{GaussReportError, Result};
use crate::models::Atom;

/// 正常结束标志
pub const NORMAL_TERMINATION: &str = "Normal termination";

/// 优化收敛标志
pub const OPTIMIZATION_COMPLETED: &str = "Optimization completed.";

/// 坐标表结束分隔线
const BLOCK_SEPARATOR: &str = "-------";

/// 表头到第一条原子记录的行偏移
const RECORD_OFFSET: usize = 5;

/// 坐标表类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrientationBlock {
    /// 标准取向 (Gaussian 默认输出)
    #[default]
    Standard,
    /// 输入取向 (使用 nosymm 时唯一的坐标表)
    Input,
}

impl OrientationBlock {
    /// 表头标志字符串
    pub fn header(&self) -> &'static str {
        match self {
            OrientationBlock::Standard => "Standard orientation:",
            OrientationBlock::Input => "Input orientation:",
        }
    }
}

/// 未得到优化结构的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoResultReason {
    /// 缺少正常结束标志
    AbnormalTermination,
    /// 缺少优化收敛标志
    NotConverged,
    /// 收敛标志之后没有坐标表
    MissingOrientationBlock,
    /// 坐标表中没有原子记录
    EmptyOrientationBlock,
}

impl std::fmt::Display for NoResultReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoResultReason::AbnormalTermination => write!(f, "abnormal termination"),
            NoResultReason::NotConverged => write!(f, "optimization not converged"),
            NoResultReason::MissingOrientationBlock => write!(f, "no orientation block"),
            NoResultReason::EmptyOrientationBlock => write!(f, "empty orientation block"),
        }
    }
}

/// 优化结构提取结果
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizedGeometry {
    /// 收敛后的原子序列
    Found(Vec<Atom>),
    /// 前置条件不满足
    NoResult(NoResultReason),
}

impl OptimizedGeometry {
    pub fn atoms(&self) -> Option<&[Atom]> {
        match self {
            OptimizedGeometry::Found(atoms) => Some(atoms),
            OptimizedGeometry::NoResult(_) => None,
        }
    }
}

/// 使用标准取向坐标表提取优化结构
pub fn extract_optimized_structure(log_content: &str) -> Result<OptimizedGeometry> {
    extract_optimized_structure_with(log_content, OrientationBlock::Standard)
}

/// 使用指定坐标表类型提取优化结构
pub fn extract_optimized_structure_with(
    log_content: &str,
    orientation: OrientationBlock,
) -> Result<OptimizedGeometry> {
    if !log_content.contains(NORMAL_TERMINATION) {
        return Ok(OptimizedGeometry::NoResult(
            NoResultReason::AbnormalTermination,
        ));
    }
    if !log_content.contains(OPTIMIZATION_COMPLETED) {
        return Ok(OptimizedGeometry::NoResult(NoResultReason::NotConverged));
    }

    let lines: Vec<&str> = log_content.lines().collect();

    // 第一个收敛标志，再向后找第一个坐标表头
    let converged_at = match lines.iter().position(|l| l.contains(OPTIMIZATION_COMPLETED)) {
        Some(i) => i,
        None => return Ok(OptimizedGeometry::NoResult(NoResultReason::NotConverged)),
    };
    let header_at = match lines[converged_at..]
        .iter()
        .position(|l| l.contains(orientation.header()))
    {
        Some(offset) => converged_at + offset,
        None => {
            return Ok(OptimizedGeometry::NoResult(
                NoResultReason::MissingOrientationBlock,
            ))
        }
    };

    let atoms = parse_orientation_records(&lines, header_at + RECORD_OFFSET)?;
    if atoms.is_empty() {
        return Ok(OptimizedGeometry::NoResult(
            NoResultReason::EmptyOrientationBlock,
        ));
    }

    Ok(OptimizedGeometry::Found(atoms))
}

/// 从 `start` 行开始读取坐标记录，直到分隔线
fn parse_orientation_records(lines: &[&str], start: usize) -> Result<Vec<Atom>> {
    let mut atoms = Vec::new();

    for (i, line) in lines.iter().enumerate().skip(start) {
        if line.contains(BLOCK_SEPARATOR) {
            return Ok(atoms);
        }
        atoms.push(parse_record(line, i + 1)?);
    }

    Err(GaussReportError::parse(
        "gaussian log",
        format!(
            "orientation block starting at line {} is not terminated by a separator",
            start + 1
        ),
    ))
}

/// 解析单条记录: [序号, 原子序数, 原子类型, x, y, z]
fn parse_record(line: &str, line_no: usize) -> Result<Atom> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 6 {
        return Err(GaussReportError::parse(
            "gaussian log",
            format!(
                "expected 6 columns in orientation record at line {}, found {}",
                line_no,
                parts.len()
            ),
        ));
    }

    let atomic_number: u32 = parts[1].parse().map_err(|_| {
        GaussReportError::parse(
            "gaussian log",
            format!("invalid atomic number '{}' at line {}", parts[1], line_no),
        )
    })?;

    let n = parts.len();
    let mut position = [0.0; 3];
    for (k, token) in parts[n - 3..].iter().enumerate() {
        position[k] = token.parse().map_err(|_| {
            GaussReportError::parse(
                "gaussian log",
                format!("invalid coordinate '{}' at line {}", token, line_no),
            )
        })?;
    }

    let atom = Atom::from_atomic_number(atomic_number, position);
    if !atom.symbol.is_mapped() {
        log::warn!(
            "gaussian log: atomic number {} at line {} is outside the element table",
            atomic_number,
            line_no
        );
    }

    Ok(atom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::structure::AtomSymbol;

    const ORIENTATION_HEADER: &str = r#"                         Standard orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
"#;

    const SEPARATOR: &str =
        " ---------------------------------------------------------------------\n";

    fn water_block(z_oxygen: f64) -> String {
        format!(
            "{}      1          8           0        0.000000    0.000000    {:.6}\n      2          1           0        0.000000    0.757000   -0.467000\n      3          1           0        0.000000   -0.757000   -0.467000\n{}",
            ORIENTATION_HEADER, z_oxygen, SEPARATOR
        )
    }

    fn optimization_log() -> String {
        let mut log = String::new();
        log.push_str(" Entering Gaussian System, Link 0=g16\n");
        log.push_str(&water_block(0.200000));
        log.push_str(" Converged? NO\n");
        log.push_str("    -- Stationary point found.\n");
        log.push_str(" Optimization completed.\n");
        log.push_str(&water_block(0.119262));
        log.push_str(" Normal termination of Gaussian 16 at Mon Oct 19 10:00:00 2026.\n");
        log
    }

    #[test]
    fn test_extract_converged_geometry() {
        let geometry = extract_optimized_structure(&optimization_log()).unwrap();
        let atoms = geometry.atoms().unwrap();

        assert_eq!(atoms.len(), 3);
        assert_eq!(atoms[0].symbol, AtomSymbol::Element("O".to_string()));
        assert_eq!(atoms[1].symbol, AtomSymbol::Element("H".to_string()));
        assert!((atoms[0].position[2] - 0.119262).abs() < 1e-9);
        assert!((atoms[2].position[1] - (-0.757)).abs() < 1e-9);
    }

    #[test]
    fn test_missing_normal_termination() {
        let log = optimization_log().replace(NORMAL_TERMINATION, "Error termination");
        assert_eq!(
            extract_optimized_structure(&log).unwrap(),
            OptimizedGeometry::NoResult(NoResultReason::AbnormalTermination)
        );
    }

    #[test]
    fn test_missing_normal_termination_wins_over_everything() {
        let log = format!("{}{}", OPTIMIZATION_COMPLETED, water_block(0.1));
        assert_eq!(
            extract_optimized_structure(&log).unwrap(),
            OptimizedGeometry::NoResult(NoResultReason::AbnormalTermination)
        );
    }

    #[test]
    fn test_not_converged() {
        let log = optimization_log().replace(OPTIMIZATION_COMPLETED, "Optimization stopped.");
        assert_eq!(
            extract_optimized_structure(&log).unwrap(),
            OptimizedGeometry::NoResult(NoResultReason::NotConverged)
        );
    }

    #[test]
    fn test_missing_orientation_after_convergence() {
        let log = format!(
            "{} Optimization completed.\n Normal termination of Gaussian 16\n",
            water_block(0.1)
        );
        assert_eq!(
            extract_optimized_structure(&log).unwrap(),
            OptimizedGeometry::NoResult(NoResultReason::MissingOrientationBlock)
        );
    }

    #[test]
    fn test_empty_orientation_block() {
        let log = format!(
            " Optimization completed.\n{}{} Normal termination\n",
            ORIENTATION_HEADER, SEPARATOR
        );
        assert_eq!(
            extract_optimized_structure(&log).unwrap(),
            OptimizedGeometry::NoResult(NoResultReason::EmptyOrientationBlock)
        );
    }

    #[test]
    fn test_first_block_after_first_convergence() {
        // 两段优化：仍取第一个收敛标志之后的第一个坐标表
        let mut log = String::new();
        log.push_str(" Optimization completed.\n");
        log.push_str(&water_block(0.111111));
        log.push_str(" Optimization completed.\n");
        log.push_str(&water_block(0.222222));
        log.push_str(" Normal termination\n");

        let geometry = extract_optimized_structure(&log).unwrap();
        let atoms = geometry.atoms().unwrap();
        assert!((atoms[0].position[2] - 0.111111).abs() < 1e-9);
    }

    #[test]
    fn test_unmapped_atomic_number() {
        let log = format!(
            " Optimization completed.\n{}      1         26           0        0.000000    0.000000    0.000000\n{} Normal termination\n",
            ORIENTATION_HEADER, SEPARATOR
        );
        let geometry = extract_optimized_structure(&log).unwrap();
        let atoms = geometry.atoms().unwrap();
        assert_eq!(atoms[0].symbol, AtomSymbol::Unmapped(26));
    }

    #[test]
    fn test_malformed_record_is_error() {
        let log = format!(
            " Optimization completed.\n{}      1          8           0        0.000000    abc    0.000000\n{} Normal termination\n",
            ORIENTATION_HEADER, SEPARATOR
        );
        assert!(matches!(
            extract_optimized_structure(&log),
            Err(GaussReportError::ParseError { .. })
        ));
    }

    #[test]
    fn test_unterminated_block_is_error() {
        let log = format!(
            " Normal termination\n Optimization completed.\n{}      1          8           0        0.000000    0.000000    0.000000\n",
            ORIENTATION_HEADER
        );
        assert!(extract_optimized_structure(&log).is_err());
    }

    #[test]
    fn test_input_orientation() {
        let log = optimization_log().replace("Standard orientation:", "Input orientation:");
        assert_eq!(
            extract_optimized_structure(&log).unwrap(),
            OptimizedGeometry::NoResult(NoResultReason::MissingOrientationBlock)
        );

        let geometry = extract_optimized_structure_with(&log, OrientationBlock::Input).unwrap();
        assert_eq!(geometry.atoms().map(|a| a.len()), Some(3));
    }

    #[test]
    fn test_idempotent() {
        let log = optimization_log();
        assert_eq!(
            extract_optimized_structure(&log).unwrap(),
            extract_optimized_structure(&log).unwrap()
        );
    }
}
