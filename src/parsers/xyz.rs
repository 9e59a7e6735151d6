//! # XYZ 坐标列表解析器
//!
//! 解析分子坐标列表。支持两种形式：带原子数与注释行的标准 XYZ，
//! 以及仅包含原子行的裸坐标列表。
//!
//! ## XYZ 格式说明
//! ```text
//! 3                      # 原子数（可选）
//! water                  # 注释行（仅当存在原子数行时）
//! O  0.000  0.000  0.117
//! H  0.000  0.757 -0.467
//! H  0.000 -0.757 -0.467
//! ```
//!
//! 格式错误的行被静默跳过；只有一个原子都解析不到时才报错。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{GaussReportError, Result};
use crate::models::Atom;

/// XYZ 头部（原子数行 + 注释行）
#[derive(Debug, Clone, PartialEq)]
pub struct XyzHeader {
    /// 头部声明的原子数
    pub declared_count: usize,

    /// 注释行
    pub comment: Option<String>,
}

/// 从字符串内容解析原子序列
pub fn parse_xyz_content(content: &str) -> Result<Vec<Atom>> {
    let lines: Vec<&str> = content.lines().collect();
    let (header, start) = split_header(&lines);

    let atoms: Vec<Atom> = lines
        .iter()
        .enumerate()
        .skip(start)
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(i, line)| {
            let atom = parse_atom_line(line);
            if atom.is_none() {
                log::debug!("xyz: skipping malformed line {}: '{}'", i + 1, line.trim());
            }
            atom
        })
        .collect();

    if atoms.is_empty() {
        return Err(GaussReportError::NoAtomsFound);
    }

    if let Some(header) = header {
        if header.declared_count != atoms.len() {
            log::warn!(
                "xyz: header declares {} atoms but {} were parsed",
                header.declared_count,
                atoms.len()
            );
        }
    }

    Ok(atoms)
}

/// 读取头部；裸坐标列表返回 None
pub fn parse_xyz_header(content: &str) -> Option<XyzHeader> {
    let lines: Vec<&str> = content.lines().collect();
    split_header(&lines).0
}

/// 首个非空行为纯整数时视为原子数，并跳过其后的注释行。
/// 返回头部与原子行起始下标
fn split_header(lines: &[&str]) -> (Option<XyzHeader>, usize) {
    let first = match lines.iter().position(|l| !l.trim().is_empty()) {
        Some(i) => i,
        None => return (None, lines.len()),
    };

    match parse_count_line(lines[first]) {
        Some(declared_count) => {
            let comment = lines
                .get(first + 1)
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .map(str::to_string);
            (
                Some(XyzHeader {
                    declared_count,
                    comment,
                }),
                first + 2,
            )
        }
        None => (None, first),
    }
}

/// 原子数行：仅由 ASCII 数字组成
fn parse_count_line(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        trimmed.parse().ok()
    } else {
        None
    }
}

/// 原子行：符号 + 三个坐标，多余的列被忽略
fn parse_atom_line(line: &str) -> Option<Atom> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return None;
    }

    let x = parts[1].parse::<f64>().ok()?;
    let y = parts[2].parse::<f64>().ok()?;
    let z = parts[3].parse::<f64>().ok()?;

    Some(Atom::new(parts[0], [x, y, z]))
}

/// 将原子序列转换为 XYZ 格式字符串
pub fn to_xyz_string(atoms: &[Atom], comment: &str) -> String {
    let mut result = String::new();
    result.push_str(&format!("{}\n", atoms.len()));
    result.push_str(&format!("{}\n", comment.replace('\n', " ")));

    for atom in atoms {
        result.push_str(&format!(
            "{:<2} {:16.10} {:16.10} {:16.10}\n",
            atom.symbol.to_string(),
            atom.position[0],
            atom.position[1],
            atom.position[2]
        ));
    }

    result
}
