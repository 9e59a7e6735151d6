//! # Gaussian .fchk 格式化检查点文件解析器
//!
//! 提取总能量、电子数和 Alpha 轨道能量，并推导 HOMO/LUMO。
//!
//! ## fchk 格式片段
//! ```text
//! Total Energy                               R     -7.601225458431584E+01
//! Number of electrons                        I               10
//! Alpha Orbital Energies                     R   N=          24
//!  -2.05502089E+01 -1.33618340E+00 -6.98612645E-01 -5.66227098E-01 -4.93208521E-01
//!   1.85312446E-01  2.56091233E-01 ...
//! ```
//!
//! 轨道能量每行 5 个，共 ceil(N/5) 行。
//!
//! 本阶段只在计算成功后调用，因此采用严格策略：
//! 缺失段落或数值格式错误都直接返回错误。
//!
//! ## 依赖关系
//! - 被 `commands/analyze/fchk.rs` 使用
//! - 使用 `models/electronic.rs`

use crate::error::{GaussReportError, Result};
use crate::models::ElectronicStructureSummary;

const FORMAT: &str = "fchk";

const TOTAL_ENERGY: &str = "Total Energy";
const ELECTRON_COUNT: &str = "Number of electrons";
const ORBITAL_ENERGIES: &str = "Alpha Orbital Energies";

/// 每行记录的数值个数
const VALUES_PER_LINE: usize = 5;

/// 从字符串内容解析电子结构摘要
pub fn parse_fchk_content(content: &str) -> Result<ElectronicStructureSummary> {
    let lines: Vec<&str> = content.lines().collect();

    let mut total_energy: Option<f64> = None;
    let mut electron_count: Option<usize> = None;
    let mut orbital_header: Option<(usize, usize)> = None;

    for (i, line) in lines.iter().enumerate() {
        if line.contains(TOTAL_ENERGY) {
            total_energy = Some(last_token(line, i)?);
        }
        if line.contains(ELECTRON_COUNT) {
            electron_count = Some(last_token(line, i)?);
        } else if line.contains(ORBITAL_ENERGIES) {
            orbital_header = Some((i, last_token(line, i)?));
            break;
        }
    }

    let (header_at, count) =
        orbital_header.ok_or_else(|| GaussReportError::missing(FORMAT, ORBITAL_ENERGIES))?;
    let electron_count =
        electron_count.ok_or_else(|| GaussReportError::missing(FORMAT, ELECTRON_COUNT))?;

    let orbital_energies = read_real_array(&lines, header_at + 1, count)?;

    ElectronicStructureSummary::new(total_energy, electron_count, orbital_energies)
}

/// 读取 `count` 个实数，占据 ceil(count/5) 行
fn read_real_array(lines: &[&str], start: usize, count: usize) -> Result<Vec<f64>> {
    let record_lines = count.div_ceil(VALUES_PER_LINE);
    let end = start + record_lines;

    if end > lines.len() {
        return Err(GaussReportError::parse(
            FORMAT,
            format!(
                "'{}' needs {} record lines but only {} remain",
                ORBITAL_ENERGIES,
                record_lines,
                lines.len().saturating_sub(start)
            ),
        ));
    }

    let mut values = Vec::with_capacity(count);
    for (i, line) in lines[start..end].iter().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| {
                GaussReportError::parse(
                    FORMAT,
                    format!("invalid real '{}' at line {}", token, start + i + 1),
                )
            })?;
            values.push(value);
        }
    }

    if values.len() != count {
        return Err(GaussReportError::parse(
            FORMAT,
            format!(
                "'{}' declares {} values but {} were read",
                ORBITAL_ENERGIES,
                count,
                values.len()
            ),
        ));
    }

    Ok(values)
}

/// 解析行末的数值
fn last_token<T: std::str::FromStr>(line: &str, index: usize) -> Result<T> {
    let token = line.split_whitespace().last().unwrap_or_default();
    token.parse().map_err(|_| {
        GaussReportError::parse(
            FORMAT,
            format!("invalid value '{}' at line {}", token, index + 1),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER_FCHK: &str = r#"water
SP        RB3LYP                                                      6-31G(d)
Number of atoms                            I                3
Charge                                     I                0
Multiplicity                               I                1
Number of electrons                        I               10
Number of alpha electrons                  I                5
Number of beta electrons                   I                5
Number of basis functions                  I               12
SCF Energy                                 R     -7.640895361578328E+01
Total Energy                               R     -7.640895361578328E+01
Alpha Orbital Energies                     R   N=          12
 -1.91449476E+01 -1.00167845E+00 -5.21463862E-01 -3.73604466E-01 -2.92581773E-01
  6.93213454E-02  1.56284137E-01  8.21862034E-01  8.59372466E-01  9.05016588E-01
  9.79361283E-01  1.11728473E+00
Alpha MO coefficients                      R   N=         144
"#;

    #[test]
    fn test_parse_water_fchk() {
        let summary = parse_fchk_content(WATER_FCHK).unwrap();

        assert!((summary.total_energy.unwrap() - (-76.40895361578328)).abs() < 1e-10);
        assert_eq!(summary.electron_count(), 10);
        assert_eq!(summary.orbital_energies().len(), 12);
        assert!((summary.homo() - (-2.92581773E-01)).abs() < 1e-12);
        assert!((summary.lumo() - 6.93213454E-02).abs() < 1e-12);
        assert_eq!(summary.homo(), summary.orbital_energies()[4]);
        assert_eq!(summary.lumo(), summary.orbital_energies()[5]);
    }

    #[test]
    fn test_exact_multiple_of_five() {
        let content = r#"Number of electrons                        I                2
Alpha Orbital Energies                     R   N=           5
 -5.00000000E-01  1.00000000E-01  2.00000000E-01  3.00000000E-01  4.00000000E-01
Alpha MO coefficients                      R   N=          25
"#;
        let summary = parse_fchk_content(content).unwrap();
        assert_eq!(summary.orbital_energies().len(), 5);
        assert_eq!(summary.total_energy, None);
        assert!((summary.homo() - (-0.5)).abs() < 1e-12);
        assert!((summary.lumo() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_missing_orbital_section() {
        let content = "Number of electrons                        I               10\n";
        assert!(matches!(
            parse_fchk_content(content),
            Err(GaussReportError::MissingSection { .. })
        ));
    }

    #[test]
    fn test_missing_electron_count() {
        let content = "Alpha Orbital Energies                     R   N=           2\n -1.0 1.0\n";
        assert!(matches!(
            parse_fchk_content(content),
            Err(GaussReportError::MissingSection { .. })
        ));
    }

    #[test]
    fn test_malformed_orbital_value() {
        let content = WATER_FCHK.replace("-3.73604466E-01", "-3.7360x466E-01");
        assert!(matches!(
            parse_fchk_content(&content),
            Err(GaussReportError::ParseError { .. })
        ));
    }

    #[test]
    fn test_truncated_records() {
        let content = r#"Number of electrons                        I                2
Alpha Orbital Energies                     R   N=          12
 -1.0 -0.5 0.1 0.2 0.3
"#;
        assert!(matches!(
            parse_fchk_content(content),
            Err(GaussReportError::ParseError { .. })
        ));
    }

    #[test]
    fn test_odd_electron_count() {
        let content = WATER_FCHK.replace(
            "Number of electrons                        I               10",
            "Number of electrons                        I                9",
        );
        assert!(matches!(
            parse_fchk_content(&content),
            Err(GaussReportError::OpenShell { electrons: 9 })
        ));
    }

    #[test]
    fn test_malformed_total_energy() {
        let content = WATER_FCHK.replace(
            "Total Energy                               R     -7.640895361578328E+01",
            "Total Energy                               R     -7.6408953x1578328E+01",
        );
        assert!(matches!(
            parse_fchk_content(&content),
            Err(GaussReportError::ParseError { .. })
        ));
    }

    #[test]
    fn test_malformed_electron_count() {
        let content = WATER_FCHK.replace(
            "Number of electrons                        I               10",
            "Number of electrons                        I              ten",
        );
        assert!(matches!(
            parse_fchk_content(&content),
            Err(GaussReportError::ParseError { .. })
        ));
    }

    #[test]
    fn test_zero_declared_orbitals() {
        let content = r#"Number of electrons                        I                2
Alpha Orbital Energies                     R   N=           0
Alpha MO coefficients                      R   N=           0
"#;
        assert!(matches!(
            parse_fchk_content(content),
            Err(GaussReportError::ParseError { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            parse_fchk_content(WATER_FCHK).unwrap(),
            parse_fchk_content(WATER_FCHK).unwrap()
        );
    }
}
