//! # esp 子命令实现
//!
//! 解析 Multiwfn 定量分子表面分析输出，以表格显示已找到的统计量，可选导出 JSON。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 EspArgs
//! - 使用 `parsers/multiwfn.rs`, `models/surface.rs`
//! - 使用 `utils/output.rs`

use crate::cli::analyze::EspArgs;
use crate::error::Result;
use crate::models::SurfaceAnalysisResult;
use crate::parsers::parse_surface_analysis;
use crate::utils::{files, output};

use tabled::{Table, Tabled};

/// 统计量表格行
#[derive(Debug, Clone, PartialEq, Tabled)]
struct QuantityRow {
    #[tabled(rename = "Group")]
    group: &'static str,
    #[tabled(rename = "Quantity")]
    quantity: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

impl QuantityRow {
    fn new(group: &'static str, quantity: &'static str, value: f64, unit: &'static str) -> Self {
        QuantityRow {
            group,
            quantity,
            value: format!("{:.6}", value),
            unit,
        }
    }
}

/// 执行 esp 子命令
pub fn execute(args: EspArgs) -> Result<()> {
    output::print_header("Molecular Surface Analysis");

    let content = files::read_text(&args.report)?;
    let result = parse_surface_analysis(&content);

    if result.is_empty() {
        output::print_warning(&format!(
            "No surface-analysis statistics found in '{}'",
            args.report.display()
        ));
    } else {
        let rows = quantity_rows(&result);
        output::print_info(&format!("Found {} quantities", rows.len()));
        println!("{}", Table::new(rows));
    }

    if let Some(ref path) = args.json {
        files::write_json(path, &result)?;
        output::print_success(&format!("Result saved to '{}'", path.display()));
    }

    Ok(())
}

/// 把所有存在的字段展开为表格行
fn quantity_rows(r: &SurfaceAnalysisResult) -> Vec<QuantityRow> {
    let mut rows = Vec::new();

    if let Some(v) = r.volume {
        rows.push(QuantityRow::new("volume", "volume", v.bohr3, "Bohr^3"));
        rows.push(QuantityRow::new("volume", "volume", v.angstrom3, "Angstrom^3"));
    }
    if let Some(d) = r.density {
        rows.push(QuantityRow::new("density", "density", d, "g/cm^3"));
    }
    if let Some(range) = r.esp_range {
        let fields = [("minimum", range.min_kcal_mol), ("maximum", range.max_kcal_mol)];
        for (name, value) in fields {
            if let Some(value) = value {
                rows.push(QuantityRow::new("esp_range", name, value, "kcal/mol"));
            }
        }
    }
    if let Some(areas) = r.surface_area {
        let fields = [
            ("total", areas.total),
            ("positive", areas.positive),
            ("negative", areas.negative),
        ];
        for (name, area) in fields {
            if let Some(area) = area {
                rows.push(QuantityRow::new("surface_area", name, area.bohr2, "Bohr^2"));
                rows.push(QuantityRow::new("surface_area", name, area.angstrom2, "Angstrom^2"));
            }
        }
    }
    if let Some(s) = r.esp_stats {
        let fields = [
            ("overall average", s.overall_avg, "a.u."),
            ("positive average", s.positive_avg, "a.u."),
            ("negative average", s.negative_avg, "a.u."),
            ("overall variance", s.total_variance, "a.u.^2"),
            ("positive variance", s.positive_variance, "a.u.^2"),
            ("negative variance", s.negative_variance, "a.u.^2"),
            ("balance of charges (nu)", s.charge_balance, ""),
            ("internal charge separation (Pi)", s.internal_separation, "a.u."),
            ("molecular polarity index (MPI)", s.molecular_polarity, "eV"),
        ];
        for (name, value, unit) in fields {
            if let Some(value) = value {
                rows.push(QuantityRow::new("esp_stats", name, value, unit));
            }
        }
    }
    if let Some(p) = r.polarity {
        rows.push(QuantityRow::new("polarity", "nonpolar area", p.nonpolar_area, "Angstrom^2"));
        rows.push(QuantityRow::new("polarity", "nonpolar fraction", p.nonpolar_percent, "%"));
        rows.push(QuantityRow::new("polarity", "polar area", p.polar_area, "Angstrom^2"));
        rows.push(QuantityRow::new("polarity", "polar fraction", p.polar_percent, "%"));
    }
    if let Some(s) = r.skewness {
        let fields = [
            ("overall", s.overall),
            ("positive", s.positive),
            ("negative", s.negative),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                rows.push(QuantityRow::new("skewness", name, value, ""));
            }
        }
    }
    if let Some(m) = r.global_minimum {
        rows.push(QuantityRow::new("global_minimum", "ESP", m.value_au, "a.u."));
        for (name, value) in ["x", "y", "z"].into_iter().zip(m.position) {
            rows.push(QuantityRow::new("global_minimum", name, value, "Angstrom"));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_rows_density_only() {
        let result = parse_surface_analysis("Estimated density ... 1.234 g/cm^3");
        let rows = quantity_rows(&result);

        assert_eq!(rows, vec![QuantityRow::new("density", "density", 1.234, "g/cm^3")]);
    }

    #[test]
    fn test_quantity_rows_minimum() {
        let result = parse_surface_analysis(
            " Global surface minimum: -0.027510 a.u. at  -0.225417   0.366873  -1.831106 Ang",
        );
        let rows = quantity_rows(&result);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].quantity, "z");
        assert_eq!(rows[3].value, "-1.831106");
    }

    #[test]
    fn test_quantity_rows_empty() {
        assert!(quantity_rows(&SurfaceAnalysisResult::default()).is_empty());
    }
}
