//! # fchk 子命令实现
//!
//! 显示总能量、HOMO/LUMO 及前线轨道附近的轨道能级，可选导出 JSON。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 FchkArgs
//! - 使用 `parsers/fchk.rs`, `models/electronic.rs`
//! - 使用 `utils/output.rs`

use crate::cli::analyze::FchkArgs;
use crate::error::Result;
use crate::models::ElectronicStructureSummary;
use crate::parsers::parse_fchk_content;
use crate::utils::{files, output};

use tabled::{Table, Tabled};

/// 轨道能级表格行
#[derive(Debug, Clone, Tabled)]
struct OrbitalRow {
    #[tabled(rename = "Orbital")]
    index: usize,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Occupied")]
    occupied: String,
    #[tabled(rename = "Energy (Hartree)")]
    energy: String,
}

/// 执行 fchk 子命令
pub fn execute(args: FchkArgs) -> Result<()> {
    output::print_header("Electronic Structure Summary");

    let content = files::read_text(&args.fchk)?;
    let summary = parse_fchk_content(&content)?;

    match summary.total_energy {
        Some(e) => output::print_info(&format!("Total energy:     {:.10} Hartree", e)),
        None => output::print_warning("Total energy not reported"),
    }
    output::print_info(&format!("Electrons:        {}", summary.electron_count()));
    output::print_info(&format!("Orbitals:         {}", summary.orbital_energies().len()));
    output::print_info(&format!("HOMO:             {:.6} Hartree", summary.homo()));
    output::print_info(&format!("LUMO:             {:.6} Hartree", summary.lumo()));
    output::print_info(&format!(
        "HOMO-LUMO gap:    {:.6} Hartree",
        summary.homo_lumo_gap()
    ));

    println!("\n{}", Table::new(frontier_rows(&summary, args.window)));

    if let Some(ref path) = args.json {
        files::write_json(path, &summary)?;
        output::print_success(&format!("Summary saved to '{}'", path.display()));
    }

    Ok(())
}

/// HOMO/LUMO 两侧各 `window` 个轨道
fn frontier_rows(summary: &ElectronicStructureSummary, window: usize) -> Vec<OrbitalRow> {
    let homo = summary.occupied_orbitals() - 1;
    let start = (homo + 1).saturating_sub(window.max(1));
    let end = (homo + 1 + window.max(1)).min(summary.orbital_energies().len());

    (start..end)
        .map(|i| {
            let label = match i.cmp(&homo) {
                std::cmp::Ordering::Equal => "HOMO".to_string(),
                std::cmp::Ordering::Less => format!("HOMO-{}", homo - i),
                std::cmp::Ordering::Greater if i == homo + 1 => "LUMO".to_string(),
                std::cmp::Ordering::Greater => format!("LUMO+{}", i - homo - 1),
            };
            OrbitalRow {
                index: i + 1,
                label,
                occupied: if i <= homo { "yes" } else { "no" }.to_string(),
                energy: format!("{:.6}", summary.orbital_energies()[i]),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontier_rows_window() {
        let energies = vec![-20.5, -1.3, -0.7, -0.55, -0.49, 0.18, 0.25, 0.8];
        let summary = ElectronicStructureSummary::new(None, 10, energies).unwrap();
        let rows = frontier_rows(&summary, 2);

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["HOMO-1", "HOMO", "LUMO", "LUMO+1"]);
        assert_eq!(rows[1].index, 5);
        assert_eq!(rows[1].occupied, "yes");
        assert_eq!(rows[2].occupied, "no");
    }

    #[test]
    fn test_frontier_rows_clamped() {
        let summary = ElectronicStructureSummary::new(None, 2, vec![-0.5, 0.1]).unwrap();
        let rows = frontier_rows(&summary, 5);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "HOMO");
        assert_eq!(rows[1].label, "LUMO");
    }
}
