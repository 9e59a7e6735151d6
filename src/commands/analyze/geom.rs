//! # geom 子命令实现
//!
//! 从 Gaussian 日志中提取优化收敛后的结构并以表格显示，可选导出 XYZ。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 GeomArgs
//! - 使用 `parsers/gaussian_log.rs`, `parsers/xyz.rs`
//! - 使用 `utils/output.rs`

use crate::cli::analyze::{GeomArgs, Orientation};
use crate::error::Result;
use crate::models::structure::formula;
use crate::models::Atom;
use crate::parsers::xyz::to_xyz_string;
use crate::parsers::{
    extract_optimized_structure, extract_optimized_structure_with, OptimizedGeometry,
};
use crate::utils::{files, output};

use tabled::{Table, Tabled};

/// 原子坐标表格行
#[derive(Debug, Clone, Tabled)]
pub struct AtomRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "X (Å)")]
    x: String,
    #[tabled(rename = "Y (Å)")]
    y: String,
    #[tabled(rename = "Z (Å)")]
    z: String,
}

/// 原子序列 → 表格行
pub fn atom_rows(atoms: &[Atom]) -> Vec<AtomRow> {
    atoms
        .iter()
        .enumerate()
        .map(|(i, atom)| AtomRow {
            index: i + 1,
            element: atom.symbol.to_string(),
            x: format!("{:.6}", atom.position[0]),
            y: format!("{:.6}", atom.position[1]),
            z: format!("{:.6}", atom.position[2]),
        })
        .collect()
}

/// 执行 geom 子命令
pub fn execute(args: GeomArgs) -> Result<()> {
    output::print_header("Optimized Geometry");

    let content = files::read_text(&args.log)?;
    output::print_info(&format!(
        "Reading '{}' ({} orientation)",
        args.log.display(),
        args.orientation
    ));

    let geometry = match args.orientation {
        Orientation::Standard => extract_optimized_structure(&content)?,
        other => extract_optimized_structure_with(&content, other.into())?,
    };

    let atoms = match geometry {
        OptimizedGeometry::Found(atoms) => atoms,
        OptimizedGeometry::NoResult(reason) => {
            output::print_warning(&format!("No optimized structure: {}", reason));
            return Ok(());
        }
    };

    output::print_success(&format!(
        "Optimization converged: {} atoms ({})",
        atoms.len(),
        formula(&atoms)
    ));
    println!("{}", Table::new(atom_rows(&atoms)));

    if let Some(ref path) = args.output {
        let comment = format!("{} optimized geometry", files::file_stem(&args.log));
        files::write_text(path, &to_xyz_string(&atoms, &comment))?;
        output::print_success(&format!("Geometry saved to '{}'", path.display()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_rows() {
        let atoms = vec![
            Atom::new("O", [0.0, 0.0, 0.119262]),
            Atom::from_atomic_number(26, [1.0, -2.0, 3.5]),
        ];
        let rows = atom_rows(&atoms);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].z, "0.119262");
        assert_eq!(rows[1].element, "X26");
        assert_eq!(rows[1].y, "-2.000000");
    }
}
