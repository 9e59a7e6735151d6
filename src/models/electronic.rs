//! # 电子结构摘要数据模型
//!
//! 存储从 Gaussian 格式化检查点文件 (.fchk) 中提取的能量与前线轨道信息。
//!
//! HOMO/LUMO 不单独存储于报告中，而是由电子数和轨道能量列表推导
//! （闭壳层假设：单一轨道能量列表同时包含占据与空轨道）。
//! 除总能量外的字段均为私有，只能经 [`ElectronicStructureSummary::new`] 构造，
//! 保证 HOMO/LUMO 始终与电子数和轨道能量一致。
//!
//! ## 依赖关系
//! - 被 `parsers/fchk.rs` 使用
//! - 被 `commands/analyze/fchk.rs` 使用

use crate::error::{GaussReportError, Result};
use serde::Serialize;

/// 电子结构摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectronicStructureSummary {
    /// 总能量 (Hartree)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_energy: Option<f64>,

    /// 电子数
    electron_count: usize,

    /// Alpha 轨道能量 (Hartree)，按报告顺序
    orbital_energies: Vec<f64>,

    /// 最高占据轨道能量 (Hartree)
    homo: f64,

    /// 最低未占据轨道能量 (Hartree)
    lumo: f64,
}

impl ElectronicStructureSummary {
    /// 由电子数和轨道能量构造，同时推导 HOMO/LUMO
    ///
    /// 奇数电子数（开壳层）被拒绝；轨道列表不足以给出 LUMO 时报错。
    pub fn new(
        total_energy: Option<f64>,
        electron_count: usize,
        orbital_energies: Vec<f64>,
    ) -> Result<Self> {
        let (homo, lumo) = frontier_orbitals(electron_count, &orbital_energies)?;
        Ok(ElectronicStructureSummary {
            total_energy,
            electron_count,
            orbital_energies,
            homo,
            lumo,
        })
    }

    pub fn electron_count(&self) -> usize {
        self.electron_count
    }

    pub fn orbital_energies(&self) -> &[f64] {
        &self.orbital_energies
    }

    /// 最高占据轨道能量 (Hartree)
    pub fn homo(&self) -> f64 {
        self.homo
    }

    /// 最低未占据轨道能量 (Hartree)
    pub fn lumo(&self) -> f64 {
        self.lumo
    }

    /// HOMO-LUMO 能隙 (Hartree)
    pub fn homo_lumo_gap(&self) -> f64 {
        self.lumo - self.homo
    }

    /// 占据轨道数
    pub fn occupied_orbitals(&self) -> usize {
        self.electron_count / 2
    }
}

/// 闭壳层 HOMO/LUMO 推导: HOMO = E[ne/2 - 1], LUMO = E[ne/2]
fn frontier_orbitals(electron_count: usize, energies: &[f64]) -> Result<(f64, f64)> {
    if electron_count % 2 != 0 {
        return Err(GaussReportError::OpenShell {
            electrons: electron_count,
        });
    }

    let occupied = electron_count / 2;
    if occupied == 0 {
        return Err(GaussReportError::parse(
            "fchk",
            "electron count is zero, no occupied orbital",
        ));
    }

    match (energies.get(occupied - 1), energies.get(occupied)) {
        (Some(&homo), Some(&lumo)) => Ok((homo, lumo)),
        _ => Err(GaussReportError::parse(
            "fchk",
            format!(
                "{} orbital energies cannot hold HOMO/LUMO for {} electrons",
                energies.len(),
                electron_count
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontier_orbitals_ten_electrons() {
        let energies = vec![-20.5, -1.3, -0.7, -0.55, -0.49, 0.18, 0.25];
        let summary = ElectronicStructureSummary::new(Some(-76.0), 10, energies).unwrap();

        assert!((summary.homo - (-0.49)).abs() < 1e-12);
        assert!((summary.lumo - 0.18).abs() < 1e-12);
        assert!((summary.homo_lumo_gap() - 0.67).abs() < 1e-12);
        assert_eq!(summary.occupied_orbitals(), 5);
    }

    #[test]
    fn test_serialized_frontier_orbitals() {
        let summary = ElectronicStructureSummary::new(None, 2, vec![-0.5, 0.1, 0.3]).unwrap();
        assert_eq!(summary.homo(), summary.orbital_energies()[0]);
        assert_eq!(summary.lumo(), summary.orbital_energies()[1]);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["electron_count"], 2);
        assert_eq!(json["homo"], -0.5);
        assert_eq!(json["lumo"], 0.1);
        assert!(json.get("total_energy").is_none());
    }

    #[test]
    fn test_odd_electron_count_rejected() {
        let err = ElectronicStructureSummary::new(None, 9, vec![-1.0; 8]).unwrap_err();
        assert!(matches!(err, GaussReportError::OpenShell { electrons: 9 }));
    }

    #[test]
    fn test_too_few_orbitals() {
        let result = ElectronicStructureSummary::new(None, 10, vec![-1.0; 5]);
        assert!(matches!(result, Err(GaussReportError::ParseError { .. })));
    }

    #[test]
    fn test_zero_electrons() {
        let result = ElectronicStructureSummary::new(None, 0, vec![-1.0, 1.0]);
        assert!(result.is_err());
    }
}
