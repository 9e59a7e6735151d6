//! # 分子表面分析结果数据模型
//!
//! Multiwfn 定量分子表面分析 (主功能 12) 输出的结构化表示。
//! 每个分组相互独立、均为可选：报告中缺失的统计量保持 `None`，不视为错误。
//!
//! ## 依赖关系
//! - 被 `parsers/multiwfn.rs` 使用
//! - 被 `commands/analyze/esp.rs` 使用

use serde::{Deserialize, Serialize};

/// 分子体积
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Bohr³
    pub bohr3: f64,
    /// Å³
    pub angstrom3: f64,
}

/// 静电势 (ESP) 在表面上的极值范围 (kcal/mol)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EspRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_kcal_mol: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_kcal_mol: Option<f64>,
}

/// 面积 (Bohr² 与 Å² 成对给出)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub bohr2: f64,
    pub angstrom2: f64,
}

/// 表面积统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceAreas {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Area>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<Area>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<Area>,
}

/// ESP 统计矩
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EspStatistics {
    /// 全表面平均值 (a.u.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_avg: Option<f64>,
    /// 正值区平均值 (a.u.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_avg: Option<f64>,
    /// 负值区平均值 (a.u.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_avg: Option<f64>,
    /// 总方差 σ²_tot (a.u.²)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_variance: Option<f64>,
    /// 正值区方差 (a.u.²)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_variance: Option<f64>,
    /// 负值区方差 (a.u.²)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_variance: Option<f64>,
    /// 电荷平衡度 ν
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_balance: Option<f64>,
    /// 内部电荷分离 Π (a.u.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_separation: Option<f64>,
    /// 分子极性指数 MPI (eV)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_polarity: Option<f64>,
}

/// 极性/非极性表面划分 (Å² 与百分比)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityPartition {
    pub nonpolar_area: f64,
    pub nonpolar_percent: f64,
    pub polar_area: f64,
    pub polar_percent: f64,
}

/// ESP 分布偏度
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Skewness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<f64>,
}

/// 表面 ESP 全局极小点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMinimum {
    /// ESP 值 (a.u.)
    pub value_au: f64,
    /// 位置 (Å)
    pub position: [f64; 3],
}

/// 定量分子表面分析结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceAnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Volume>,

    /// 估算密度 (g/cm³)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub esp_range: Option<EspRange>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_area: Option<SurfaceAreas>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub esp_stats: Option<EspStatistics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<PolarityPartition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewness: Option<Skewness>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_minimum: Option<SurfaceMinimum>,
}

impl SurfaceAnalysisResult {
    /// 是否没有提取到任何分组
    pub fn is_empty(&self) -> bool {
        *self == SurfaceAnalysisResult::default()
    }
}
