//! # 分子结构数据模型
//!
//! 定义原子及原子序列的统一表示。坐标列表 (XYZ) 直接给出元素符号，
//! Gaussian 日志给出原子序数，两者都归一为 [`Atom`]。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 使用 `models/element.rs`

use super::element;
use serde::{Deserialize, Serialize};

/// 原子的元素标识
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtomSymbol {
    /// 元素符号（来自坐标列表，或已映射的原子序数）
    Element(String),

    /// 元素表之外的原子序数
    Unmapped(u32),
}

impl AtomSymbol {
    /// 原子序数 → 元素标识，表外序数保留为 `Unmapped`
    pub fn from_atomic_number(atomic_number: u32) -> Self {
        match element::symbol_for(atomic_number) {
            Some(symbol) => AtomSymbol::Element(symbol.to_string()),
            None => AtomSymbol::Unmapped(atomic_number),
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, AtomSymbol::Element(_))
    }
}

impl std::fmt::Display for AtomSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomSymbol::Element(symbol) => write!(f, "{}", symbol),
            AtomSymbol::Unmapped(z) => write!(f, "X{}", z),
        }
    }
}

/// 原子信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// 元素标识
    pub symbol: AtomSymbol,

    /// 笛卡尔坐标 [x, y, z] (Å)
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            symbol: AtomSymbol::Element(element.into()),
            position,
        }
    }

    pub fn from_atomic_number(atomic_number: u32, position: [f64; 3]) -> Self {
        Atom {
            symbol: AtomSymbol::from_atomic_number(atomic_number),
            position,
        }
    }
}

/// 计算化学式（按元素符号字母序）
pub fn formula(atoms: &[Atom]) -> String {
    use std::collections::BTreeMap;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for atom in atoms {
        *counts.entry(atom.symbol.to_string()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(el, count)| {
            if count == 1 {
                el
            } else {
                format!("{}{}", el, count)
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
