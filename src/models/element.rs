//! # 元素周期表查找表
//!
//! 原子序数 → 元素符号映射。Gaussian 日志只给出原子序数，需要经此表转换。
//!
//! 当前覆盖 1–20 号元素 (H … Ca)。表外的原子序数不视为错误，
//! 由 [`AtomSymbol::Unmapped`](super::AtomSymbol) 保留原始序数。
//!
//! ## 依赖关系
//! - 被 `models/structure.rs`, `parsers/gaussian_log.rs` 使用
//! - 纯静态数据，无外部依赖

/// 元素符号表，下标 = 原子序数 - 1
pub static ELEMENT_SYMBOLS: &[&str] = &[
    "H", "He", // 1-2
    "Li", "Be", "B", "C", "N", "O", "F", "Ne", // 3-10
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", // 11-18
    "K", "Ca", // 19-20
];

/// 按原子序数查找元素符号
pub fn symbol_for(atomic_number: u32) -> Option<&'static str> {
    let index = (atomic_number as usize).checked_sub(1)?;
    ELEMENT_SYMBOLS.get(index).copied()
}
