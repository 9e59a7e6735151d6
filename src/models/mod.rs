//! # 数据模型模块
//!
//! 定义原子结构、电子结构摘要和表面分析结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: element, structure, electronic, surface

pub mod electronic;
pub mod element;
pub mod structure;
pub mod surface;

pub use electronic::ElectronicStructureSummary;
pub use structure::Atom;
pub use surface::SurfaceAnalysisResult;
