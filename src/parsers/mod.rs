//! # 解析器模块
//!
//! 各类计算报告文本的解析器。所有解析器都是纯函数：
//! 输入为已读入内存的完整文本，输出为结构化数据，不做任何文件或进程操作。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xyz, gaussian_log, fchk, multiwfn, gjf

pub mod fchk;
pub mod gaussian_log;
pub mod gjf;
pub mod multiwfn;
pub mod xyz;

pub use fchk::parse_fchk_content;
pub use gaussian_log::{
    extract_optimized_structure, extract_optimized_structure_with, OptimizedGeometry,
    OrientationBlock,
};
pub use multiwfn::parse_surface_analysis;
