//! # 工具函数模块
//!
//! 提供美化输出、日志后端、进度条与文件读写等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/` 模块使用
//! - 子模块: output, progress, files

pub mod files;
pub mod output;
pub mod progress;
