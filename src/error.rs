//! # 统一错误处理模块
//!
//! 定义 gaussreport 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// gaussreport 统一错误类型
#[derive(Error, Debug)]
pub enum GaussReportError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} content\nReason: {reason}")]
    ParseError { format: String, reason: String },

    #[error("Missing '{marker}' section in {format} content")]
    MissingSection { format: String, marker: String },

    #[error("No valid atoms found in the provided XYZ content")]
    NoAtomsFound,

    #[error("Odd electron count ({electrons}): HOMO/LUMO derivation requires a closed-shell system")]
    OpenShell { electrons: usize },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 导出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl GaussReportError {
    /// 构造解析错误
    pub fn parse(format: &str, reason: impl Into<String>) -> Self {
        GaussReportError::ParseError {
            format: format.to_string(),
            reason: reason.into(),
        }
    }

    /// 构造缺失段落错误
    pub fn missing(format: &str, marker: &str) -> Self {
        GaussReportError::MissingSection {
            format: format.to_string(),
            marker: marker.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GaussReportError>;
