//! # 统一错误处理模块
//!
//! 定义 Crysgen 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Crysgen 统一错误类型
#[derive(Error, Debug)]
pub enum CrysgenError {
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

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误 (ParseError: 输出文件不完整或格式异常)
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Unknown space group symbol: '{0}'")]
    UnknownSpaceGroup(String),

    #[error("Unknown element: '{0}'")]
    UnknownElement(String),

    // ─────────────────────────────────────────────────────────────
    // 配置错误 (ConfigError: 生成参数非法或不受支持)
    // ─────────────────────────────────────────────────────────────
    #[error("Wavelength is required for {calc_type} calculations (use --wavelength)")]
    MissingWavelength { calc_type: String },

    #[error("Unsupported functional '{name}'. Supported: {supported}")]
    UnknownFunctional { name: String, supported: String },

    #[error("Unknown basis set '{0}': not an internal CRYSTAL keyword and no bundled table")]
    UnknownBasisSet(String),

    #[error("Basis set '{basis}' has no entry for element '{element}'")]
    MissingBasisEntry { basis: String, element: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CrysgenError>;
