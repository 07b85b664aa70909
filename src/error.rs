//! 统一错误类型定义
//!
//! 使用 `thiserror` 库，覆盖配置读写与日志初始化等带 I/O 的外围模块。
//! Store 本身的操作不会失败。

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 日志初始化错误
    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TodoError::config("home directory not found");
        assert_eq!(err.to_string(), "Config error: home directory not found");

        let err = TodoError::logging("subscriber already set");
        assert_eq!(err.to_string(), "Logging error: subscriber already set");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TodoError = io_err.into();
        assert!(matches!(err, TodoError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: TodoError = parse_err.into();
        assert!(err.to_string().starts_with("TOML parse error"));
    }
}
