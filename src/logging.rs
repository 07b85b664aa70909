//! 文件日志
//!
//! TUI 占用了 stdout/stderr，所以日志只写入 ~/.todo/todo.log。

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, TodoError};
use crate::storage::app_dir;

/// 覆盖配置级别的环境变量
pub const LOG_ENV: &str = "TODO_LOG";

/// 默认日志文件路径: ~/.todo/todo.log
pub fn log_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("todo.log"))
}

/// 构建过滤器：环境变量优先，其次是配置中的级别
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| TodoError::logging(format!("invalid log level '{}': {}", level, e))),
    }
}

/// 初始化文件日志（追加写入）
pub fn init_file_logging(log_file: &Path, level: &str) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let filter = build_filter(level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Arc::new(file)),
        )
        .try_init()
        .map_err(|e| TodoError::logging(e.to_string()))?;

    Ok(())
}
