//! 应用配置持久化
//!
//! 只保存界面设置（主题、日志级别），任务本身从不写盘。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{app_dir, load_toml, save_toml};
use crate::error::{Result, TodoError};

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing 过滤级别 (error / warn / info / debug / trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 默认配置文件路径: ~/.todo/config.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("config.toml"))
}

/// 加载配置，文件不存在时返回默认值
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    load_toml(path)
}

/// 启动时读取到的配置
#[derive(Debug)]
pub struct StartupConfig {
    pub config: Config,
    /// 主题变更写回的路径；文件无法解析时为 None，不覆盖用户原有内容
    pub save_path: Option<PathBuf>,
    /// 解析失败原因，等日志初始化后再报告
    pub error: Option<TodoError>,
}

/// 读取启动配置，解析失败时本次使用默认值
pub fn load_startup_config(path: Option<PathBuf>) -> StartupConfig {
    let Some(path) = path else {
        return StartupConfig {
            config: Config::default(),
            save_path: None,
            error: None,
        };
    };

    match load_config_from(&path) {
        Ok(config) => StartupConfig {
            config,
            save_path: Some(path),
            error: None,
        },
        Err(e) => StartupConfig {
            config: Config::default(),
            save_path: None,
            error: Some(TodoError::config(format!("{}: {}", path.display(), e))),
        },
    }
}

/// 保存配置
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    save_toml(path, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme.name, "Auto");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.theme.name = "Nord".to_string();
        config.log.level = "debug".to_string();
        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nname = \"Dracula\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.theme.name, "Dracula");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [[[").unwrap();

        assert!(matches!(load_config_from(&path), Err(TodoError::TomlParse(_))));
    }

    #[test]
    fn test_startup_config_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

        let startup = load_startup_config(Some(path.clone()));
        assert!(startup.error.is_none());
        assert_eq!(startup.save_path, Some(path));
        assert_eq!(startup.config.log.level, "debug");
    }

    #[test]
    fn test_startup_config_invalid_file_is_not_writable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [[[\n[log]\nlevel = \"trace\"\n").unwrap();

        let startup = load_startup_config(Some(path.clone()));
        assert_eq!(startup.config, Config::default());
        assert_eq!(startup.save_path, None);
        let message = startup.error.unwrap().to_string();
        assert!(message.contains(&path.display().to_string()));
    }

    #[test]
    fn test_startup_config_without_path() {
        let startup = load_startup_config(None);
        assert_eq!(startup.config, Config::default());
        assert!(startup.save_path.is_none());
        assert!(startup.error.is_none());
    }
}
