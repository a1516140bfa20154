//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

use super::{ensure_data_dir, taskpad_dir};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// 获取配置文件路径
fn config_path() -> Result<PathBuf> {
    Ok(taskpad_dir()?.join("config.toml"))
}

/// 加载配置（不存在或损坏时返回默认值）
pub fn load_config() -> Config {
    let Ok(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    std::fs::read_to_string(&path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    let dir = ensure_data_dir()?;
    let content = toml::to_string_pretty(config)?;
    std::fs::write(dir.join("config.toml"), content)?;
    Ok(())
}
