pub mod config;
pub mod tasks;

use std::path::PathBuf;

use crate::error::{Result, TaskpadError};

/// 获取 ~/.taskpad/ 目录路径
pub fn taskpad_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".taskpad"))
        .ok_or_else(|| TaskpadError::storage("cannot locate home directory"))
}

/// 确保数据目录存在: ~/.taskpad/
pub fn ensure_data_dir() -> Result<PathBuf> {
    let path = taskpad_dir()?;
    std::fs::create_dir_all(&path)?;
    Ok(path)
}
