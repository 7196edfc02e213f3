/// 应用配置管理
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 看板数据文件路径（默认 ~/.tasktrax/tasks.json）
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// 获取应用数据目录
/// All platforms: ~/.tasktrax
pub fn app_dir() -> PathBuf {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .expect("Failed to get home directory");
    PathBuf::from(home_dir).join(".tasktrax")
}

/// 获取配置文件路径
pub fn get_config_path() -> PathBuf {
    app_dir().join("config.toml")
}

/// 加载配置
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();

    if !config_path.exists() {
        // 配置文件不存在，返回默认配置
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// 解析看板数据文件路径
pub fn data_file_path(config: &Config) -> PathBuf {
    config
        .data_file
        .clone()
        .unwrap_or_else(|| app_dir().join("tasks.json"))
}

/// 显示当前配置
pub fn show_config() -> Result<()> {
    let config = load_config()?;
    println!("当前配置:");
    println!("  数据文件: {}", data_file_path(&config).display());
    println!();
    println!("配置文件: {}", get_config_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_data_file_override() {
        let config: Config = toml::from_str(r#"data_file = "/tmp/my-tasks.json""#).unwrap();
        assert_eq!(data_file_path(&config), PathBuf::from("/tmp/my-tasks.json"));
    }
}
