//! 配置加载 - webhook URL 与 HTTP 超时
//!
//! webhook URL 按优先级查找：
//! 1. `--webhook-url` 命令行参数
//! 2. Action 输入 `teamsSecret`（环境变量 `INPUT_TEAMSSECRET`）
//! 3. 环境变量 `TEAMS_WEBHOOK_URL`
//! 4. `~/.config/teams-notify/config.json` 中的 `webhook_url`
//!
//! 空字符串视为未设置。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Action 输入 `teamsSecret` 对应的环境变量
pub const ACTION_INPUT_ENV: &str = "INPUT_TEAMSSECRET";
/// 本地调试用的环境变量
pub const WEBHOOK_URL_ENV: &str = "TEAMS_WEBHOOK_URL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 配置文件内容
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// 读取配置文件，文件不存在时返回 `None`
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(Some(config))
    }
}

/// 运行配置
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyConfig {
    /// Teams webhook URL，缺失时由 dispatcher 报配置错误
    pub webhook_url: Option<String>,
    /// HTTP 超时（秒）
    pub timeout_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl NotifyConfig {
    /// 从命令行参数、环境变量和默认配置文件加载
    pub fn load(cli_url: Option<String>, cli_timeout: Option<u64>) -> Result<Self> {
        let file = match default_config_path() {
            Some(path) => FileConfig::load(&path)?,
            None => None,
        };

        Ok(Self::resolve(
            cli_url,
            cli_timeout,
            std::env::var(ACTION_INPUT_ENV).ok(),
            std::env::var(WEBHOOK_URL_ENV).ok(),
            file,
        ))
    }

    /// 按优先级合并各来源
    pub fn resolve(
        cli_url: Option<String>,
        cli_timeout: Option<u64>,
        action_input: Option<String>,
        env_url: Option<String>,
        file: Option<FileConfig>,
    ) -> Self {
        let file = file.unwrap_or_default();

        let webhook_url = [cli_url, action_input, env_url, file.webhook_url]
            .into_iter()
            .flatten()
            .map(|url| url.trim().to_string())
            .find(|url| !url.is_empty());

        let timeout_secs = cli_timeout
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            webhook_url,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 默认配置文件路径 `~/.config/teams-notify/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/teams-notify/config.json"))
}
