//! 事件上下文 - 触发本次通知的仓库事件
//!
//! 事件由宿主环境（GitHub Actions runner）提供：事件名 + JSON payload。
//! payload 的结构随事件类型变化，这里只提供安全的按路径取值，
//! 缺失字段由调用方决定回退方式（空字符串、跳过 block、跳过 action）。

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{NotifyError, Result};

/// 单次调用的事件上下文（只读）
#[derive(Debug, Clone, PartialEq)]
pub struct EventContext {
    /// 事件名，如 `push`、`issues`
    pub event_name: String,
    /// 子动作，如 `opened`、`completed`
    pub action: Option<String>,
    /// 原始事件 payload
    pub payload: Value,
}

impl EventContext {
    /// 创建事件上下文，action 默认取 `payload.action`
    pub fn new(event_name: impl Into<String>, payload: Value) -> Self {
        let action = payload
            .get("action")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Self {
            event_name: event_name.into(),
            action,
            payload,
        }
    }

    /// 显式设置 action（覆盖 payload 中的值）
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 从事件文件加载（`GITHUB_EVENT_PATH` 指向的 JSON）
    pub fn from_file(event_name: impl Into<String>, path: &Path) -> Result<Self> {
        let event_name = event_name.into();
        if event_name.trim().is_empty() {
            return Err(NotifyError::Event("event name is empty".to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            NotifyError::Event(format!("cannot read event file {}: {}", path.display(), e))
        })?;
        let payload: Value = serde_json::from_str(&content)?;

        Ok(Self::new(event_name, payload))
    }

    /// action 文本，缺失时为空字符串
    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or("")
    }

    /// 按点分路径取值，如 `head_commit.message`；null 视为缺失
    pub fn field(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.payload, |value, key| value.get(key))
            .filter(|value| !value.is_null())
    }

    /// payload 是否包含该字段
    pub fn has(&self, path: &str) -> bool {
        self.field(path).is_some()
    }

    /// 取字段的显示文本，缺失时为空字符串
    pub fn text(&self, path: &str) -> String {
        match self.field(path) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// 取 URL 字段，只有非空字符串才算存在
    pub fn url(&self, path: &str) -> Option<String> {
        self.field(path)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}
