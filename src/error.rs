//! 错误类型定义

use thiserror::Error;

/// 通知发送过程中可能出现的错误
#[derive(Debug, Error)]
pub enum NotifyError {
    /// 缺少 webhook URL 等必需配置
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP 状态码非 200 或网络请求失败
    #[error("Failed to send message to Teams: {0}")]
    Delivery(String),

    /// 事件上下文无法读取
    #[error("Invalid event context: {0}")]
    Event(String),

    /// JSON 解析或序列化失败
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 文件读取失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NotifyError {
    /// 是否为配置错误
    pub fn is_config(&self) -> bool {
        matches!(self, NotifyError::Config(_))
    }

    /// 是否为投递错误
    pub fn is_delivery(&self) -> bool {
        matches!(self, NotifyError::Delivery(_))
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
