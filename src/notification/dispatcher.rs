//! 消息分发器 - 将通知消息 POST 到 Teams webhook
//!
//! 单次尝试，不重试；失败直接返回给调用方。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::card::TeamsMessage;
use super::message::NotificationMessage;
use crate::error::{NotifyError, Result};

/// Teams webhook 成功时返回的状态码
pub const SUCCESS_STATUS: u16 = 200;

/// HTTP 传输层，返回响应状态码
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<u16>;
}

/// 基于 reqwest 的传输层
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<u16> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(format!("HTTP request failed: {}", e)))?;

        Ok(response.status().as_u16())
    }
}

/// 消息分发器
pub struct MessageDispatcher<T = ReqwestTransport> {
    transport: T,
    /// 是否为 dry-run 模式（只打印不发送）
    dry_run: bool,
}

impl MessageDispatcher<ReqwestTransport> {
    /// 使用 reqwest 创建分发器
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self::new(ReqwestTransport::new(timeout)?))
    }
}

impl<T: WebhookTransport> MessageDispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 发送消息
    ///
    /// URL 为空时在发起任何网络请求前返回 `NotifyError::Config`；
    /// 状态码非 200 或请求失败返回 `NotifyError::Delivery`。
    pub async fn send(
        &self,
        destination_url: Option<&str>,
        message: &NotificationMessage,
    ) -> Result<()> {
        let url = destination_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| NotifyError::Config("Teams webhook link is not set".to_string()))?;

        let body = serde_json::to_value(TeamsMessage::from_message(message))?;

        if self.dry_run {
            println!("[DRY-RUN] Would send to Teams:");
            println!("{}", serde_json::to_string_pretty(&body)?);
            return Ok(());
        }

        debug!(actions = message.actions.len(), body_blocks = message.body.len(), "Posting card");
        let status = self.transport.post_json(url, &body).await?;

        if status != SUCCESS_STATUS {
            warn!(status, "Teams webhook rejected message");
            return Err(NotifyError::Delivery(format!(
                "unexpected HTTP status {}",
                status
            )));
        }

        info!(summary = %message.plain_summary(), "Message sent");
        Ok(())
    }
}
