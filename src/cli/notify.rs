// src/cli/notify.rs
//! notify 命令处理
//!
//! 读取 runner 提供的事件，转换为 Teams 消息并发送。

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

use crate::config::NotifyConfig;
use crate::event::EventContext;
use crate::host;
use crate::notification::{classify, MessageDispatcher};

/// notify 命令参数
#[derive(Args, Debug, Default)]
pub struct NotifyArgs {
    /// 事件名（默认读取 GITHUB_EVENT_NAME）
    #[arg(long)]
    pub event_name: Option<String>,
    /// 事件 payload 文件（默认读取 GITHUB_EVENT_PATH）
    #[arg(long)]
    pub event_path: Option<PathBuf>,
    /// Teams webhook URL（默认读取 INPUT_TEAMSSECRET / TEAMS_WEBHOOK_URL）
    #[arg(long)]
    pub webhook_url: Option<String>,
    /// HTTP 超时（秒）
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    /// Dry-run 模式（只打印不发送）
    #[arg(long)]
    pub dry_run: bool,
}

/// 处理一次事件通知
pub async fn handle_notify(args: NotifyArgs) -> Result<()> {
    let ctx = host::load_event(args.event_name, args.event_path)?;
    info!(event = %ctx.event_name, action = %ctx.action(), "Received event");

    let config = NotifyConfig::load(args.webhook_url, args.timeout_secs)?;
    let result = notify_event(&ctx, &config, args.dry_run).await;

    debug!(payload = %ctx.payload, "Event payload");
    result
}

/// 分类并发送；不需要通知的事件直接返回成功
pub async fn notify_event(ctx: &EventContext, config: &NotifyConfig, dry_run: bool) -> Result<()> {
    let Some(message) = classify(ctx) else {
        info!(event = %ctx.event_name, action = %ctx.action(), "Event ignored, no message sent");
        return Ok(());
    };

    let dispatcher = MessageDispatcher::with_timeout(config.timeout())?.with_dry_run(dry_run);
    dispatcher
        .send(config.webhook_url.as_deref(), &message)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_ignored_event_needs_no_webhook() {
        let ctx = EventContext::new("workflow_run", json!({"action": "in_progress"}));
        let config = NotifyConfig::default();

        notify_event(&ctx, &config, false).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_webhook_is_config_error() {
        let ctx = EventContext::new("push", json!({"ref": "refs/heads/main"}));
        let config = NotifyConfig::default();

        let err = notify_event(&ctx, &config, false).await.unwrap_err();
        let err = err.downcast::<crate::NotifyError>().unwrap();
        assert!(err.is_config());
    }
}
