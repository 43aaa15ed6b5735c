//! GitHub Actions 宿主集成
//!
//! 从 runner 环境读取事件，并通过 workflow command 报告失败。

use std::path::PathBuf;

use serde_json::Value;
use tracing::warn;

use crate::error::{NotifyError, Result};
use crate::event::EventContext;

pub const EVENT_NAME_ENV: &str = "GITHUB_EVENT_NAME";
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

/// 加载事件上下文，命令行参数优先于 runner 环境变量
pub fn load_event(event_name: Option<String>, event_path: Option<PathBuf>) -> Result<EventContext> {
    let event_name = event_name
        .or_else(|| std::env::var(EVENT_NAME_ENV).ok())
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| NotifyError::Event(format!("{} is not set", EVENT_NAME_ENV)))?;

    let event_path = event_path.or_else(|| {
        std::env::var(EVENT_PATH_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    });

    match event_path {
        Some(path) => EventContext::from_file(event_name, &path),
        None => {
            warn!(event = %event_name, "No event payload file, using empty payload");
            Ok(EventContext::new(event_name, Value::Object(Default::default())))
        }
    }
}

/// 按 workflow command 规则转义消息
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// 格式化 `::error::` workflow command
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// 报告失败，runner 会把该 step 标记为失败（退出码由调用方设置）
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}
