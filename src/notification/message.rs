//! 通知消息结构

use serde::{Deserialize, Serialize};

/// 一行显示文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyBlock {
    pub text: String,
    pub wrap: bool,
}

impl BodyBlock {
    /// 创建自动换行的文本块
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wrap: true,
        }
    }
}

/// 可点击的跳转链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    pub title: String,
    pub url: String,
}

/// 通知消息（已格式化，发送前不再修改）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// 摘要，同时作为聊天客户端的纯文本预览
    pub summary: String,
    /// 正文文本块（有序）
    pub body: Vec<BodyBlock>,
    /// 跳转链接（有序）
    pub actions: Vec<ActionLink>,
}

impl NotificationMessage {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Default::default()
        }
    }

    /// 追加一行正文
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.body.push(BodyBlock::text(text));
    }

    /// 追加跳转链接，URL 缺失时跳过
    pub fn push_action(&mut self, title: impl Into<String>, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.actions.push(ActionLink {
                title: title.into(),
                url,
            });
        }
    }

    /// 去掉强调标记后的摘要（纯文本预览用）
    pub fn plain_summary(&self) -> String {
        strip_emphasis(&self.summary)
    }
}

/// 去掉 Markdown 加粗标记 `**`
pub fn strip_emphasis(text: &str) -> String {
    text.replace("**", "")
}
