//! Teams Adaptive Card 消息格式
//!
//! POST body 格式：
//! ```json
//! {
//!   "type": "message",
//!   "summary": "纯文本摘要",
//!   "attachments": [{
//!     "contentType": "application/vnd.microsoft.card.adaptive",
//!     "contentUrl": null,
//!     "content": {
//!       "type": "AdaptiveCard",
//!       "version": "1.5",
//!       "body": [{"type": "TextBlock", "text": "...", "wrap": true}],
//!       "actions": [{"type": "Action.OpenUrl", "title": "...", "url": "..."}]
//!     }
//!   }]
//! }
//! ```

use serde::Serialize;

use super::message::{ActionLink, BodyBlock, NotificationMessage};

pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
pub const ADAPTIVE_CARD_VERSION: &str = "1.5";

/// 顶层消息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamsMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub summary: String,
    pub attachments: Vec<CardAttachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAttachment {
    pub content_type: &'static str,
    pub content_url: Option<String>,
    pub content: AdaptiveCard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptiveCard {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub version: &'static str,
    pub body: Vec<CardElement>,
    pub actions: Vec<CardAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CardElement {
    TextBlock { text: String, wrap: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CardAction {
    #[serde(rename = "Action.OpenUrl")]
    OpenUrl { title: String, url: String },
}

impl From<&BodyBlock> for CardElement {
    fn from(block: &BodyBlock) -> Self {
        CardElement::TextBlock {
            text: block.text.clone(),
            wrap: block.wrap,
        }
    }
}

impl From<&ActionLink> for CardAction {
    fn from(link: &ActionLink) -> Self {
        CardAction::OpenUrl {
            title: link.title.clone(),
            url: link.url.clone(),
        }
    }
}

impl TeamsMessage {
    /// 包装为 Teams 消息；摘要去掉强调标记，正文和链接保持原样
    pub fn from_message(message: &NotificationMessage) -> Self {
        Self {
            kind: "message",
            summary: message.plain_summary(),
            attachments: vec![CardAttachment {
                content_type: ADAPTIVE_CARD_CONTENT_TYPE,
                content_url: None,
                content: AdaptiveCard {
                    kind: "AdaptiveCard",
                    version: ADAPTIVE_CARD_VERSION,
                    body: message.body.iter().map(CardElement::from).collect(),
                    actions: message.actions.iter().map(CardAction::from).collect(),
                },
            }],
        }
    }
}
