//! 通知层 - 事件分类、Adaptive Card 封装与 webhook 发送
//!
//! # 使用示例
//! ```ignore
//! use teams_notify::event::EventContext;
//! use teams_notify::notification::{classify, MessageDispatcher};
//!
//! let ctx = EventContext::new("push", payload);
//! if let Some(message) = classify(&ctx) {
//!     let dispatcher = MessageDispatcher::with_timeout(Duration::from_secs(30))?;
//!     dispatcher.send(Some(webhook_url), &message).await?;
//! }
//! ```

pub mod card;
pub mod classifier;
pub mod dispatcher;
pub mod message;

pub use card::TeamsMessage;
pub use classifier::classify;
pub use dispatcher::{MessageDispatcher, ReqwestTransport, WebhookTransport};
pub use message::{strip_emphasis, ActionLink, BodyBlock, NotificationMessage};
