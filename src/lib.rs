//! Teams Notify - 将 GitHub 仓库事件转换为 Microsoft Teams Adaptive Card 通知

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod host;
pub mod notification;

pub use config::NotifyConfig;
pub use error::NotifyError;
pub use event::EventContext;
pub use notification::{classify, ActionLink, BodyBlock, MessageDispatcher, NotificationMessage};
