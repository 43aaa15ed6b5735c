//! 事件分类 / 格式化 - 将仓库事件转换为通知消息
//!
//! 按 `(事件名, action, payload 结构)` 依次匹配：
//! push → issue_comment → issues(labeled/assigned/opened) → workflow_run
//! → pull_request_review → pull_request_review_comment → 兜底。
//!
//! 返回 `None` 表示本次事件不发送消息（未完成的 workflow_run、
//! pull_request_review_comment）。

use super::message::NotificationMessage;
use crate::event::EventContext;

/// Action labels
pub mod msg {
    pub const VIEW_COMMIT: &str = "View Commit";
    pub const VIEW_COMMENT: &str = "View Comment";
    pub const VIEW_ISSUE: &str = "View Issue";
    pub const VIEW_PR: &str = "View PR";
    pub const VIEW_WORKFLOW: &str = "View Workflow";
}

/// 将事件上下文转换为通知消息，纯函数
pub fn classify(ctx: &EventContext) -> Option<NotificationMessage> {
    let mut card = CardDraft::new(format!("{} / {}", ctx.event_name, ctx.action()));

    match (ctx.event_name.as_str(), ctx.action()) {
        ("push", _) => {
            let git_ref = ctx.text("ref");
            card.summary = format!("Push to {}", git_ref);
            card.append_summary = false;
            card.message.push_text(format!(
                "Push **{}** to **{}** by **{}**",
                ctx.text("head_commit.message"),
                git_ref,
                ctx.text("pusher.name")
            ));
            card.message
                .push_action(msg::VIEW_COMMIT, ctx.url("head_commit.url"));
        }
        ("issue_comment", action) => {
            let title = ctx.text("issue.title");
            card.summary = format!("Comment {} on {}", action, title);
            card.append_summary = false;
            card.message.push_text(format!(
                "Comment {} on **{}** by **{}**",
                action,
                title,
                ctx.text("comment.user.login")
            ));
            card.message
                .push_text(format!("Body: {}", ctx.text("comment.body")));
            card.message
                .push_action(msg::VIEW_COMMENT, ctx.url("comment.html_url"));
        }
        ("issues", "labeled") => {
            card.summary = format!(
                "Issue labeled with **{}**: **{}**",
                ctx.text("label.name"),
                ctx.text("issue.title")
            );
            card.add_issue(ctx);
        }
        ("issues", "assigned") => {
            card.summary = format!(
                "Issue assigned to **{}**: **{}**",
                ctx.text("assignee.login"),
                ctx.text("issue.title")
            );
            card.add_issue(ctx);
        }
        ("issues", "opened") => {
            card.summary = format!(
                "Issue created by **{}**: **{}**",
                ctx.text("issue.user.login"),
                ctx.text("issue.title")
            );
            card.add_issue(ctx);
        }
        ("workflow_run", action) => {
            if action != "completed" {
                return None;
            }
            card.summary = format!(
                "{} **{}**: {}",
                ctx.text("workflow_run.name"),
                ctx.text("workflow_run.conclusion"),
                ctx.text("workflow_run.display_title")
            );
            card.message
                .push_action(msg::VIEW_WORKFLOW, ctx.url("workflow_run.html_url"));
        }
        ("pull_request_review", "submitted") if ctx.text("review.state") == "commented" => {
            card.summary = format!(
                "Comment on PR **{}** by **{}**",
                ctx.text("pull_request.title"),
                ctx.text("sender.login")
            );
            card.message
                .push_action(msg::VIEW_COMMENT, ctx.url("review.html_url"));
        }
        ("pull_request_review_comment", _) => return None,
        _ => {
            card.add_pr(ctx);
            card.add_issue(ctx);
        }
    }

    Some(card.finish(&ctx.event_name))
}

/// 构建中的消息
struct CardDraft {
    summary: String,
    append_summary: bool,
    message: NotificationMessage,
}

impl CardDraft {
    fn new(default_summary: String) -> Self {
        Self {
            summary: default_summary,
            append_summary: true,
            message: NotificationMessage::default(),
        }
    }

    /// issue 标题、正文和链接；payload 没有 issue 时不做任何事
    fn add_issue(&mut self, ctx: &EventContext) {
        if !ctx.has("issue") {
            return;
        }
        self.message
            .push_text(format!("Issue Title: **{}**", ctx.text("issue.title")));
        self.message
            .push_text(format!("Issue Body: {}", ctx.text("issue.body")));
        self.message
            .push_action(msg::VIEW_ISSUE, ctx.url("issue.html_url"));
    }

    /// PR 标题和链接；payload 没有 pull_request 时不做任何事
    fn add_pr(&mut self, ctx: &EventContext) {
        if !ctx.has("pull_request") {
            return;
        }
        self.message
            .push_text(format!("Pull Request **{}**", ctx.text("pull_request.title")));
        self.message
            .push_action(msg::VIEW_PR, ctx.url("pull_request.html_url"));
    }

    fn finish(mut self, event_name: &str) -> NotificationMessage {
        // summary 不能为空
        if self.summary.trim().is_empty() {
            self.summary = event_name.to_string();
        }
        if self.append_summary {
            self.message.push_text(self.summary.clone());
        }
        self.message.summary = self.summary;
        self.message
    }
}
