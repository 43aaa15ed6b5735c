//! 事件分类测试

use serde_json::json;
use teams_notify::{classify, ActionLink, EventContext};

fn supported_events() -> Vec<EventContext> {
    vec![
        EventContext::new(
            "push",
            json!({
                "ref": "refs/heads/main",
                "head_commit": {"message": "fix bug", "url": "https://x/commit/1"},
                "pusher": {"name": "alice"}
            }),
        ),
        EventContext::new(
            "issue_comment",
            json!({
                "action": "created",
                "issue": {"title": "Bug"},
                "comment": {"body": "+1", "html_url": "https://x/c/1", "user": {"login": "bob"}}
            }),
        ),
        EventContext::new(
            "issues",
            json!({
                "action": "labeled",
                "label": {"name": "bug"},
                "issue": {"title": "Bug", "body": "desc", "html_url": "https://x/issues/1"}
            }),
        ),
        EventContext::new(
            "issues",
            json!({
                "action": "assigned",
                "assignee": {"login": "carol"},
                "issue": {"title": "Bug", "body": "desc", "html_url": "https://x/issues/1"}
            }),
        ),
        EventContext::new(
            "issues",
            json!({
                "action": "opened",
                "issue": {"title": "Bug", "body": "desc", "html_url": "https://x/issues/1", "user": {"login": "bob"}}
            }),
        ),
        EventContext::new(
            "workflow_run",
            json!({
                "action": "completed",
                "workflow_run": {"name": "CI", "conclusion": "success", "display_title": "t", "html_url": "https://x/runs/1"}
            }),
        ),
        EventContext::new(
            "pull_request_review",
            json!({
                "action": "submitted",
                "review": {"state": "commented", "html_url": "https://x/pull/1#r"},
                "pull_request": {"title": "PR", "html_url": "https://x/pull/1"},
                "sender": {"login": "dave"}
            }),
        ),
        EventContext::new(
            "pull_request",
            json!({
                "action": "opened",
                "pull_request": {"title": "PR", "html_url": "https://x/pull/1"}
            }),
        ),
    ]
}

#[test]
fn test_supported_events_have_summary_and_urls() {
    for ctx in supported_events() {
        let message = classify(&ctx)
            .unwrap_or_else(|| panic!("expected message for {}", ctx.event_name));

        assert!(!message.summary.is_empty(), "empty summary for {}", ctx.event_name);
        assert!(!message.body.is_empty(), "empty body for {}", ctx.event_name);
        for action in &message.actions {
            assert!(!action.url.is_empty(), "empty url for {}", ctx.event_name);
        }
    }
}

#[test]
fn test_classify_is_idempotent() {
    for ctx in supported_events() {
        assert_eq!(classify(&ctx), classify(&ctx));
    }
}

#[test]
fn test_workflow_run_in_progress_is_ignored() {
    let ctx = EventContext::new(
        "workflow_run",
        json!({"action": "in_progress", "workflow_run": {"name": "CI"}}),
    );
    assert_eq!(classify(&ctx), None);
}

#[test]
fn test_pull_request_review_comment_is_ignored() {
    for action in ["created", "edited", "deleted"] {
        let ctx = EventContext::new(
            "pull_request_review_comment",
            json!({"action": action, "comment": {"body": "nit"}}),
        );
        assert_eq!(classify(&ctx), None);
    }
}

#[test]
fn test_push_message() {
    let ctx = EventContext::new(
        "push",
        json!({
            "ref": "refs/heads/main",
            "head_commit": {"message": "fix bug", "url": "https://x/commit/1"},
            "pusher": {"name": "alice"}
        }),
    );

    let message = classify(&ctx).unwrap();
    assert_eq!(message.summary, "Push to refs/heads/main");
    assert_eq!(message.body.len(), 1);
    assert_eq!(message.body[0].text, "Push **fix bug** to **refs/heads/main** by **alice**");
    assert_eq!(
        message.actions,
        vec![ActionLink {
            title: "View Commit".to_string(),
            url: "https://x/commit/1".to_string(),
        }]
    );
}

#[test]
fn test_issue_opened_message() {
    let ctx = EventContext::new(
        "issues",
        json!({
            "issue": {"title": "Bug", "body": "desc", "html_url": "https://x/issues/1", "user": {"login": "bob"}}
        }),
    )
    .with_action("opened");

    let message = classify(&ctx).unwrap();
    assert!(message.summary.contains("bob"));
    assert!(message.summary.contains("Bug"));

    let texts: Vec<&str> = message.body.iter().map(|b| b.text.as_str()).collect();
    assert!(texts.contains(&"Issue Title: **Bug**"));
    assert!(texts.contains(&"Issue Body: desc"));
    // summary 追加为最后一行
    assert_eq!(texts.last().copied(), Some(message.summary.as_str()));

    assert_eq!(message.actions.len(), 1);
    assert_eq!(message.actions[0].title, "View Issue");
    assert_eq!(message.actions[0].url, "https://x/issues/1");
}

#[test]
fn test_missing_fields_are_tolerated() {
    let events = [
        ("push", json!({})),
        ("issue_comment", json!({"action": "created"})),
        ("issues", json!({"action": "labeled"})),
        ("issues", json!({"action": "opened", "issue": null})),
        ("workflow_run", json!({"action": "completed"})),
        ("pull_request_review", json!({"action": "submitted", "review": {"state": "commented"}})),
        ("deployment", json!(null)),
    ];

    for (name, payload) in events {
        let message = classify(&EventContext::new(name, payload)).unwrap();
        assert!(!message.summary.is_empty());
        assert!(message.actions.is_empty(), "unexpected action for {}", name);
    }
}
