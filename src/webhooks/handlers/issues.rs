//! Responder for `issues` webhook events.

use serde_json::json;
use tracing::info;

use crate::github::GithubApi;
use crate::webhooks::events::IssueEvent;

use super::HandlerError;

/// Acknowledges a freshly opened issue.
///
/// Unconditional: every opened issue gets exactly one comment, and an
/// identical redelivery gets another one. There is no deduplication; the
/// bot is stateless between events.
pub async fn issue_opened<A: GithubApi>(event: &IssueEvent, api: &A) -> Result<(), HandlerError> {
    info!(issue = %event.number, author = %event.author_login, "issue opened; acknowledging");

    let body = json!({
        "body": format!(
            "Thanks for the report @{}! I will look into it ASAP! (I'm a bot).",
            event.author_login,
        ),
    });
    api.post(&event.comments_url, &body).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RecordingApi, make_issue_event};

    #[tokio::test]
    async fn opened_issue_gets_exactly_one_comment() {
        let api = RecordingApi::new();
        let event = make_issue_event(7);

        issue_opened(&event, &api).await.unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].url, event.comments_url);
        assert_eq!(
            calls[0].body["body"],
            "Thanks for the report @reporter! I will look into it ASAP! (I'm a bot)."
        );
    }

    #[tokio::test]
    async fn redelivery_produces_an_independent_comment() {
        // No deduplication: the same event twice means two comments.
        let api = RecordingApi::new();
        let event = make_issue_event(7);

        issue_opened(&event, &api).await.unwrap();
        issue_opened(&event, &api).await.unwrap();

        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn comment_failure_propagates() {
        let api = RecordingApi::failing_from(0);
        let event = make_issue_event(7);

        assert!(issue_opened(&event, &api).await.is_err());
    }
}
