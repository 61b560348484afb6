//! Shared test utilities: a recording API double and event fixtures.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::github::{GitHubApiError, GithubApi};
use crate::types::{IssueNumber, PrNumber, RepoId, Sha};
use crate::webhooks::events::{IssueEvent, PrAction, PullRequestEvent};

/// A recorded outbound API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Value,
}

/// A [`GithubApi`] implementation that records calls instead of issuing them.
///
/// POST calls answer with a configurable JSON value (default `{"id": 1}`,
/// which satisfies the check-run create path); PATCH calls answer `{}`.
/// Failure injection: from the configured call index onward, every call is
/// recorded and then answered with an error, which lets tests assert that a
/// failed step stops the sequence.
#[derive(Debug)]
pub struct RecordingApi {
    calls: Mutex<Vec<RecordedCall>>,
    post_response: Value,
    fail_from: Option<usize>,
}

impl RecordingApi {
    pub fn new() -> Self {
        RecordingApi {
            calls: Mutex::new(Vec::new()),
            post_response: serde_json::json!({ "id": 1 }),
            fail_from: None,
        }
    }

    /// All calls from `call_index` (0-based) onward fail after being recorded.
    pub fn failing_from(call_index: usize) -> Self {
        RecordingApi {
            fail_from: Some(call_index),
            ..Self::new()
        }
    }

    /// Answers every POST with the given JSON value.
    pub fn with_post_response(response: Value) -> Self {
        RecordingApi {
            post_response: response,
            ..Self::new()
        }
    }

    /// Returns a snapshot of the calls recorded so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("recording lock poisoned").clone()
    }

    fn record<B: Serialize>(
        &self,
        method: &'static str,
        url: &str,
        body: &B,
    ) -> Result<Value, GitHubApiError> {
        let mut calls = self.calls.lock().expect("recording lock poisoned");
        let index = calls.len();
        calls.push(RecordedCall {
            method,
            url: url.to_string(),
            body: serde_json::to_value(body).expect("test body serializes"),
        });

        if self.fail_from.is_some_and(|from| index >= from) {
            return Err(GitHubApiError::Rejected {
                url: url.to_string(),
                message: "injected failure".to_string(),
            });
        }

        Ok(match method {
            "POST" => self.post_response.clone(),
            _ => serde_json::json!({}),
        })
    }
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubApi for RecordingApi {
    async fn post<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Value, GitHubApiError> {
        self.record("POST", url, body)
    }

    async fn patch<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Value, GitHubApiError> {
        self.record("PATCH", url, body)
    }
}

/// A pull request event fixture for the `octocat/hello-world` repository.
pub fn make_pr_event(action: PrAction, number: u64) -> PullRequestEvent {
    PullRequestEvent {
        repo: RepoId::new("octocat", "hello-world"),
        action,
        number: PrNumber(number),
        merged: false,
        title: "Add feature".to_string(),
        head_sha: Sha::new("a".repeat(40)),
        head_ref: format!("branch-{number}"),
        head_repo_url: "https://api.github.com/repos/octocat/hello-world".to_string(),
        comments_url: format!(
            "https://api.github.com/repos/octocat/hello-world/issues/{number}/comments"
        ),
        author_login: "octocat".to_string(),
    }
}

/// An issue event fixture for the `octocat/hello-world` repository.
pub fn make_issue_event(number: u64) -> IssueEvent {
    IssueEvent {
        repo: RepoId::new("octocat", "hello-world"),
        number: IssueNumber(number),
        comments_url: format!(
            "https://api.github.com/repos/octocat/hello-world/issues/{number}/comments"
        ),
        author_login: "reporter".to_string(),
    }
}
