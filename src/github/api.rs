//! The outbound API seam.
//!
//! Responders depend on this trait rather than on a concrete client, which
//! keeps them independently testable: production uses the octocrab-backed
//! [`GithubClient`](super::GithubClient), tests use a recording mock.
//!
//! The verbs are deliberately generic (URL + JSON body) because webhook
//! payloads carry the target URLs directly (`comments_url`, the head repo's
//! `check-runs` collection). No retry or backoff is layered on top; a failed
//! call is the caller's problem.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use super::error::GitHubApiError;

/// An authenticated GitHub API client exposing generic JSON verbs.
///
/// `url` is an absolute API URL as found in a webhook payload, e.g.
/// `https://api.github.com/repos/octocat/hello-world/issues/1/comments`.
pub trait GithubApi: Send + Sync {
    /// Issues a POST with a JSON body, returning the response JSON.
    fn post<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> impl Future<Output = Result<Value, GitHubApiError>> + Send;

    /// Issues a PATCH with a JSON body, returning the response JSON.
    fn patch<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> impl Future<Output = Result<Value, GitHubApiError>> + Send;
}
