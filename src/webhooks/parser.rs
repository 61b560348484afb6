//! GitHub webhook payload parser.
//!
//! Parses raw webhook JSON payloads into typed [`GitHubEvent`] values.
//!
//! # Parsing Strategy
//!
//! 1. The event type is determined from the `X-GitHub-Event` header
//! 2. The payload is parsed according to the event type
//! 3. Unknown event types and actions return `Ok(None)` (ignored, not error)
//! 4. Malformed payloads (missing required fields) return `Err` with details
//!
//! The endpoint consults the routing table before parsing, so only payloads
//! with at least one matching responder reach the typed parse.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{IssueNumber, PrNumber, RepoId, Sha};

use super::events::{GitHubEvent, IssueEvent, PrAction, PullRequestEvent};

/// Error type for webhook parsing failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization failed (includes missing required fields).
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Extracts just the `action` field from a payload.
///
/// Used by the webhook endpoint to consult the event matcher before doing a
/// full typed parse. Payloads without an `action` field (e.g. `push`) yield
/// `None`, which never matches a route.
pub fn peek_action(payload: &[u8]) -> Result<Option<String>, ParseError> {
    #[derive(Deserialize)]
    struct ActionOnly {
        action: Option<String>,
    }

    let raw: ActionOnly = serde_json::from_slice(payload)?;
    Ok(raw.action)
}

/// Parses a webhook payload into a typed event.
///
/// # Arguments
///
/// * `event_type` - The value of the `X-GitHub-Event` header
/// * `payload` - The raw JSON payload bytes
///
/// # Returns
///
/// * `Ok(Some(event))` - Successfully parsed a known event type
/// * `Ok(None)` - Unknown event type or action (ignored, not an error)
/// * `Err(e)` - Malformed payload or missing required fields
pub fn parse_webhook(event_type: &str, payload: &[u8]) -> Result<Option<GitHubEvent>, ParseError> {
    match event_type {
        "pull_request" => parse_pull_request(payload).map(|opt| opt.map(GitHubEvent::PullRequest)),
        "issues" => parse_issue(payload).map(|opt| opt.map(GitHubEvent::Issue)),
        // Unknown event types are ignored (not an error)
        _ => Ok(None),
    }
}

// ============================================================================
// Raw payload structures for deserialization
//
// These match GitHub's webhook JSON structure. Fields a responder requires
// are non-optional so that their absence surfaces as a parse error.
// ============================================================================

/// Minimal repository info present in all webhook payloads.
#[derive(Debug, Deserialize)]
struct RawRepository {
    owner: RawOwner,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawOwner {
    login: String,
}

/// Minimal user info.
#[derive(Debug, Deserialize)]
struct RawUser {
    login: String,
}

// ============================================================================
// pull_request event
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawPullRequestPayload {
    action: String,
    pull_request: RawPullRequest,
    repository: RawRepository,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: u64,
    // GitHub sends this on every pull_request delivery; its absence is a
    // malformed payload, not an unmerged close.
    merged: bool,
    title: String,
    head: RawRef,
    comments_url: String,
    user: RawUser,
}

#[derive(Debug, Deserialize)]
struct RawRef {
    sha: String,
    #[serde(rename = "ref")]
    branch: String,
    repo: RawHeadRepo,
}

#[derive(Debug, Deserialize)]
struct RawHeadRepo {
    url: String,
}

fn parse_pull_request(payload: &[u8]) -> Result<Option<PullRequestEvent>, ParseError> {
    let raw: RawPullRequestPayload = serde_json::from_slice(payload)?;

    let action = match raw.action.as_str() {
        "opened" => PrAction::Opened,
        "closed" => PrAction::Closed,
        "edited" => PrAction::Edited,
        // synchronize, reopened, labeled, ... - no responder registered
        _ => return Ok(None),
    };

    Ok(Some(PullRequestEvent {
        repo: RepoId::new(raw.repository.owner.login, raw.repository.name),
        action,
        number: PrNumber(raw.pull_request.number),
        merged: raw.pull_request.merged,
        title: raw.pull_request.title,
        head_sha: Sha::new(raw.pull_request.head.sha),
        head_ref: raw.pull_request.head.branch,
        head_repo_url: raw.pull_request.head.repo.url,
        comments_url: raw.pull_request.comments_url,
        author_login: raw.pull_request.user.login,
    }))
}

// ============================================================================
// issues event
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawIssuePayload {
    action: String,
    issue: RawIssue,
    repository: RawRepository,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    number: u64,
    comments_url: String,
    user: RawUser,
}

fn parse_issue(payload: &[u8]) -> Result<Option<IssueEvent>, ParseError> {
    let raw: RawIssuePayload = serde_json::from_slice(payload)?;

    // Only `opened` has a registered responder.
    if raw.action != "opened" {
        return Ok(None);
    }

    Ok(Some(IssueEvent {
        repo: RepoId::new(raw.repository.owner.login, raw.repository.name),
        number: IssueNumber(raw.issue.number),
        comments_url: raw.issue.comments_url,
        author_login: raw.issue.user.login,
    }))
}
