//! GitHub webhook event types.
//!
//! Typed representations of the webhook events the bot handles, carrying
//! only the fields the responders need. Events are materialized from the
//! payload at handler entry and discarded at handler exit; nothing is
//! retained across deliveries.

use crate::types::{IssueNumber, PrNumber, RepoId, Sha};

/// A parsed GitHub webhook event.
///
/// Only the event families with registered responders appear here. Unknown
/// or irrelevant events are represented by the parser returning `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubEvent {
    /// A pull request was opened, closed, or edited.
    PullRequest(PullRequestEvent),

    /// An issue was opened.
    Issue(IssueEvent),
}

impl GitHubEvent {
    /// Returns the repository this event belongs to.
    pub fn repo_id(&self) -> &RepoId {
        match self {
            GitHubEvent::PullRequest(e) => &e.repo,
            GitHubEvent::Issue(e) => &e.repo,
        }
    }
}

/// Action performed on a pull request.
///
/// GitHub sends many more actions (`synchronize`, `reopened`, ...); the
/// parser only materializes the ones a responder is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrAction {
    /// PR was opened.
    Opened,
    /// PR was closed (merged or not).
    Closed,
    /// PR was edited (title, body, or base branch changed).
    Edited,
}

/// A pull request event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    /// The repository.
    pub repo: RepoId,

    /// The action that triggered this event.
    pub action: PrAction,

    /// The PR number.
    pub number: PrNumber,

    /// Whether the PR was merged (only meaningful for `closed` action;
    /// closing without merging is a no-op for the bot).
    pub merged: bool,

    /// The PR title, as typed by the author. The WIP heuristic lower-cases
    /// it before matching.
    pub title: String,

    /// The current head SHA of the PR branch.
    pub head_sha: Sha,

    /// The head branch name (the PR's source branch).
    pub head_ref: String,

    /// API URL of the head repository; check runs are created under it.
    pub head_repo_url: String,

    /// API URL of the PR's comments collection.
    pub comments_url: String,

    /// The PR author's login name.
    pub author_login: String,
}

/// An issue event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueEvent {
    /// The repository.
    pub repo: RepoId,

    /// The issue number.
    pub number: IssueNumber,

    /// API URL of the issue's comments collection.
    pub comments_url: String,

    /// The issue author's login name.
    pub author_login: String,
}
