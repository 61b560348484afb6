//! Responders for matched webhook events.
//!
//! Each responder is an async function taking the typed event and the
//! injected API client, performing zero or more outbound calls, and
//! returning. There is no cross-event state: everything a responder needs
//! arrives in the event, and nothing survives its return.
//!
//! | Event | Responder |
//! |-------|-----------|
//! | `pull_request`/`closed` | [`pr_closed`] - thank the author if merged |
//! | `pull_request`/`opened`,`edited` | [`pr_wip_check`] - run the WIP check |
//! | `issues`/`opened` | [`issue_opened`] - acknowledge the report |
//!
//! Failures bubble up unhandled; the webhook endpoint logs and drops the
//! event. No responder retries.

mod issues;
mod pull_request;

use thiserror::Error;

use crate::github::GitHubApiError;

pub use issues::issue_opened;
pub use pull_request::{pr_closed, pr_wip_check};

/// Errors that can occur while running a responder.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// An outbound GitHub API call failed.
    #[error("GitHub API error: {0}")]
    Api(#[from] GitHubApiError),

    /// The check-run create response did not carry a usable `id`.
    ///
    /// Without the id there is nothing to patch, so the responder aborts.
    #[error("malformed check-run creation response: {0}")]
    MalformedCheckRunResponse(#[source] serde_json::Error),
}
