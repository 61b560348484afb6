//! The event matcher and dispatcher.
//!
//! An explicit routing table maps `(event_type, action-set)` to responders.
//! Matching is exact on event type and set-membership on action; there are
//! no wildcard or priority semantics. A delivery matching no route is a
//! no-op, not an error.
//!
//! Multiple routes may match one delivery (none do in the current table,
//! but `pull_request`/`opened` vs `edited` shows why the table is a list,
//! not a map): every matched responder runs, in table order.

use tracing::debug;

use crate::github::GithubApi;

use super::events::GitHubEvent;
use super::handlers::{self, HandlerError};

/// The responders the bot registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Responder {
    /// Thanks the author when a PR is merged (`pull_request`/`closed`).
    PrMerge,
    /// Acknowledges a freshly opened issue (`issues`/`opened`).
    IssueOpened,
    /// Runs the WIP check run lifecycle (`pull_request`/`opened`,`edited`).
    PrWipCheck,
}

/// One row of the routing table.
pub struct Route {
    pub event_type: &'static str,
    pub actions: &'static [&'static str],
    pub responder: Responder,
}

/// The routing table. Fixed at compile time; no dynamic registration.
pub const ROUTES: &[Route] = &[
    Route {
        event_type: "pull_request",
        actions: &["closed"],
        responder: Responder::PrMerge,
    },
    Route {
        event_type: "issues",
        actions: &["opened"],
        responder: Responder::IssueOpened,
    },
    Route {
        event_type: "pull_request",
        actions: &["opened", "edited"],
        responder: Responder::PrWipCheck,
    },
];

/// Selects the responders registered for `(event_type, action)`.
///
/// An empty result means the delivery is ignored.
pub fn matching_responders(event_type: &str, action: &str) -> Vec<Responder> {
    ROUTES
        .iter()
        .filter(|route| route.event_type == event_type && route.actions.contains(&action))
        .map(|route| route.responder)
        .collect()
}

/// Runs each matched responder against the parsed event.
///
/// Responders are independent; the first failure aborts the rest for this
/// delivery and propagates to the endpoint's error boundary.
pub async fn run_responders<A: GithubApi>(
    responders: &[Responder],
    event: &GitHubEvent,
    api: &A,
) -> Result<(), HandlerError> {
    for responder in responders {
        match (responder, event) {
            (Responder::PrMerge, GitHubEvent::PullRequest(pr)) => {
                handlers::pr_closed(pr, api).await?;
            }
            (Responder::PrWipCheck, GitHubEvent::PullRequest(pr)) => {
                handlers::pr_wip_check(pr, api).await?;
            }
            (Responder::IssueOpened, GitHubEvent::Issue(issue)) => {
                handlers::issue_opened(issue, api).await?;
            }
            // A route whose responder doesn't consume this event shape; the
            // table and parser agree, so this only fires if they drift.
            (responder, _) => {
                debug!(?responder, "responder does not apply to parsed event; skipping");
            }
        }
    }
    Ok(())
}
