//! Responders for `pull_request` webhook events.
//!
//! Two responders live here:
//!
//! - [`pr_closed`] posts a thank-you comment, but only when the PR was
//!   actually merged. Closing without merging is logged and ignored.
//! - [`pr_wip_check`] drives one check run through its full lifecycle
//!   (`queued → in_progress → completed`) and concludes it from the WIP
//!   title heuristic. Every `opened`/`edited` delivery creates a brand-new
//!   check run; there is no reuse across events for the same PR.

use serde_json::json;
use tracing::{debug, info};

use crate::github::{CheckRunCreate, CheckRunCreated, CheckRunUpdate, GithubApi};
use crate::webhooks::events::PullRequestEvent;
use crate::wip;

use super::HandlerError;

/// Name of the check run the bot reports under.
const CHECK_RUN_NAME: &str = "Work-in-progress state";

/// Thanks the author of a merged PR.
///
/// Exactly one comment-creation call when `merged` is true, zero calls
/// otherwise. A failed POST propagates; the comment is simply absent and
/// GitHub's redelivery is the only recourse.
pub async fn pr_closed<A: GithubApi>(
    event: &PullRequestEvent,
    api: &A,
) -> Result<(), HandlerError> {
    if !event.merged {
        info!(pr = %event.number, "PR closed without merging; nothing to do");
        return Ok(());
    }

    info!(pr = %event.number, author = %event.author_login, "PR merged; thanking the author");

    let body = json!({
        "body": format!("Thanks for the PR @{}! ", event.author_login),
    });
    api.post(&event.comments_url, &body).await?;

    Ok(())
}

/// Creates and concludes a WIP check run for an opened or edited PR.
///
/// The three calls run in strict sequence:
///
/// 1. `POST {head_repo_url}/check-runs` - status `queued`; the returned id
///    addresses the updates.
/// 2. `PATCH .../check-runs/{id}` - status `in_progress`.
/// 3. `PATCH .../check-runs/{id}` - status `completed`, conclusion `neutral`
///    if the title carries a WIP marker, `success` otherwise.
///
/// A failure at any step aborts the remaining steps. There is no rollback:
/// the check run may be left visibly stuck at `queued` or `in_progress`.
pub async fn pr_wip_check<A: GithubApi>(
    event: &PullRequestEvent,
    api: &A,
) -> Result<(), HandlerError> {
    let check_runs_url = format!("{}/check-runs", event.head_repo_url);

    let create = CheckRunCreate::queued(CHECK_RUN_NAME, event.head_sha.clone());
    let response = api.post(&check_runs_url, &create).await?;
    let created: CheckRunCreated =
        serde_json::from_value(response).map_err(HandlerError::MalformedCheckRunResponse)?;

    let check_run_url = format!("{}/{}", check_runs_url, created.id);
    debug!(
        pr = %event.number,
        check_run = %created.id,
        head = event.head_sha.short(),
        "created check run"
    );

    api.patch(&check_run_url, &CheckRunUpdate::in_progress(CHECK_RUN_NAME))
        .await?;

    let verdict = wip::evaluate(&event.title);
    info!(
        pr = %event.number,
        is_wip = verdict.is_wip,
        "concluding work-in-progress check"
    );

    let completed = CheckRunUpdate::completed(
        CHECK_RUN_NAME,
        verdict.conclusion(),
        wip::check_output(&verdict),
    );
    api.patch(&check_run_url, &completed).await?;

    Ok(())
}
