//! Wire types for the GitHub Checks API.
//!
//! These structs serialize to the JSON bodies of the check-run create and
//! update calls. A check run's status only ever advances forward through
//! `queued → in_progress → completed`; the constructors on
//! [`CheckRunUpdate`] encode the two transitions the bot performs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CheckRunId, Sha};

/// The status of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRunStatus {
    Queued,
    InProgress,
    Completed,
}

/// The conclusion of a completed check run.
///
/// GitHub defines more conclusions; the bot only ever reports these two.
/// `Neutral` marks a work-in-progress PR without failing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRunConclusion {
    Success,
    Neutral,
}

/// Body of `POST {head_repo_url}/check-runs`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRunCreate {
    pub name: String,
    pub head_sha: Sha,
    pub status: CheckRunStatus,
    pub started_at: DateTime<Utc>,
}

impl CheckRunCreate {
    /// A freshly queued check run for the given commit.
    pub fn queued(name: impl Into<String>, head_sha: Sha) -> Self {
        CheckRunCreate {
            name: name.into(),
            head_sha,
            status: CheckRunStatus::Queued,
            started_at: Utc::now(),
        }
    }
}

/// The subset of the create response the bot needs: the check run's ID.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CheckRunCreated {
    pub id: CheckRunId,
}

/// Body of `PATCH {head_repo_url}/check-runs/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRunUpdate {
    pub name: String,
    pub status: CheckRunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<CheckRunConclusion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<CheckRunOutput>,
}

impl CheckRunUpdate {
    /// Transition to `in_progress`. No conclusion yet.
    pub fn in_progress(name: impl Into<String>) -> Self {
        CheckRunUpdate {
            name: name.into(),
            status: CheckRunStatus::InProgress,
            conclusion: None,
            completed_at: None,
            output: None,
        }
    }

    /// Transition to `completed` with a conclusion and user-visible output.
    pub fn completed(
        name: impl Into<String>,
        conclusion: CheckRunConclusion,
        output: CheckRunOutput,
    ) -> Self {
        CheckRunUpdate {
            name: name.into(),
            status: CheckRunStatus::Completed,
            conclusion: Some(conclusion),
            completed_at: Some(Utc::now()),
            output: Some(output),
        }
    }
}

/// The `output` object on a completed check run.
///
/// Rendered verbatim in GitHub's checks UI: `title` as the headline,
/// `summary` as the short human message, `text` as the expandable detail
/// block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRunOutput {
    pub title: String,
    pub summary: String,
    pub text: String,
}
