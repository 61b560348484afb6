//! GitHub API error types.
//!
//! The bot performs no retries: any outbound failure propagates to the
//! webhook endpoint, which logs it and drops the event. For the WIP-check
//! responder this can leave a check run stranded in a non-terminal state;
//! there is no follow-up correction.

use thiserror::Error;

/// An error from an outbound GitHub API call.
#[derive(Debug, Error)]
pub enum GitHubApiError {
    /// The underlying HTTP request failed (network error or non-2xx status).
    #[error("GitHub API request failed: {0}")]
    Request(#[from] octocrab::Error),

    /// A payload-supplied URL could not be turned into an API route.
    #[error("cannot derive API route from `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request was rejected before being issued.
    ///
    /// Not produced by [`GithubClient`](super::GithubClient); exists so test
    /// doubles can inject failures without fabricating transport errors.
    #[error("GitHub API request to `{url}` was rejected: {message}")]
    Rejected { url: String, message: String },
}
