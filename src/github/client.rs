//! Octocrab-backed implementation of [`GithubApi`].
//!
//! Webhook payloads carry absolute API URLs (`comments_url`, the head repo's
//! URL). Octocrab's generic verbs want routes relative to its configured
//! base URI, so the client reduces each payload URL to its path-and-query
//! before issuing the request. This also keeps the bot working against
//! GitHub Enterprise hosts, where the payload URLs point at the appliance.

use octocrab::Octocrab;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::api::GithubApi;
use super::error::GitHubApiError;

/// An authenticated GitHub client.
#[derive(Clone)]
pub struct GithubClient {
    inner: Octocrab,
}

impl GithubClient {
    /// Creates a client authenticated with a personal token.
    ///
    /// `api_root` is the API base (e.g. `https://api.github.com`). For a
    /// GitHub App deployment, swap this constructor for one built from an
    /// installation-authenticated `Octocrab`; everything downstream only
    /// sees the [`GithubApi`] trait.
    pub fn from_token(
        token: impl Into<String>,
        api_root: &str,
    ) -> Result<Self, GitHubApiError> {
        let inner = Octocrab::builder()
            .personal_token(token.into())
            .base_uri(api_root)
            .map_err(GitHubApiError::Request)?
            .build()?;
        Ok(GithubClient { inner })
    }

    /// Creates a client from a pre-configured Octocrab instance.
    pub fn from_octocrab(inner: Octocrab) -> Self {
        GithubClient { inner }
    }

    /// Reduces an absolute payload URL to a route octocrab can resolve
    /// against its base URI.
    fn route_for(url: &str) -> Result<String, GitHubApiError> {
        let parsed = Url::parse(url).map_err(|source| GitHubApiError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(match parsed.query() {
            Some(query) => format!("{}?{}", parsed.path(), query),
            None => parsed.path().to_string(),
        })
    }
}

impl GithubApi for GithubClient {
    async fn post<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Value, GitHubApiError> {
        let route = Self::route_for(url)?;
        let response: Value = self.inner.post(route, Some(body)).await?;
        Ok(response)
    }

    async fn patch<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Value, GitHubApiError> {
        let route = Self::route_for(url)?;
        let response: Value = self.inner.patch(route, Some(body)).await?;
        Ok(response)
    }
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_for_strips_scheme_and_host() {
        let route = GithubClient::route_for(
            "https://api.github.com/repos/octocat/hello-world/issues/1/comments",
        )
        .unwrap();
        assert_eq!(route, "/repos/octocat/hello-world/issues/1/comments");
    }

    #[test]
    fn route_for_preserves_query() {
        let route =
            GithubClient::route_for("https://api.github.com/repos/o/r/check-runs?page=2").unwrap();
        assert_eq!(route, "/repos/o/r/check-runs?page=2");
    }

    #[test]
    fn route_for_rejects_relative_urls() {
        let err = GithubClient::route_for("/repos/o/r/check-runs").unwrap_err();
        assert!(matches!(err, GitHubApiError::InvalidUrl { .. }));
    }
}
