//! HTTP server for the bot.
//!
//! This module implements the HTTP surface:
//!
//! - `POST /webhook` - Accepts GitHub webhook deliveries, verifies their
//!   signatures, and runs the matched responders
//! - `GET /health` - Returns 200 if the server is running
//!
//! The server holds no state beyond configuration and the injected API
//! client; deliveries are processed independently.

use std::sync::Arc;

use crate::github::GithubApi;

pub mod health;
pub mod webhook;

pub use health::health_handler;
pub use webhook::{WebhookError, webhook_handler};

/// Shared application state, passed to handlers via Axum's `State`
/// extractor.
///
/// Generic over the API client so router-level tests can inject a
/// recording double.
pub struct AppState<A> {
    inner: Arc<AppStateInner<A>>,
}

struct AppStateInner<A> {
    /// Webhook secret for HMAC-SHA256 signature verification.
    webhook_secret: Vec<u8>,

    /// The authenticated GitHub API client handed to responders.
    api: A,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        AppState {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: GithubApi> AppState<A> {
    /// Creates a new `AppState` from the webhook secret and API client.
    pub fn new(webhook_secret: impl Into<Vec<u8>>, api: A) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                webhook_secret: webhook_secret.into(),
                api,
            }),
        }
    }

    /// Returns the webhook secret.
    pub fn webhook_secret(&self) -> &[u8] {
        &self.inner.webhook_secret
    }

    /// Returns the API client.
    pub fn api(&self) -> &A {
        &self.inner.api
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router<A>(app_state: AppState<A>) -> axum::Router
where
    A: GithubApi + 'static,
{
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/webhook", post(webhook_handler::<A>))
        .route("/health", get(health_handler))
        .with_state(app_state)
}
