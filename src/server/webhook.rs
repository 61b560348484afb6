//! Webhook endpoint handler.
//!
//! Accepts GitHub webhook deliveries, verifies signatures, consults the
//! routing table, and runs the matched responders before answering. Each
//! delivery is processed within its own request task; deliveries are
//! independent and may interleave arbitrarily (two rapid `edited` events
//! for the same PR can race and produce two concurrent check runs - that
//! is accepted behavior, not a bug).
//!
//! This endpoint is the per-event error boundary: a responder failure is
//! logged, answered with 500, and otherwise dropped. No retry.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::AppState;
use crate::github::GithubApi;
use crate::webhooks::handlers::HandlerError;
use crate::webhooks::{
    ParseError, matching_responders, parse_webhook, peek_action, run_responders, verify_signature,
};

/// Header name for GitHub event type.
const HEADER_EVENT: &str = "x-github-event";
/// Header name for GitHub delivery ID.
const HEADER_DELIVERY: &str = "x-github-delivery";
/// Header name for GitHub signature.
const HEADER_SIGNATURE: &str = "x-hub-signature-256";

/// Errors that can occur when processing a webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Missing required header.
    #[error("missing required header: {0}")]
    MissingHeader(&'static str),

    /// Invalid signature.
    #[error("invalid signature")]
    InvalidSignature,

    /// The payload could not be parsed into the expected shape.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] ParseError),

    /// A responder failed mid-flight; the delivery is dropped.
    #[error("responder failed: {0}")]
    Responder(#[from] HandlerError),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebhookError::MissingHeader(_) | WebhookError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            WebhookError::InvalidSignature => StatusCode::UNAUTHORIZED,
            WebhookError::Responder(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// Webhook handler.
///
/// # Request
///
/// - Method: POST
/// - Required headers:
///   - `X-GitHub-Event`: Event type (e.g. "pull_request", "issues")
///   - `X-GitHub-Delivery`: Unique delivery ID
///   - `X-Hub-Signature-256`: HMAC-SHA256 signature of the payload
/// - Body: JSON webhook payload
///
/// # Response
///
/// - 202 Accepted - delivery processed, or no responder registered for it
/// - 400 Bad Request - missing header or malformed payload
/// - 401 Unauthorized - signature verification failed
/// - 500 Internal Server Error - a responder's outbound call failed
pub async fn webhook_handler<A>(
    State(state): State<AppState<A>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), WebhookError>
where
    A: GithubApi + 'static,
{
    let event_type = require_header(&headers, HEADER_EVENT)?;
    let delivery_id = require_header(&headers, HEADER_DELIVERY)?;
    let signature = require_header(&headers, HEADER_SIGNATURE)?;

    if !verify_signature(&body, signature, state.webhook_secret()) {
        warn!(delivery = delivery_id, "rejected delivery with invalid signature");
        return Err(WebhookError::InvalidSignature);
    }

    // Classify before the full typed parse: a delivery no responder wants
    // is a no-op regardless of its payload shape.
    let action = peek_action(&body)?;
    let responders = match action.as_deref() {
        Some(action) => matching_responders(event_type, action),
        None => Vec::new(),
    };
    let action = action.unwrap_or_default();

    if responders.is_empty() {
        debug!(
            delivery = delivery_id,
            event_type,
            action = %action,
            "no responder registered; ignoring delivery"
        );
        return Ok((StatusCode::ACCEPTED, "ignored"));
    }

    let Some(event) = parse_webhook(event_type, &body)? else {
        // Matched a route but the parser opted out; only happens if the
        // routing table and parser drift apart.
        warn!(
            delivery = delivery_id,
            event_type,
            action = %action,
            "matched route but payload was not parseable into an event"
        );
        return Ok((StatusCode::ACCEPTED, "ignored"));
    };

    info!(
        delivery = delivery_id,
        event_type,
        action = %action,
        repo = %event.repo_id(),
        "dispatching webhook delivery"
    );

    if let Err(err) = run_responders(&responders, &event, state.api()).await {
        error!(
            delivery = delivery_id,
            event_type,
            action = %action,
            error = %err,
            "responder failed; delivery dropped"
        );
        return Err(err.into());
    }

    Ok((StatusCode::ACCEPTED, "accepted"))
}

fn require_header<'a>(
    headers: &'a HeaderMap,
    name: &'static str,
) -> Result<&'a str, WebhookError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or(WebhookError::MissingHeader(name))
}
