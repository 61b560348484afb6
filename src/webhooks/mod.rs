//! Webhook handling for GitHub events.
//!
//! This module covers the path from raw delivery to outbound API calls:
//!
//! - Signature verification for webhook payloads (HMAC-SHA256)
//! - Typed event parsing from raw payload JSON
//! - The event matcher (routing table) and dispatch to responders

pub mod dispatch;
pub mod events;
pub mod handlers;
pub mod parser;
pub mod signature;

pub use dispatch::{Responder, matching_responders, run_responders};
pub use events::GitHubEvent;
pub use parser::{ParseError, parse_webhook, peek_action};
pub use signature::{
    compute_signature, format_signature_header, parse_signature_header, verify_signature,
};
