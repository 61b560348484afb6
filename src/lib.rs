//! pr-butler - a GitHub bot that greets contributors and flags
//! work-in-progress pull requests.
//!
//! The bot receives GitHub webhook deliveries (pull request and issue
//! events) and reacts with simple API calls: a thank-you comment when a PR
//! is merged, an acknowledgement comment when an issue is opened, and a
//! check run that flags work-in-progress PRs from their titles. It is
//! entirely stateless between events.

pub mod config;
pub mod github;
pub mod server;
pub mod types;
pub mod webhooks;
pub mod wip;

#[cfg(test)]
pub mod test_utils;
