//! GitHub API client layer.
//!
//! This module provides the outbound half of the bot: a [`GithubApi`] trait
//! exposing generic `post`/`patch` verbs against payload-supplied API URLs,
//! and [`GithubClient`], the octocrab-backed implementation used in
//! production. Responders receive the client as an explicit argument, so
//! tests can substitute a recording mock.

pub mod api;
pub mod checks;
mod client;
mod error;

pub use api::GithubApi;
pub use checks::{
    CheckRunConclusion, CheckRunCreate, CheckRunCreated, CheckRunOutput, CheckRunStatus,
    CheckRunUpdate,
};
pub use client::GithubClient;
pub use error::GitHubApiError;
