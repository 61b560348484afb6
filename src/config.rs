//! Environment-derived configuration.
//!
//! All knobs come from `BUTLER_`-prefixed environment variables. Missing
//! required variables fail startup; the bot never limps along without a
//! webhook secret or an API token.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default GitHub API root.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Errors produced while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable is present but unparseable.
    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime configuration for the bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (`BUTLER_BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Shared secret for webhook signature verification
    /// (`BUTLER_WEBHOOK_SECRET`).
    pub webhook_secret: String,

    /// GitHub API token (`BUTLER_GITHUB_TOKEN`).
    pub github_token: String,

    /// GitHub API root (`BUTLER_GITHUB_API_ROOT`); override for GitHub
    /// Enterprise deployments.
    pub github_api_root: String,
}

impl Config {
    /// Reads configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = optional("BUTLER_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: "BUTLER_BIND_ADDR",
                value: bind_addr,
            })?;

        Ok(Config {
            bind_addr,
            webhook_secret: required("BUTLER_WEBHOOK_SECRET")?,
            github_token: required("BUTLER_GITHUB_TOKEN")?,
            github_api_root: optional("BUTLER_GITHUB_API_ROOT")
                .unwrap_or_else(|| DEFAULT_API_ROOT.into()),
        })
    }
}

fn optional(var: &'static str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.is_empty())
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    optional(var).ok_or(ConfigError::MissingVar(var))
}
