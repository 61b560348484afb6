use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pr_butler::config::Config;
use pr_butler::github::GithubClient;
use pr_butler::server::{AppState, build_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pr_butler=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let api = match GithubClient::from_token(&config.github_token, &config.github_api_root) {
        Ok(api) => api,
        Err(err) => {
            tracing::error!("failed to build GitHub client: {err}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(config.webhook_secret.into_bytes(), api);
    let app = build_router(state);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "pr-butler listening on {}",
        config.bind_addr
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
