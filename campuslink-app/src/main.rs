//! # CampusLink headless client
//!
//! Thin demo binary over the application layer: loads configuration, wires
//! the service objects (session store, API client, role resolver, toast
//! center), optionally signs in with a token from the environment, and runs
//! a read-only smoke pass over the public surfaces.
//!
//! ## Usage
//!
//! ```bash
//! API_BASE_URL=https://api.campuslink.app \
//! SESSION_TOKEN=eyJ... \
//! cargo run -p campuslink-app
//! ```

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campuslink_app::config::Config;
use campuslink_app::session;
use campuslink_client::transport::HttpTransport;
use campuslink_client::{events, feed, ApiClient};
use campuslink_shared::session::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campuslink_app=info,campuslink_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "CampusLink client v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    tracing::info!(base_url = %config.api.base_url, "configuration loaded");

    // Wire the service objects
    let store = SessionStore::new();
    let transport = HttpTransport::new(config.api.base_url.clone(), config.request_timeout())?;
    let api = ApiClient::new(Arc::new(transport), store);
    let (session_manager, _roles) = session::build_session(api.clone());

    // Sign in when a token is provided; unauthenticated reads still work
    if let Ok(token) = std::env::var("SESSION_TOKEN") {
        match session_manager.sign_in(token).await {
            Ok(profile) => {
                tracing::info!(name = %profile.name, role = %profile.role, "signed in");
            }
            Err(err) => {
                tracing::warn!("sign-in failed, continuing unauthenticated: {err}");
            }
        }
    }

    // Read-only smoke pass
    match events::list_events(&api, &[]).await {
        Ok(list) => tracing::info!(count = list.len(), "events fetched"),
        Err(err) => tracing::warn!("event fetch failed: {err}"),
    }
    match feed::list_posts(&api, &[]).await {
        Ok(posts) => tracing::info!(count = posts.len(), "feed posts fetched"),
        Err(err) => tracing::warn!("feed fetch failed: {err}"),
    }

    session_manager.sign_out();
    Ok(())
}
