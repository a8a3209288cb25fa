#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::services::identity::IdentityToolkit;

#[tokio::main]
async fn main() {
    // Missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "pulse-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let port = config.port;

    if config.google.is_none() {
        tracing::warn!("Google OAuth not configured; federated sign-in disabled");
    }

    let identity = IdentityToolkit::new(config.identity.clone(), config.upstream_timeout_secs)?;
    tracing::info!(api_url = %config.api_url, "forwarding /api to remote camp API");

    let state = state::AppState::new(config, Arc::new(identity))?;
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "pulse-portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
