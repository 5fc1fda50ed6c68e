use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware;
use crate::services::rtc::{signer::AgoraSigner, token_service::RtcTokenService};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,agora_token_service=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    // Missing credentials are fatal: log and exit before binding the port.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "AGORA_APP_ID and AGORA_APP_CERTIFICATE must be set");
            return Err(e.into());
        }
    };

    let state = build_state(&config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("server running on port {}", config.addr.port());
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_state(config: &Config) -> AppState {
    // Build process-level services here and inject them into the shared
    // application state.
    let rtc = RtcTokenService::new(
        config.app_id.clone(),
        config.app_certificate.clone(),
        Arc::new(AgoraSigner),
    );

    AppState::new(Arc::new(rtc))
}

pub fn build_router(state: AppState) -> Router {
    async fn health() -> &'static str {
        "ok"
    }

    let router = Router::new()
        .route("/health", get(health))
        .merge(api::routes(state.clone()))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    middleware::cors::apply(router)
}
