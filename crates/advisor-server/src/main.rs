//! Portfolio advisor HTTP Server
//!
//! Axum host for the bot's fulfillment handler. The platform (or a test
//! harness standing in for it) posts each dialog turn to `/fulfillment`
//! and gets the dialog action back.

mod config;
mod handlers;
mod state;

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{fulfillment_handler, health_check};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let registry = portfolio_advisor::registry();
    tracing::info!("Registered {} intents:", registry.len());
    for name in registry.names() {
        tracing::info!("  • {}", name);
    }

    let app = build_router(AppState::new(registry));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("portfolio advisor running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /fulfillment  - Dialog turn");

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/fulfillment", post(fulfillment_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
