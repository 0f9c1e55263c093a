//! Creative Arena - Application Entry Point
//!
//! This is the main entry point for the Creative Arena server.

use std::net::SocketAddr;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use creative_arena::{config::CONFIG, db, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Creative Arena server...");

    // A dead store is fatal here; per-request failures are mapped to 500s.
    tracing::info!("Connecting to MongoDB...");
    let database = db::connect(&CONFIG.database).await?;
    db::ping(&database).await?;
    tracing::info!("Successfully connected to MongoDB");

    db::ensure_indexes(&database).await?;

    // Create application state
    let state = AppState::new(database, CONFIG.clone());

    // Cross-origin access is limited to the configured frontend origin.
    let cors = CorsLayer::new()
        .allow_origin(CONFIG.server.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    // Build the router
    let app = Router::new()
        .merge(handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
