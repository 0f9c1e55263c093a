//! Liveness handler

use axum::{Router, routing::get};

use crate::state::AppState;

/// Plain-text liveness message served at the root path
async fn liveness() -> &'static str {
    "Creative Arena Server is running!"
}

/// Liveness routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(liveness))
}
