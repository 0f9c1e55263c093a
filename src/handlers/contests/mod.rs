//! Contest handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contests",
            get(handler::list_contests).post(handler::create_contest),
        )
        // Legacy singular path used by the frontend; same handler, no drift.
        .route("/contest", get(handler::list_contests))
        .route("/contests/{id}", get(handler::get_contest))
}
