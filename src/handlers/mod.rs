//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod contests;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(contests::routes())
        .merge(users::routes())
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{config::Config, state::AppState};

    /// Router over a lazy client: no connection is made until a collection
    /// operation runs, so routes that never reach the store can be exercised
    /// in isolation.
    async fn test_app() -> Router {
        let client = mongodb::Client::with_uri_str("mongodb://127.0.0.1:27017")
            .await
            .unwrap();
        let state = AppState::new(client.database("creativeArenaTest"), Config::for_tests());
        super::routes().with_state(state)
    }

    #[tokio::test]
    async fn liveness_returns_plain_text() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Creative Arena Server is running!");
    }

    #[tokio::test]
    async fn malformed_contest_id_is_rejected_before_the_store() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/contests/not-an-object-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_email_is_a_client_error() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"displayName":"no email"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
