//! User handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    handlers::contests::response::InsertAck,
    services::{SaveUserOutcome, UserService},
    state::AppState,
};

use super::{
    request::SaveUserRequest,
    response::{SaveUserResponse, UserResponse},
};

/// Save user info after login: create the record on first contact, return
/// the existing one unchanged afterwards.
pub async fn save_user(
    State(state): State<AppState>,
    Json(payload): Json<SaveUserRequest>,
) -> AppResult<Json<SaveUserResponse>> {
    let outcome = UserService::save_user(state.db(), &payload.email, payload.extra).await?;

    let response = match outcome {
        SaveUserOutcome::Created(user) => {
            let inserted_id = user.id.map_or_else(String::new, |id| id.to_hex());
            SaveUserResponse {
                success: true,
                message: "User created successfully".to_string(),
                data: Some(InsertAck {
                    acknowledged: true,
                    inserted_id,
                }),
                user: user.into(),
            }
        }
        SaveUserOutcome::AlreadyExists(user) => SaveUserResponse {
            success: true,
            message: "User already exists".to_string(),
            data: None,
            user: user.into(),
        },
    };

    Ok(Json(response))
}

/// Get a user by email
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::get_user_by_email(state.db(), &email).await?;
    Ok(Json(user.into()))
}
