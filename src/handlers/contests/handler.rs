//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{error::AppResult, services::ContestService, state::AppState};

use super::{
    request::{CreateContestRequest, ListContestsQuery},
    response::{ContestResponse, CreateContestResponse, InsertAck},
};

/// List approved contests, optionally filtered by contest type
pub async fn list_contests(
    State(state): State<AppState>,
    Query(query): Query<ListContestsQuery>,
) -> AppResult<Json<Vec<ContestResponse>>> {
    // An empty `type` parameter means no filter.
    let contest_type = query.contest_type.as_deref().filter(|t| !t.is_empty());

    let contests = ContestService::list_contests(state.db(), contest_type).await?;

    Ok(Json(
        contests.into_iter().map(ContestResponse::from).collect(),
    ))
}

/// Get a single contest by id
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_contest(state.db(), &id).await?;
    Ok(Json(contest.into()))
}

/// Submit a new contest for approval
pub async fn create_contest(
    State(state): State<AppState>,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<Json<CreateContestResponse>> {
    let inserted_id = ContestService::create_contest(state.db(), payload.fields).await?;

    Ok(Json(CreateContestResponse {
        success: true,
        message: "Contest submitted for approval".to_string(),
        data: InsertAck {
            acknowledged: true,
            inserted_id: inserted_id.to_hex(),
        },
    }))
}
