//! Contest service

use mongodb::Database;
use mongodb::bson::{Document, oid::ObjectId};

use crate::db::repositories::ContestRepository;
use crate::error::{AppError, AppResult};
use crate::models::Contest;

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// List approved contests, optionally filtered by contest type
    pub async fn list_contests(
        db: &Database,
        contest_type: Option<&str>,
    ) -> AppResult<Vec<Contest>> {
        ContestRepository::find_approved(db, contest_type)
            .await
            .map_err(|e| AppError::database("Failed to fetch contests", e))
    }

    /// Get a contest by its string id.
    ///
    /// The id shape is validated before the store is queried, so a malformed
    /// id is a client error rather than a store failure.
    pub async fn get_contest(db: &Database, id: &str) -> AppResult<Contest> {
        let id = ObjectId::parse_str(id)
            .map_err(|_| AppError::InvalidInput("Invalid contest id".to_string()))?;

        ContestRepository::find_by_id(db, id)
            .await
            .map_err(|e| AppError::database("Failed to fetch contest", e))?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))
    }

    /// Submit a new contest for approval and return its id
    pub async fn create_contest(db: &Database, fields: Document) -> AppResult<ObjectId> {
        ContestRepository::insert(db, fields)
            .await
            .map_err(|e| AppError::database("Failed to add contest", e))
    }
}
