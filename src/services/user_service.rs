//! User service

use mongodb::Database;
use mongodb::bson::Document;

use crate::db::repositories::UserRepository;
use crate::error::{AppError, AppResult, is_duplicate_key_error};
use crate::models::User;

/// Result of a registration attempt
pub enum SaveUserOutcome {
    /// A new record was inserted.
    Created(User),
    /// A record with this email already existed; it is returned unchanged.
    AlreadyExists(User),
}

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Register a user by email, or return the existing record.
    ///
    /// The insert is attempted first; the unique index on `email` makes the
    /// duplicate-key conflict the authoritative "already exists" signal, so
    /// two concurrent registrations for the same new email cannot both
    /// insert.
    pub async fn save_user(
        db: &Database,
        email: &str,
        extra: Document,
    ) -> AppResult<SaveUserOutcome> {
        match UserRepository::insert(db, email, extra).await {
            Ok(user) => Ok(SaveUserOutcome::Created(user)),
            Err(err) if is_duplicate_key_error(&err) => {
                let user = UserRepository::find_by_email(db, email)
                    .await
                    .map_err(|e| AppError::database("Failed to save user", e))?
                    .ok_or_else(|| {
                        AppError::Internal(anyhow::anyhow!(
                            "user record for {email} missing after duplicate-key conflict"
                        ))
                    })?;
                Ok(SaveUserOutcome::AlreadyExists(user))
            }
            Err(err) => Err(AppError::database("Failed to save user", err)),
        }
    }

    /// Get a user by exact email match
    pub async fn get_user_by_email(db: &Database, email: &str) -> AppResult<User> {
        UserRepository::find_by_email(db, email)
            .await
            .map_err(|e| AppError::database("Failed to fetch user", e))?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
