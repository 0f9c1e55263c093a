//! Contest request DTOs

use mongodb::bson::Document;
use serde::Deserialize;

/// Query parameters for the contest listing endpoints
#[derive(Debug, Deserialize)]
pub struct ListContestsQuery {
    /// Case-insensitive substring filter on `contestType`.
    #[serde(rename = "type")]
    pub contest_type: Option<String>,
}

/// Create contest request.
///
/// The body is stored as submitted; `status`, `participants` and `createdAt`
/// are overwritten server-side before the insert. No field is required.
#[derive(Debug, Deserialize)]
pub struct CreateContestRequest {
    #[serde(flatten)]
    pub fields: Document,
}
