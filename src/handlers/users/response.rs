//! User response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::handlers::contests::response::{InsertAck, document_to_json_map};
use crate::models::User;

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,

    pub email: String,

    pub role: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map_or_else(String::new, |id| id.to_hex()),
            email: user.email,
            role: user.role,
            created_at: user.created_at.to_chrono(),
            extra: document_to_json_map(user.extra),
        }
    }
}

/// Save user response.
///
/// `data` is present only when a new record was inserted.
#[derive(Debug, Serialize)]
pub struct SaveUserResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InsertAck>,
    pub user: UserResponse,
}
