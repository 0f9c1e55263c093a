//! User model

use mongodb::bson::{self, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// User document as stored in the `users` collection.
///
/// Registration stores whatever profile fields the frontend sends (name,
/// photo URL, ...) next to the managed ones; they live in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Unique key, enforced by a unique index on the collection.
    pub email: String,

    pub role: String,

    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,

    #[serde(flatten)]
    pub extra: Document,
}
