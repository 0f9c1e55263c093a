//! User request DTOs

use mongodb::bson::Document;
use serde::Deserialize;

/// Save user request.
///
/// `email` is the only required field; every other profile field the
/// frontend sends is stored as submitted, except the server-managed keys.
#[derive(Debug, Deserialize)]
pub struct SaveUserRequest {
    pub email: String,

    #[serde(flatten)]
    pub extra: Document,
}
