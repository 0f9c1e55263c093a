//! Contest response DTOs

use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::Value;

use crate::models::Contest;

/// Contest response.
///
/// The wire shape keeps the `_id` key the frontend consumes; the stored
/// extra fields are flattened alongside the managed ones.
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "contestType", skip_serializing_if = "Option::is_none")]
    pub contest_type: Option<String>,

    pub status: String,

    pub participants: i64,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl From<Contest> for ContestResponse {
    fn from(contest: Contest) -> Self {
        Self {
            id: contest.id.map_or_else(String::new, |id| id.to_hex()),
            contest_type: contest.contest_type,
            status: contest.status,
            participants: contest.participants,
            created_at: contest.created_at.to_chrono(),
            extra: document_to_json_map(contest.extra),
        }
    }
}

/// Create contest response
#[derive(Debug, Serialize)]
pub struct CreateContestResponse {
    pub success: bool,
    pub message: String,
    pub data: InsertAck,
}

/// Insert acknowledgement carrying the new identifier
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Convert stored extra fields to their JSON representation.
pub(crate) fn document_to_json_map(doc: Document) -> serde_json::Map<String, Value> {
    match Bson::Document(doc).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, oid::ObjectId};

    #[test]
    fn converts_model_to_wire_shape() {
        let id = ObjectId::new();
        let contest = Contest {
            id: Some(id),
            contest_type: Some("Photography".to_string()),
            status: "approved".to_string(),
            participants: 4,
            created_at: bson::DateTime::now(),
            extra: doc! { "prize": "100 USD" },
        };

        let json = serde_json::to_value(ContestResponse::from(contest)).unwrap();
        assert_eq!(json["_id"].as_str().unwrap(), id.to_hex());
        assert_eq!(json["contestType"], "Photography");
        assert_eq!(json["status"], "approved");
        assert_eq!(json["participants"], 4);
        assert_eq!(json["prize"], "100 USD");
        // RFC 3339 timestamp, not a BSON envelope
        assert!(json["createdAt"].is_string());
    }
}
