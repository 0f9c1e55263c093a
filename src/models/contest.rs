//! Contest model

use mongodb::bson::{self, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::constants::contest_status;

/// Contest document as stored in the `contests` collection.
///
/// Only the server-managed fields are typed; whatever else the creator
/// submitted is carried in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Free-form category, e.g. "Photography". Optional: creation performs no
    /// field validation, so it may be absent.
    #[serde(rename = "contestType", default, skip_serializing_if = "Option::is_none")]
    pub contest_type: Option<String>,

    pub status: String,

    #[serde(default)]
    pub participants: i64,

    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,

    #[serde(flatten)]
    pub extra: Document,
}

impl Contest {
    /// Check if the contest has been approved for public listing
    pub fn is_approved(&self) -> bool {
        self.status == contest_status::APPROVED
    }

    /// Check if the contest is still awaiting approval
    pub fn is_pending(&self) -> bool {
        self.status == contest_status::PENDING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn deserializes_document_with_extra_fields() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "contestType": "Photography",
            "status": "approved",
            "participants": 3_i32,
            "createdAt": bson::DateTime::now(),
            "prize": "100 USD",
            "deadline": "2026-01-01",
        };

        let contest: Contest = bson::from_document(doc).unwrap();
        assert!(contest.is_approved());
        assert_eq!(contest.participants, 3);
        assert_eq!(contest.extra.get_str("prize").unwrap(), "100 USD");
        assert_eq!(contest.extra.get_str("deadline").unwrap(), "2026-01-01");
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let doc = doc! {
            "status": "pending",
            "createdAt": bson::DateTime::now(),
        };

        let contest: Contest = bson::from_document(doc).unwrap();
        assert!(contest.is_pending());
        assert!(contest.id.is_none());
        assert!(contest.contest_type.is_none());
        assert_eq!(contest.participants, 0);
    }
}
