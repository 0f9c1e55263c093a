//! Contest repository

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};

use crate::constants::{collections, contest_status};
use crate::models::Contest;

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// List approved contests, optionally filtered by a case-insensitive
    /// substring of `contestType`.
    pub async fn find_approved(
        db: &Database,
        contest_type: Option<&str>,
    ) -> Result<Vec<Contest>, mongodb::error::Error> {
        db.collection::<Contest>(collections::CONTESTS)
            .find(approved_filter(contest_type))
            .await?
            .try_collect()
            .await
    }

    /// Find a contest by id
    pub async fn find_by_id(
        db: &Database,
        id: ObjectId,
    ) -> Result<Option<Contest>, mongodb::error::Error> {
        db.collection::<Contest>(collections::CONTESTS)
            .find_one(doc! { "_id": id })
            .await
    }

    /// Insert a new contest document and return its generated id
    pub async fn insert(
        db: &Database,
        mut contest: Document,
    ) -> Result<ObjectId, mongodb::error::Error> {
        let id = stamp_new_contest(&mut contest);

        db.collection::<Document>(collections::CONTESTS)
            .insert_one(contest)
            .await?;

        Ok(id)
    }
}

/// Filter for the public contest listing: approved only, optional type match.
fn approved_filter(contest_type: Option<&str>) -> Document {
    let mut filter = doc! { "status": contest_status::APPROVED };
    if let Some(pattern) = contest_type {
        // Escape the user input so it matches as a literal substring.
        filter.insert(
            "contestType",
            doc! { "$regex": regex::escape(pattern), "$options": "i" },
        );
    }
    filter
}

/// Force the server-assigned fields onto a new contest document.
///
/// Client-supplied values for `_id`, `status`, `participants` and `createdAt`
/// are overwritten; every other field is stored as submitted.
fn stamp_new_contest(contest: &mut Document) -> ObjectId {
    let id = ObjectId::new();
    contest.insert("_id", id);
    contest.insert("status", contest_status::PENDING);
    contest.insert("participants", 0_i32);
    contest.insert("createdAt", DateTime::now());
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_restricts_to_approved() {
        let filter = approved_filter(None);
        assert_eq!(filter.get_str("status").unwrap(), "approved");
        assert!(!filter.contains_key("contestType"));
    }

    #[test]
    fn filter_adds_case_insensitive_type_match() {
        let filter = approved_filter(Some("photo"));
        let regex = filter.get_document("contestType").unwrap();
        assert_eq!(regex.get_str("$regex").unwrap(), "photo");
        assert_eq!(regex.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn filter_escapes_regex_metacharacters() {
        let filter = approved_filter(Some("c++ (advanced)"));
        let regex = filter.get_document("contestType").unwrap();
        assert_eq!(regex.get_str("$regex").unwrap(), r"c\+\+ \(advanced\)");
    }

    #[test]
    fn stamp_overwrites_client_supplied_managed_fields() {
        let mut contest = doc! {
            "contestType": "Photography",
            "status": "approved",
            "participants": 99_i32,
            "createdAt": "2020-01-01",
            "prize": "100 USD",
        };

        let id = stamp_new_contest(&mut contest);

        assert_eq!(contest.get_object_id("_id").unwrap(), id);
        assert_eq!(contest.get_str("status").unwrap(), "pending");
        assert_eq!(contest.get_i32("participants").unwrap(), 0);
        assert!(contest.get_datetime("createdAt").is_ok());
        // Everything else passes through untouched.
        assert_eq!(contest.get_str("contestType").unwrap(), "Photography");
        assert_eq!(contest.get_str("prize").unwrap(), "100 USD");
    }
}
