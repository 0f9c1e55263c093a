//! User repository

use mongodb::Database;
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};

use crate::constants::{collections, roles};
use crate::models::User;

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Find a user by exact email match
    pub async fn find_by_email(
        db: &Database,
        email: &str,
    ) -> Result<Option<User>, mongodb::error::Error> {
        db.collection::<User>(collections::USERS)
            .find_one(doc! { "email": email })
            .await
    }

    /// Insert a new user record.
    ///
    /// The unique index on `email` turns a concurrent insert for the same
    /// address into a duplicate-key error rather than a second record.
    pub async fn insert(
        db: &Database,
        email: &str,
        extra: Document,
    ) -> Result<User, mongodb::error::Error> {
        let user = new_user(email, extra);

        db.collection::<User>(collections::USERS)
            .insert_one(&user)
            .await?;

        Ok(user)
    }
}

/// Build a user record with the server-assigned fields in place.
///
/// Client payloads cannot override the managed keys; `role` and `createdAt`
/// are always set here.
fn new_user(email: &str, mut extra: Document) -> User {
    extra.remove("_id");
    extra.remove("email");
    extra.remove("role");
    extra.remove("createdAt");

    User {
        id: Some(ObjectId::new()),
        email: email.to_owned(),
        role: roles::USER.to_owned(),
        created_at: DateTime::now(),
        extra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_forces_role_and_timestamp() {
        let extra = doc! {
            "role": "admin",
            "createdAt": "1970-01-01",
            "displayName": "Ada",
        };

        let user = new_user("ada@example.com", extra);
        assert!(user.id.is_some());
        assert_eq!(user.role, "user");
        assert_eq!(user.extra.get_str("displayName").unwrap(), "Ada");
        assert!(!user.extra.contains_key("role"));
        assert!(!user.extra.contains_key("createdAt"));
    }

    #[test]
    fn new_user_serializes_without_duplicate_keys() {
        let user = new_user("ada@example.com", doc! { "displayName": "Ada" });

        let doc = mongodb::bson::to_document(&user).unwrap();
        assert!(doc.get_object_id("_id").is_ok());
        assert_eq!(doc.get_str("email").unwrap(), "ada@example.com");
        assert_eq!(doc.get_str("role").unwrap(), "user");
        assert!(doc.get_datetime("createdAt").is_ok());
        assert_eq!(doc.get_str("displayName").unwrap(), "Ada");
    }
}
