//! Database module
//!
//! This module handles the MongoDB connection, index bootstrap, and repositories.

pub mod connection;
pub mod repositories;

use mongodb::{Database, IndexModel, bson::doc, options::IndexOptions};

use crate::constants::collections;
use crate::models::User;

pub use connection::*;

/// Create the indexes the application relies on.
///
/// The unique index on `users.email` is what makes registration atomic: a
/// concurrent insert for the same new email surfaces as a duplicate-key
/// conflict instead of a second record.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let email_unique = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    db.collection::<User>(collections::USERS)
        .create_index(email_unique)
        .await?;

    Ok(())
}
