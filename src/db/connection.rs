//! Database connection management

use mongodb::{Client, Database, bson::doc};

use crate::config::DatabaseConfig;

/// Create a MongoDB client and select the configured database.
///
/// The driver connects lazily; call [`ping`] to force a round-trip.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.uri).await?;
    Ok(client.database(&config.name))
}

/// Test the connection with an admin ping
pub async fn ping(db: &Database) -> Result<(), mongodb::error::Error> {
    db.client()
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}
