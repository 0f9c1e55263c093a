//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use mongodb::{Collection, Database, bson::Document};

use crate::config::Config;
use crate::constants::collections;
use crate::models::{Contest, User};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database handle
    pub db: Database,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: Database, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, config }),
        }
    }

    /// Get a reference to the database handle
    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// The contests collection
    pub fn contests(&self) -> Collection<Contest> {
        self.inner.db.collection(collections::CONTESTS)
    }

    /// The users collection
    pub fn users(&self) -> Collection<User> {
        self.inner.db.collection(collections::USERS)
    }

    /// The submissions collection. No route reads or writes it yet.
    pub fn submissions(&self) -> Collection<Document> {
        self.inner.db.collection(collections::SUBMISSIONS)
    }
}
