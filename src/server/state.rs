//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Match pipeline used by the demo service callbacks

use sea_orm::DatabaseConnection;

use crate::server::service::pipeline::MatchPipeline;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `MatchPipeline` shares its deduplication guards between clones
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Processing path for demo service callbacks.
    ///
    /// Shared with the poller so webhook and polling requests are deduplicated together.
    pub pipeline: MatchPipeline,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `pipeline` - Match pipeline shared with the poller
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, pipeline: MatchPipeline) -> Self {
        Self { db, pipeline }
    }
}
