//! Application state for the catalog API

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db::{DbService, RepoResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl AppState {
    pub async fn new(config: &Config) -> RepoResult<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self { pool: db.pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
