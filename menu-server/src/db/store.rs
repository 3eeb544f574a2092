//! Transactional menu store
//!
//! An ingestion run writes through one SQLite transaction and either commits
//! the whole document or nothing.

use shared::models::{Category, LinkKind, MenuOption, OptionGroup, Product};
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::repository::{self, RepoResult};
use crate::document::Document;
use crate::ingest::{IngestError, IngestReport, MenuStore, ingest_menu};

pub struct SqliteMenuStore {
    tx: Transaction<'static, Sqlite>,
}

impl SqliteMenuStore {
    pub async fn begin(pool: &SqlitePool) -> RepoResult<Self> {
        Ok(Self {
            tx: pool.begin().await?,
        })
    }

    pub async fn commit(self) -> RepoResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> RepoResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}

impl MenuStore for SqliteMenuStore {
    async fn upsert_category(&mut self, category: &Category) -> RepoResult<()> {
        repository::category::upsert(&mut self.tx, category).await
    }

    async fn upsert_product(&mut self, product: &Product) -> RepoResult<()> {
        repository::product::upsert(&mut self.tx, product).await
    }

    async fn upsert_option_group(&mut self, group: &OptionGroup) -> RepoResult<()> {
        repository::option_group::upsert(&mut self.tx, group).await
    }

    async fn upsert_option(&mut self, option: &MenuOption) -> RepoResult<()> {
        repository::option::upsert(&mut self.tx, option).await
    }

    async fn ensure_link(
        &mut self,
        kind: LinkKind,
        left_id: &str,
        right_id: &str,
    ) -> RepoResult<()> {
        repository::link::ensure(&mut self.tx, kind, left_id, right_id).await?;
        Ok(())
    }
}

/// Ingest `doc` in a single transaction: commit on success, roll back on
/// any error.
pub async fn load_menu(pool: &SqlitePool, doc: &Document<'_>) -> Result<IngestReport, IngestError> {
    let mut store = SqliteMenuStore::begin(pool).await?;
    match ingest_menu(&mut store, doc).await {
        Ok(report) => {
            store.commit().await?;
            tracing::info!(brand_id = %report.brand_id, "Menu committed");
            Ok(report)
        }
        Err(e) => {
            tracing::error!(error = %e, "Menu ingestion failed, rolling back");
            if let Err(rollback_err) = store.rollback().await {
                tracing::error!(error = %rollback_err, "Rollback failed");
            }
            Err(e)
        }
    }
}
