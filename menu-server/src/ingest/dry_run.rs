//! Store that discards every write

use shared::models::{Category, LinkKind, MenuOption, OptionGroup, Product};

use super::MenuStore;
use crate::db::RepoResult;

/// Validates a document through the full traversal without a database.
#[derive(Debug, Default)]
pub struct DryRunStore;

impl MenuStore for DryRunStore {
    async fn upsert_category(&mut self, _category: &Category) -> RepoResult<()> {
        Ok(())
    }

    async fn upsert_product(&mut self, _product: &Product) -> RepoResult<()> {
        Ok(())
    }

    async fn upsert_option_group(&mut self, _group: &OptionGroup) -> RepoResult<()> {
        Ok(())
    }

    async fn upsert_option(&mut self, _option: &MenuOption) -> RepoResult<()> {
        Ok(())
    }

    async fn ensure_link(&mut self, _kind: LinkKind, _left: &str, _right: &str) -> RepoResult<()> {
        Ok(())
    }
}
