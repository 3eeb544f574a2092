//! Repository Module
//!
//! Plain async functions per table. Writes take a connection so they can run
//! inside the ingestion transaction; reads take the pool.

pub mod category;
pub mod link;
pub mod option;
pub mod option_group;
pub mod product;

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".to_string()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// Monetary columns are stored as TEXT to keep exact decimal digits.

pub(crate) fn decimal(column: &str, raw: &str) -> RepoResult<Decimal> {
    Decimal::from_str(raw)
        .map_err(|e| RepoError::Database(format!("invalid decimal in `{column}`: {raw:?} ({e})")))
}

pub(crate) fn opt_decimal(column: &str, raw: Option<String>) -> RepoResult<Option<Decimal>> {
    raw.map(|r| decimal(column, &r)).transpose()
}

/// `%term%` with LIKE wildcards in the term escaped (pair with `ESCAPE '\'`).
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Non-empty text filter from a search struct.
pub(crate) fn filter(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::DbService;
    use rust_decimal::Decimal;
    use shared::models::{Category, MenuOption, OptionGroup, Product};
    use sqlx::SqlitePool;

    pub async fn pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    pub fn category(id: &str, brand: &str) -> Category {
        Category {
            id: id.to_string(),
            brand_id: brand.to_string(),
            name: Some(format!("Category {id}")),
            external_ref: None,
            sort_order: None,
        }
    }

    pub fn product(id: &str, brand: &str, category_id: &str) -> Product {
        Product {
            id: id.to_string(),
            brand_id: brand.to_string(),
            category_id: category_id.to_string(),
            chain_product_id: None,
            name: Some(format!("Product {id}")),
            description: None,
            cost: None,
            base_calories: None,
            max_calories: None,
            external_ref: None,
            is_disabled: None,
            minimum_quantity: None,
            quantity_increment: None,
            short_description: None,
            sort_order: None,
            price: Decimal::new(999, 2),
        }
    }

    pub fn option_group(id: &str, brand: &str) -> OptionGroup {
        OptionGroup {
            id: id.to_string(),
            brand_id: brand.to_string(),
            name: None,
            description: Some(format!("Group {id}")),
            mandatory: None,
            supports_choice_quantities: None,
            choice_quantity_increment: None,
            explanation_text: None,
            sort_order: None,
        }
    }

    pub fn option(id: &str, brand: &str) -> MenuOption {
        MenuOption {
            id: id.to_string(),
            brand_id: brand.to_string(),
            name: Some(format!("Option {id}")),
            is_default: None,
            cost: None,
            adjusts_parent_calories: None,
            adjusts_parent_price: None,
            sort_order: None,
            price: Decimal::new(50, 2),
        }
    }
}
