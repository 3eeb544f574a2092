//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product row
///
/// `category_id` is the category the product sat under in the most recent
/// ingestion; re-ingesting under another category moves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub brand_id: String,
    pub category_id: String,
    pub chain_product_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
    pub base_calories: Option<i32>,
    pub max_calories: Option<i32>,
    pub external_ref: Option<String>,
    pub is_disabled: Option<bool>,
    pub minimum_quantity: Option<i32>,
    pub quantity_increment: Option<i32>,
    pub short_description: Option<String>,
    pub sort_order: Option<i32>,
    /// Read from the required `pricing/price` element
    pub price: Decimal,
}

/// Option group reference attached to a product or an option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachedOptionGroup {
    pub id: String,
    pub description: Option<String>,
}

/// Product with its directly attached modifier groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub option_groups: Vec<AttachedOptionGroup>,
}

/// Product search filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSearch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub extref: Option<String>,
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub is_disabled: Option<bool>,
}
