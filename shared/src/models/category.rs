//! Category Model

use serde::{Deserialize, Serialize};

/// Category row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub brand_id: String,
    pub name: Option<String>,
    pub external_ref: Option<String>,
    pub sort_order: Option<i32>,
}

/// Product reference embedded in a category listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProduct {
    pub id: String,
    pub name: Option<String>,
}

/// Category with the products currently assigned to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<CategoryProduct>,
}

/// Category search filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorySearch {
    /// Case-insensitive substring match on name
    pub name: Option<String>,
    /// Exact match on external reference
    pub extref: Option<String>,
}
