//! Option Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttachedOptionGroup;

/// Option row (one selectable modifier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOption {
    pub id: String,
    pub brand_id: String,
    pub name: Option<String>,
    pub is_default: Option<bool>,
    pub cost: Option<Decimal>,
    pub adjusts_parent_calories: Option<bool>,
    pub adjusts_parent_price: Option<bool>,
    pub sort_order: Option<i32>,
    /// Read from the required `pricing/price` element
    pub price: Decimal,
}

/// Option with the nested modifier groups it opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDetail {
    #[serde(flatten)]
    pub option: MenuOption,
    pub option_groups: Vec<AttachedOptionGroup>,
}

/// Option search filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionSearch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub is_default: Option<bool>,
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub adjusts_parent_price: Option<bool>,
    /// Only options that are members of this group
    pub option_group_id: Option<String>,
}
