//! Option Group Model

use serde::{Deserialize, Serialize};

/// Option group row (a set of selectable modifiers)
///
/// Groups are shared structure: one group may be attached to many products
/// and many options at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub id: String,
    pub brand_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub mandatory: Option<bool>,
    pub supports_choice_quantities: Option<bool>,
    pub choice_quantity_increment: Option<i32>,
    pub explanation_text: Option<String>,
    pub sort_order: Option<i32>,
}

/// Option reference embedded in a group listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMemberOption {
    pub id: String,
    pub name: Option<String>,
}

/// Option group with its member options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroupDetail {
    #[serde(flatten)]
    pub option_group: OptionGroup,
    pub options: Vec<GroupMemberOption>,
}

/// Option group search filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionGroupSearch {
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub mandatory: Option<bool>,
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub supports_choice_quantities: Option<bool>,
    pub explanation_text: Option<String>,
}
