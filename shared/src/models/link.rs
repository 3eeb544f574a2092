//! Link tables
//!
//! Associations that exist only by virtue of document position. A link is a
//! set member: it has no payload and no identity beyond its two ids.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Option group attached directly under a product
    ProductOptionGroup,
    /// Option group nested under an option
    OptionOptionGroup,
    /// Option belonging to an option group
    OptionGroupOption,
}

impl LinkKind {
    pub const ALL: [LinkKind; 3] = [
        LinkKind::ProductOptionGroup,
        LinkKind::OptionOptionGroup,
        LinkKind::OptionGroupOption,
    ];

    pub const fn table(&self) -> &'static str {
        match self {
            Self::ProductOptionGroup => "product_option_group_link",
            Self::OptionOptionGroup => "option_option_group_link",
            Self::OptionGroupOption => "option_group_option_link",
        }
    }

    /// Column names as `(left, right)`
    pub const fn columns(&self) -> (&'static str, &'static str) {
        match self {
            Self::ProductOptionGroup => ("product_id", "option_group_id"),
            Self::OptionOptionGroup => ("option_id", "option_group_id"),
            Self::OptionGroupOption => ("option_group_id", "option_id"),
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
