//! Data models
//!
//! Row types for the normalized menu schema. Every row carries the brand it
//! was ingested under; ids come from the source document and are text.
//! Monetary columns are [`rust_decimal::Decimal`], serialized as strings.

pub mod category;
pub mod link;
pub mod option;
pub mod option_group;
pub mod product;

// Re-exports
pub use category::*;
pub use link::*;
pub use option::*;
pub use option_group::*;
pub use product::*;

use serde::{Deserialize, Deserializer};

/// Parse a boolean flag the way menu documents and query strings spell it.
///
/// Accepts `true`/`false`/`1`/`0`, case-insensitive. Anything else is `None`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Serde adapter for optional flag query parameters (`?is_default=1`).
pub(crate) fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => parse_flag(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid boolean flag: {s}"))),
    }
}
