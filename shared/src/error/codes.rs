//! Unified error codes for the menu store
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Menu errors (catalog lookups)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so API clients can switch
/// on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Resource not found
    NotFound = 3,

    // ==================== 6xxx: Menu ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Category not found
    CategoryNotFound = 6101,
    /// Option group not found
    OptionGroupNotFound = 6201,
    /// Option not found
    OptionNotFound = 6301,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::NotFound => "Resource not found",

            // Menu
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::OptionGroupNotFound => "Option group not found",
            ErrorCode::OptionNotFound => "Option not found",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            3 => Ok(ErrorCode::NotFound),

            // Menu
            6001 => Ok(ErrorCode::ProductNotFound),
            6101 => Ok(ErrorCode::CategoryNotFound),
            6201 => Ok(ErrorCode::OptionGroupNotFound),
            6301 => Ok(ErrorCode::OptionNotFound),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
