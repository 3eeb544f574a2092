//! Unified error system for the menu store
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: JSON body rendered for a failed request
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Menu errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::ProductNotFound).with_detail("id", "P9");
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 6001);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError};
