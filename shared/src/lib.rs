//! Shared types for the menu store
//!
//! Row models for the ingested menu (categories, products, option groups,
//! options and their link tables), catalog search filters, and the
//! structured API error type used by every HTTP surface.

pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, ErrorCode};
