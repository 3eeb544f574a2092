//! Repository → API error bridge
//!
//! Lets handlers propagate `RepoError` with `?` while storage failures are
//! logged once here and never leak their text to clients.

use shared::error::{AppError, ErrorCode};

use crate::db::RepoError;

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(what) => AppError::not_found(what),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// 404 for an id that does not exist under the brand
pub fn missing(code: ErrorCode, brand_id: &str, id: &str) -> AppError {
    AppError::new(code)
        .with_detail("brand_id", brand_id)
        .with_detail("id", id)
}
