//! Category API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::ErrorCode;
use shared::models::{CategorySearch, CategoryWithProducts};

use super::ApiResult;
use crate::db::repository::category;
use crate::error::missing;
use crate::state::AppState;

/// GET /brand/{brand_id}/categories
pub async fn list(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    Query(search): Query<CategorySearch>,
) -> ApiResult<Vec<CategoryWithProducts>> {
    let categories = category::find_all(&state.pool, &brand_id, &search).await?;
    Ok(Json(categories))
}

/// GET /brand/{brand_id}/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((brand_id, id)): Path<(String, String)>,
) -> ApiResult<CategoryWithProducts> {
    category::find_by_id(&state.pool, &brand_id, &id)
        .await?
        .map(Json)
        .ok_or_else(|| missing(ErrorCode::CategoryNotFound, &brand_id, &id))
}
