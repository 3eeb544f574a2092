//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::ErrorCode;
use shared::models::{Product, ProductDetail, ProductSearch};

use super::ApiResult;
use crate::db::repository::product;
use crate::error::missing;
use crate::state::AppState;

/// GET /brand/{brand_id}/products
pub async fn list(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    Query(search): Query<ProductSearch>,
) -> ApiResult<Vec<Product>> {
    let products = product::find_all(&state.pool, &brand_id, &search).await?;
    Ok(Json(products))
}

/// GET /brand/{brand_id}/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((brand_id, id)): Path<(String, String)>,
) -> ApiResult<ProductDetail> {
    product::find_by_id(&state.pool, &brand_id, &id)
        .await?
        .map(Json)
        .ok_or_else(|| missing(ErrorCode::ProductNotFound, &brand_id, &id))
}
