//! Option API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::ErrorCode;
use shared::models::{MenuOption, OptionDetail, OptionSearch};

use super::ApiResult;
use crate::db::repository::option;
use crate::error::missing;
use crate::state::AppState;

/// GET /brand/{brand_id}/options
pub async fn list(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    Query(search): Query<OptionSearch>,
) -> ApiResult<Vec<MenuOption>> {
    let options = option::find_all(&state.pool, &brand_id, &search).await?;
    Ok(Json(options))
}

/// GET /brand/{brand_id}/options/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((brand_id, id)): Path<(String, String)>,
) -> ApiResult<OptionDetail> {
    option::find_by_id(&state.pool, &brand_id, &id)
        .await?
        .map(Json)
        .ok_or_else(|| missing(ErrorCode::OptionNotFound, &brand_id, &id))
}
