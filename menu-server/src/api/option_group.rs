//! Option Group API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::ErrorCode;
use shared::models::{OptionGroup, OptionGroupDetail, OptionGroupSearch};

use super::ApiResult;
use crate::db::repository::option_group;
use crate::error::missing;
use crate::state::AppState;

/// GET /brand/{brand_id}/option-groups
pub async fn list(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    Query(search): Query<OptionGroupSearch>,
) -> ApiResult<Vec<OptionGroup>> {
    let groups = option_group::find_all(&state.pool, &brand_id, &search).await?;
    Ok(Json(groups))
}

/// GET /brand/{brand_id}/option-groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((brand_id, id)): Path<(String, String)>,
) -> ApiResult<OptionGroupDetail> {
    option_group::find_by_id(&state.pool, &brand_id, &id)
        .await?
        .map(Json)
        .ok_or_else(|| missing(ErrorCode::OptionGroupNotFound, &brand_id, &id))
}
