//! Catalog read API
//!
//! Brand-scoped, read-only queries over the ingested menu.

pub mod category;
pub mod health;
pub mod option;
pub mod option_group;
pub mod product;

use axum::Json;
use axum::Router;
use axum::routing::get;
use shared::error::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// Create the catalog router
pub fn create_router(state: AppState) -> Router {
    let brand = Router::new()
        .route("/categories", get(category::list))
        .route("/categories/{id}", get(category::get_by_id))
        .route("/products", get(product::list))
        .route("/products/{id}", get(product::get_by_id))
        .route("/option-groups", get(option_group::list))
        .route("/option-groups/{id}", get(option_group::get_by_id))
        .route("/options", get(option::list))
        .route("/options/{id}", get(option::get_by_id));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/brand/{brand_id}", brand)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
