//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use rocketshoes_core::{Product, ProductId};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List every product.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalogue().products().to_vec())
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .catalogue()
        .product(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
