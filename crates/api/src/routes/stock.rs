//! Stock route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use rocketshoes_core::{ProductId, Stock};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List stock for every product.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Stock>> {
    Json(state.catalogue().stock().to_vec())
}

/// Show stock for a single product.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<ProductId>) -> Result<Json<Stock>> {
    state
        .catalogue()
        .stock_for(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("stock for product {id}")))
}
