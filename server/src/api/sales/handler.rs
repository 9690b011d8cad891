//! Equipment Sales API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{EquipmentSale, SaleCreate};
use crate::db::repository::SaleRepository;
use crate::utils::AppResult;

/// GET /api/sales
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EquipmentSale>>> {
    let repo = SaleRepository::new(state.get_db());
    let sales = repo.find_all().await?;
    Ok(Json(sales))
}

/// POST /api/sales
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<Json<EquipmentSale>> {
    let repo = SaleRepository::new(state.get_db());
    let sale = repo.create(payload).await?;
    Ok(Json(sale))
}

/// DELETE /api/sales/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = SaleRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
