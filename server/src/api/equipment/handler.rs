//! Equipment API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Equipment, EquipmentCreate, EquipmentUpdate, StockStatus};
use crate::db::repository::equipment::EquipmentFilter;
use crate::db::repository::EquipmentRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Catalog item with its derived stock status
#[derive(Debug, Serialize)]
pub struct EquipmentView {
    #[serde(flatten)]
    pub item: Equipment,
    pub stock_status: StockStatus,
}

impl From<Equipment> for EquipmentView {
    fn from(item: Equipment) -> Self {
        let stock_status = item.stock_status();
        Self { item, stock_status }
    }
}

/// GET /api/equipment
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<EquipmentView>>> {
    let repo = EquipmentRepository::new(state.get_db());
    let items = repo
        .find_all(EquipmentFilter {
            category: query.category,
            search: query.search,
        })
        .await?;
    Ok(Json(items.into_iter().map(EquipmentView::from).collect()))
}

/// GET /api/equipment/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EquipmentView>> {
    let repo = EquipmentRepository::new(state.get_db());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Equipment {} not found", id)))?;
    Ok(Json(item.into()))
}

/// POST /api/equipment
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EquipmentCreate>,
) -> AppResult<Json<EquipmentView>> {
    let repo = EquipmentRepository::new(state.get_db());
    let item = repo.create(payload).await?;
    Ok(Json(item.into()))
}

/// PUT /api/equipment/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EquipmentUpdate>,
) -> AppResult<Json<EquipmentView>> {
    let repo = EquipmentRepository::new(state.get_db());
    let item = repo.update(&id, payload).await?;
    Ok(Json(item.into()))
}

/// DELETE /api/equipment/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = EquipmentRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
