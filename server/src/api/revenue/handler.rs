//! Revenue API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{RevenueCreate, RevenueItem, RevenueSource, RevenueStatus};
use crate::db::repository::revenue::RevenueSummary;
use crate::db::repository::RevenueRepository;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub source: Option<RevenueSource>,
}

/// GET /api/revenue
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<RevenueItem>>> {
    let repo = RevenueRepository::new(state.get_db());
    let items = match query.source {
        Some(source) => repo.find_by_source(source).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(items))
}

/// GET /api/revenue/summary
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<RevenueSummary>> {
    let repo = RevenueRepository::new(state.get_db());
    let summary = repo.summary().await?;
    Ok(Json(summary))
}

/// POST /api/revenue
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RevenueCreate>,
) -> AppResult<Json<RevenueItem>> {
    let repo = RevenueRepository::new(state.get_db());
    let item = repo.create(payload).await?;
    Ok(Json(item))
}

#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: RevenueStatus,
}

/// PUT /api/revenue/:id/status
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusPayload>,
) -> AppResult<Json<RevenueItem>> {
    let repo = RevenueRepository::new(state.get_db());
    let item = repo.set_status(&id, payload.status).await?;
    Ok(Json(item))
}

/// DELETE /api/revenue/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RevenueRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
