//! Shop Profile API Handlers

use axum::{extract::State, Json};

use crate::core::ServerState;
use crate::db::models::{ShopProfile, ShopProfileUpdate};
use crate::db::repository::ShopProfileRepository;
use crate::utils::AppResult;

/// GET /api/profile
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<ShopProfile>> {
    let repo = ShopProfileRepository::new(state.get_db());
    let profile = repo.get().await?;
    Ok(Json(profile))
}

/// PUT /api/profile
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<ShopProfileUpdate>,
) -> AppResult<Json<ShopProfile>> {
    let repo = ShopProfileRepository::new(state.get_db());
    let profile = repo.save(payload).await?;
    Ok(Json(profile))
}
