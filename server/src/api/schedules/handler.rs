//! Dive Schedule API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Difficulty, DiveSchedule, ScheduleCreate, ScheduleUpdate};
use crate::db::repository::schedule::ScheduleFilter;
use crate::db::repository::ScheduleRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// all | today | upcoming
    pub filter: Option<String>,
    pub difficulty: Option<Difficulty>,
}

/// GET /api/schedules
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<DiveSchedule>>> {
    let filter = match query.filter.as_deref() {
        None | Some("all") => ScheduleFilter {
            difficulty: query.difficulty,
            ..Default::default()
        },
        Some("today") => ScheduleFilter {
            today_only: true,
            difficulty: query.difficulty,
            ..Default::default()
        },
        Some("upcoming") => ScheduleFilter {
            upcoming_only: true,
            difficulty: query.difficulty,
            ..Default::default()
        },
        Some(other) => {
            return Err(AppError::validation(format!("Unknown filter: {}", other)));
        }
    };

    let repo = ScheduleRepository::new(state.get_db());
    let schedules = repo.find_all(filter).await?;
    Ok(Json(schedules))
}

/// GET /api/schedules/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiveSchedule>> {
    let repo = ScheduleRepository::new(state.get_db());
    let schedule = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Schedule {} not found", id)))?;
    Ok(Json(schedule))
}

/// POST /api/schedules
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ScheduleCreate>,
) -> AppResult<Json<DiveSchedule>> {
    let repo = ScheduleRepository::new(state.get_db());
    let schedule = repo.create(payload).await?;
    Ok(Json(schedule))
}

/// PUT /api/schedules/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ScheduleUpdate>,
) -> AppResult<Json<DiveSchedule>> {
    let repo = ScheduleRepository::new(state.get_db());
    let schedule = repo.update(&id, payload).await?;
    Ok(Json(schedule))
}

/// DELETE /api/schedules/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ScheduleRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
