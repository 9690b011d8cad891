//! Dive Booking API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{BookingCreate, DiveBooking};
use crate::db::repository::BookingRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict to one schedule slot
    pub schedule: Option<String>,
}

/// GET /api/bookings
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<DiveBooking>>> {
    let repo = BookingRepository::new(state.get_db());
    let bookings = match query.schedule {
        Some(schedule_id) => repo.find_by_schedule(&schedule_id).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(bookings))
}

/// GET /api/bookings/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiveBooking>> {
    let repo = BookingRepository::new(state.get_db());
    let booking = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {} not found", id)))?;
    Ok(Json(booking))
}

/// POST /api/schedules/:id/bookings
pub async fn book(
    State(state): State<ServerState>,
    Path(schedule_id): Path<String>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<DiveBooking>> {
    let repo = BookingRepository::new(state.get_db());
    let booking = repo.book(&schedule_id, payload).await?;
    Ok(Json(booking))
}

/// DELETE /api/bookings/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = BookingRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
