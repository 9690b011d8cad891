//! Customer API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Customer, CustomerCreate, CustomerUpdate};
use crate::db::repository::CustomerRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive search over name and email
    pub search: Option<String>,
}

/// GET /api/customers
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customers = match query.search.as_deref() {
        Some(term) if !term.trim().is_empty() => repo.search(term.trim()).await?,
        _ => repo.find_all().await?,
    };
    Ok(Json(customers))
}

/// GET /api/customers/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    let repo = CustomerRepository::new(state.get_db());
    let customer = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {} not found", id)))?;
    Ok(Json(customer))
}

/// POST /api/customers
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<Customer>> {
    let repo = CustomerRepository::new(state.get_db());
    let customer = repo.create(payload).await?;
    Ok(Json(customer))
}

/// PUT /api/customers/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    let repo = CustomerRepository::new(state.get_db());
    let customer = repo.update(&id, payload).await?;
    Ok(Json(customer))
}

/// DELETE /api/customers/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CustomerRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
