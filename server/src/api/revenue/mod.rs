//! Revenue API Module

mod handler;

use axum::{middleware, routing::get, Router};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/revenue", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/summary", get(handler::summary))
        .layer(middleware::from_fn(require_permission("revenue:read")));

    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route(
            "/{id}/status",
            axum::routing::put(handler::set_status),
        )
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_permission("revenue:manage")));

    read_routes.merge(manage_routes)
}
