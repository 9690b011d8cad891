//! Dive Booking API Module
//!
//! Booking creation lives under the schedule it books onto, the rest
//! of the booking routes live under /api/bookings.

mod handler;

use axum::{middleware, routing::get, routing::post, Router};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let book_route = Router::new()
        .route("/api/schedules/{id}/bookings", post(handler::book))
        .layer(middleware::from_fn(require_permission("bookings:manage")));

    Router::new()
        .nest("/api/bookings", routes())
        .merge(book_route)
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .layer(middleware::from_fn(require_permission("bookings:read")));

    let manage_routes = Router::new()
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_permission("bookings:manage")));

    read_routes.merge(manage_routes)
}
