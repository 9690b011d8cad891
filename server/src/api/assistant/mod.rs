//! Assistant API Module

mod handler;

use axum::{middleware, routing::post, Router};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/assistant/chat", post(handler::chat))
        .layer(middleware::from_fn(require_permission("assistant:use")))
}
