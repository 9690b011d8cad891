//! Dive Desk Server - dive shop management backend
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── auth/          # JWT authentication, permissions
//! ├── db/            # Embedded SurrealDB, models, repositories
//! ├── api/           # HTTP routes and handlers
//! ├── assistant/     # Scripted assistant + text generation boundary
//! └── utils/         # Errors, logging, validation
//! ```

pub mod api;
pub mod assistant;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured auth events via tracing
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
