//! Shared types for the dive-desk services
//!
//! Request/response DTOs exchanged between the server and its clients.

pub mod assistant;
pub mod client;

pub use serde::{Deserialize, Serialize};
