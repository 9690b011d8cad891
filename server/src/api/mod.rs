//! API Route Modules
//!
//! One module per resource, each exposing a `router()` that the server
//! merges into the app.

pub mod assistant;
pub mod auth;
pub mod bookings;
pub mod customers;
pub mod equipment;
pub mod health;
pub mod profile;
pub mod revenue;
pub mod sales;
pub mod schedules;
pub mod statistics;
