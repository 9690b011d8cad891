//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.

// Auth
pub mod operator;

// Dive Operations
pub mod booking;
pub mod schedule;

// Customers
pub mod customer;

// Shop
pub mod equipment;
pub mod sale;

// Finance
pub mod revenue;

// Business
pub mod shop_profile;

// Re-exports
pub use booking::BookingRepository;
pub use customer::CustomerRepository;
pub use equipment::EquipmentRepository;
pub use operator::OperatorRepository;
pub use revenue::RevenueRepository;
pub use sale::SaleRepository;
pub use schedule::ScheduleRepository;
pub use shop_profile::ShopProfileRepository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::CapacityExceeded(msg) => AppError::business_rule(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Unix timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date as YYYY-MM-DD
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
