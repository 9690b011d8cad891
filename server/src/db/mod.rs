//! Database Module
//!
//! Owns the embedded SurrealDB instance and runs schema setup on
//! startup. All statements are idempotent so the server can restart
//! against an existing data directory.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "dive";
const DATABASE: &str = "main";

/// Tables created at startup
const TABLES: &[&str] = &[
    "operator",
    "dive_schedule",
    "dive_booking",
    "customer",
    "equipment",
    "equipment_sale",
    "revenue_item",
    "shop_profile",
];

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    db: Surreal<Db>,
}

impl DbService {
    /// Open the database at the given directory and apply the schema
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database opened at {}", db_dir.display());

        let service = Self { db };
        service.apply_schema().await?;
        Ok(service)
    }

    pub fn db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    async fn apply_schema(&self) -> Result<(), AppError> {
        for table in TABLES {
            self.db
                .query(format!("DEFINE TABLE IF NOT EXISTS {table} SCHEMALESS"))
                .await
                .map_err(|e| AppError::database(format!("Failed to define {table}: {e}")))?;
        }

        self.db
            .query("DEFINE INDEX IF NOT EXISTS operator_username ON TABLE operator COLUMNS username UNIQUE")
            .await
            .map_err(|e| AppError::database(format!("Failed to define index: {e}")))?;

        tracing::info!("Database schema applied");
        Ok(())
    }
}
