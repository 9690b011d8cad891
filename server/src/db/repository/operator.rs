//! Operator Repository

use super::{now_millis, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Operator, OperatorCreate};
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

/// Fallback admin password when ADMIN_PASSWORD is unset
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone)]
pub struct OperatorRepository {
    base: BaseRepository,
}

impl OperatorRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find active operator by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Operator>> {
        let operators: Vec<Operator> = self
            .base
            .db()
            .query("SELECT * FROM operator WHERE username = $username AND is_active = true LIMIT 1")
            .bind(("username", username.to_string()))
            .await?
            .take(0)?;
        Ok(operators.into_iter().next())
    }

    /// Create an operator account
    pub async fn create(&self, data: OperatorCreate) -> RepoResult<Operator> {
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Operator '{}' already exists",
                data.username
            )));
        }

        let password_hash = Operator::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;
        let display_name = data.display_name.unwrap_or_else(|| data.username.clone());

        // The hash is skipped by the entity's Serialize, so it is written
        // through an explicit bind rather than .content()
        let created: Vec<Operator> = self
            .base
            .db()
            .query(
                "CREATE operator SET username = $username, display_name = $display_name, \
                 password_hash = $password_hash, role = $role, permissions = $permissions, \
                 is_active = true, created_at = $created_at",
            )
            .bind(("username", data.username))
            .bind(("display_name", display_name))
            .bind(("password_hash", password_hash))
            .bind(("role", data.role))
            .bind(("permissions", data.permissions))
            .bind(("created_at", now_millis()))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create operator".to_string()))
    }

    /// Seed the default admin account when no operators exist yet
    ///
    /// The password comes from ADMIN_PASSWORD. The fallback is only
    /// meant for local development and is logged loudly.
    pub async fn ensure_default_admin(&self) -> RepoResult<()> {
        let existing: Vec<Operator> = self
            .base
            .db()
            .query("SELECT * FROM operator LIMIT 1")
            .await?
            .take(0)?;
        if !existing.is_empty() {
            return Ok(());
        }

        let password = match std::env::var("ADMIN_PASSWORD") {
            Ok(p) if !p.is_empty() => p,
            _ => {
                tracing::warn!("ADMIN_PASSWORD not set, seeding admin with the default password");
                DEFAULT_ADMIN_PASSWORD.to_string()
            }
        };

        self.create(OperatorCreate {
            username: "admin".to_string(),
            password,
            display_name: Some("Administrator".to_string()),
            role: "admin".to_string(),
            permissions: vec!["all".to_string()],
        })
        .await?;

        tracing::info!("Seeded default admin operator");
        Ok(())
    }
}
