//! Operator Model
//!
//! Staff accounts that can sign in to the management console.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Operator ID type
pub type OperatorId = RecordId;

/// Operator account matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<OperatorId>,
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

impl Operator {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Create operator payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorCreate {
    pub username: String,
    pub password: String,
    pub display_name: Option<String>,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = Operator::hash_password("deep-blue-7").unwrap();
        let op = Operator {
            id: None,
            username: "skipper".to_string(),
            display_name: "Skipper".to_string(),
            password_hash: hash,
            role: "admin".to_string(),
            permissions: vec!["all".to_string()],
            is_active: true,
            created_at: 0,
        };
        assert!(op.verify_password("deep-blue-7").unwrap());
        assert!(!op.verify_password("wrong").unwrap());
    }
}
