//! Customer Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Emergency contact details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub certification_level: String,
    pub certification_number: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub medical_conditions: Option<String>,
    #[serde(default)]
    pub total_dives: i32,
    pub last_dive_date: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub certification_level: String,
    pub certification_number: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub medical_conditions: Option<String>,
    pub total_dives: Option<i32>,
    pub last_dive_date: Option<String>,
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub certification_level: Option<String>,
    pub certification_number: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub medical_conditions: Option<String>,
    pub total_dives: Option<i32>,
    pub last_dive_date: Option<String>,
}
