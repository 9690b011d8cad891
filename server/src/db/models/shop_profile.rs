//! Shop Profile Model
//!
//! Singleton record holding the business profile shown on the public
//! pages. Stored under a fixed record id so get/update never need a
//! lookup by query.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Fixed record key for the singleton profile
pub const PROFILE_KEY: &str = "main";

/// Weekly opening hours, free-form text per day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub monday: String,
    #[serde(default)]
    pub tuesday: String,
    #[serde(default)]
    pub wednesday: String,
    #[serde(default)]
    pub thursday: String,
    #[serde(default)]
    pub friday: String,
    #[serde(default)]
    pub saturday: String,
    #[serde(default)]
    pub sunday: String,
}

/// Shop profile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopProfile {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub opening_hours: OpeningHours,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub updated_at: i64,
}

impl ShopProfile {
    /// Fresh profile with placeholder content, used on first read
    pub fn empty(now: i64) -> Self {
        ShopProfile {
            id: None,
            name: String::new(),
            tagline: String::new(),
            description: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            opening_hours: OpeningHours::default(),
            certifications: Vec::new(),
            specialties: Vec::new(),
            languages: Vec::new(),
            updated_at: now,
        }
    }
}

/// Update profile payload, full overwrite of the editable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopProfileUpdate {
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub certifications: Option<Vec<String>>,
    pub specialties: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
}
