//! Dive Schedule Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Schedule difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Schedule lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Scheduled,
    Cancelled,
    Completed,
}

/// Expected sea/weather conditions for a scheduled dive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub temperature_c: i32,
    pub wind_speed_kmh: i32,
    pub wave_height_m: f64,
    pub visibility_m: i32,
}

/// Dive schedule entity — a plannable slot with fixed capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiveSchedule {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Date in YYYY-MM-DD
    pub date: String,
    /// Time in HH:MM
    pub time: String,
    pub duration_hours: i32,
    pub max_participants: i32,
    pub current_participants: i32,
    pub price: f64,
    pub location: String,
    pub dive_type: String,
    pub difficulty: Difficulty,
    pub guide: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub weather: Option<WeatherConditions>,
    pub status: ScheduleStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl DiveSchedule {
    /// Seats still available on this slot
    pub fn seats_left(&self) -> i32 {
        (self.max_participants - self.current_participants).max(0)
    }
}

/// Create dive schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCreate {
    pub title: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub description: Option<String>,
    pub duration_hours: Option<i32>,
    pub max_participants: Option<i32>,
    pub price: Option<f64>,
    pub dive_type: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub guide: Option<String>,
    pub equipment: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub weather: Option<WeatherConditions>,
}

/// Update dive schedule payload — omitted fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration_hours: Option<i32>,
    pub max_participants: Option<i32>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub dive_type: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub guide: Option<String>,
    pub equipment: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub weather: Option<WeatherConditions>,
    pub status: Option<ScheduleStatus>,
}

// Defaults for a new slot when the form leaves them out
pub const DEFAULT_DURATION_HOURS: i32 = 3;
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 8;
pub const DEFAULT_PRICE: f64 = 75.0;
pub const DEFAULT_GUIDE: &str = "Captain Rodriguez";
pub const DEFAULT_DIVE_TYPE: &str = "Recreational";

pub fn default_equipment() -> Vec<String> {
    ["BCD", "Regulator", "Wetsuit", "Fins", "Mask"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn default_requirements() -> Vec<String> {
    vec!["Open Water Certification".to_string()]
}
