//! Assistant chat DTOs
//!
//! The assistant is stateless per call: the client keeps the message log for
//! display and sends only the latest user input. The reply carries an optional
//! structured recommendation card plus suggestion chips.

use serde::{Deserialize, Serialize};

/// Chat request — the raw user input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<DiveRecommendation>,
    pub suggestions: Vec<String>,
}

/// Suitability rating for a recommended dive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Sea/weather conditions attached to a recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiveConditions {
    pub temperature_c: i32,
    pub wind_speed_kmh: i32,
    pub visibility_m: i32,
    pub wave_height_m: f64,
}

/// Structured dive recommendation card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiveRecommendation {
    pub title: String,
    pub location: String,
    pub time: String,
    pub difficulty: String,
    pub conditions: DiveConditions,
    pub suitability: Suitability,
    #[serde(default)]
    pub warnings: Vec<String>,
}
