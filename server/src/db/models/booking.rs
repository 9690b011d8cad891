//! Dive Booking Model
//!
//! A booking embeds an immutable snapshot of the schedule it was made
//! against. The snapshot preserves the slot's details as they were at
//! booking time, so later edits or deletion of the schedule do not
//! rewrite booking history.

use super::schedule::Difficulty;
use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Schedule details copied by value at booking time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    #[serde(with = "serde_helpers::record_id")]
    pub schedule_id: RecordId,
    pub title: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub duration_hours: i32,
    pub dive_type: String,
    pub difficulty: Difficulty,
    pub guide: String,
}

/// Dive booking entity — a customer's reservation against a schedule slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiveBooking {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub special_requests: Option<String>,
    /// Seats this booking occupies on the schedule
    pub seats_requested: i32,
    /// Price per seat, copied from the schedule at booking time
    pub price: f64,
    pub status: BookingStatus,
    pub schedule: ScheduleSnapshot,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub special_requests: Option<String>,
    /// Defaults to 1 when omitted
    pub seats_requested: Option<i32>,
}
