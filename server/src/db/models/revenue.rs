//! Revenue Item Model

use super::sale::PaymentMethod;
use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Where a revenue line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueSource {
    Booking,
    Equipment,
    Rental,
    Course,
    Other,
}

impl RevenueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueSource::Booking => "booking",
            RevenueSource::Equipment => "equipment",
            RevenueSource::Rental => "rental",
            RevenueSource::Course => "course",
            RevenueSource::Other => "other",
        }
    }
}

/// Settlement state of a revenue line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueStatus {
    Pending,
    Completed,
    Refunded,
}

/// Revenue item entity, a single income line in the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub description: String,
    pub amount: f64,
    pub source: RevenueSource,
    /// Date in YYYY-MM-DD
    pub date: String,
    pub status: RevenueStatus,
    /// Who paid, when the line is tied to a person
    pub customer_name: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create revenue item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueCreate {
    pub description: String,
    pub amount: f64,
    pub source: RevenueSource,
    pub date: Option<String>,
    pub status: Option<RevenueStatus>,
    pub customer_name: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}
