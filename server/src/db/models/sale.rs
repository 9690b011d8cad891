//! Equipment Sale Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Payment methods accepted at the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Other,
}

/// Equipment sale entity, one line item per sale record.
///
/// Equipment name and category are copied by value at sale time so the
/// sale history survives catalog edits. The customer link is optional
/// for walk-in purchases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentSale {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub customer: Option<RecordId>,
    pub customer_name: String,
    pub equipment_name: String,
    pub equipment_category: String,
    pub quantity: i32,
    pub unit_price: f64,
    /// Always quantity * unit_price, computed server-side
    pub total_price: f64,
    /// Sale date in YYYY-MM-DD
    pub sale_date: String,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub created_at: i64,
}

/// Create sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub customer: Option<RecordId>,
    pub customer_name: Option<String>,
    pub equipment_name: String,
    pub equipment_category: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub sale_date: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}
