//! Equipment Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Physical condition of an equipment item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Good,
    Fair,
    Poor,
}

/// Stock level classification for the shop view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

/// Low-stock threshold (inclusive)
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Equipment entity — a shop catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub stock: i32,
    #[serde(default)]
    pub is_rental: bool,
    pub rental_price_per_day: Option<f64>,
    pub condition: Condition,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Equipment {
    pub fn stock_status(&self) -> StockStatus {
        if self.stock == 0 {
            StockStatus::OutOfStock
        } else if self.stock <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Effective price shown to the customer (sale price wins)
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }
}

/// Create equipment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCreate {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub description: Option<String>,
    pub sale_price: Option<f64>,
    pub stock: Option<i32>,
    pub is_rental: Option<bool>,
    pub rental_price_per_day: Option<f64>,
    pub condition: Option<Condition>,
}

/// Update equipment payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub sale_price: Option<f64>,
    pub stock: Option<i32>,
    pub is_rental: Option<bool>,
    pub rental_price_per_day: Option<f64>,
    pub condition: Option<Condition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(stock: i32, price: f64, sale_price: Option<f64>) -> Equipment {
        Equipment {
            id: None,
            name: "Regulator".to_string(),
            description: String::new(),
            category: "Regulators".to_string(),
            brand: "Scubapro".to_string(),
            price,
            sale_price,
            stock,
            is_rental: false,
            rental_price_per_day: None,
            condition: Condition::New,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_stock_status_classification() {
        assert_eq!(item(0, 100.0, None).stock_status(), StockStatus::OutOfStock);
        assert_eq!(item(5, 100.0, None).stock_status(), StockStatus::LowStock);
        assert_eq!(item(6, 100.0, None).stock_status(), StockStatus::InStock);
    }

    #[test]
    fn test_effective_price_prefers_sale_price() {
        assert_eq!(item(1, 100.0, Some(80.0)).effective_price(), 80.0);
        assert_eq!(item(1, 100.0, None).effective_price(), 100.0);
    }
}
