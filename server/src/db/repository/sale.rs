//! Equipment Sale Repository

use super::{now_millis, today, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Customer, EquipmentSale, PaymentMethod, SaleCreate};
use crate::utils::validation;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "equipment_sale";

#[derive(Clone)]
pub struct SaleRepository {
    base: BaseRepository,
}

impl SaleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all sales, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<EquipmentSale>> {
        let sales: Vec<EquipmentSale> = self
            .base
            .db()
            .query("SELECT * FROM equipment_sale ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(sales)
    }

    /// Record a sale
    ///
    /// total_price is always quantity * unit_price, never taken from the
    /// payload. A linked customer resolves the display name, otherwise
    /// the payload name is used for walk-ins.
    pub async fn create(&self, data: SaleCreate) -> RepoResult<EquipmentSale> {
        validation::validate_required_text(
            "equipment_name",
            &data.equipment_name,
            validation::MAX_NAME_LEN,
        )
        .map_err(RepoError::Validation)?;
        validation::validate_min_count("quantity", data.quantity as i64, 1)
            .map_err(RepoError::Validation)?;
        validation::validate_non_negative("unit_price", data.unit_price)
            .map_err(RepoError::Validation)?;

        let customer_name = match &data.customer {
            Some(customer_id) => {
                let customer: Option<Customer> =
                    self.base.db().select(customer_id.clone()).await?;
                match customer {
                    Some(c) => c.name,
                    None => {
                        return Err(RepoError::NotFound(format!(
                            "Customer {} not found",
                            customer_id
                        )));
                    }
                }
            }
            None => data
                .customer_name
                .unwrap_or_else(|| "Walk-in".to_string()),
        };

        let sale = EquipmentSale {
            id: None,
            customer: data.customer,
            customer_name,
            equipment_name: data.equipment_name,
            equipment_category: data.equipment_category,
            quantity: data.quantity,
            unit_price: data.unit_price,
            total_price: data.quantity as f64 * data.unit_price,
            sale_date: data.sale_date.unwrap_or_else(today),
            payment_method: data.payment_method.unwrap_or(PaymentMethod::Cash),
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<EquipmentSale> = self.base.db().create(TABLE).content(sale).await?;
        created.ok_or_else(|| RepoError::Database("Failed to record sale".to_string()))
    }

    /// Hard delete a sale record
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<EquipmentSale> = self.base.db().delete(thing).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Sale {} not found", id)));
        }
        Ok(true)
    }

    /// Total revenue across all sales
    pub async fn total_revenue(&self) -> RepoResult<f64> {
        let sales = self.find_all().await?;
        Ok(sales.iter().map(|s| s.total_price).sum())
    }
}
