//! Customer Repository

use super::{now_millis, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Customer, CustomerCreate, CustomerUpdate};
use crate::utils::validation;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all customers, alphabetical
    pub async fn find_all(&self) -> RepoResult<Vec<Customer>> {
        let customers: Vec<Customer> = self
            .base
            .db()
            .query("SELECT * FROM customer ORDER BY name")
            .await?
            .take(0)?;
        Ok(customers)
    }

    /// Case-insensitive search over name and email
    pub async fn search(&self, term: &str) -> RepoResult<Vec<Customer>> {
        let pattern = term.to_lowercase();
        let customers: Vec<Customer> = self
            .base
            .db()
            .query(
                "SELECT * FROM customer \
                 WHERE string::lowercase(name) CONTAINS $term \
                    OR string::lowercase(email) CONTAINS $term \
                 ORDER BY name",
            )
            .bind(("term", pattern))
            .await?
            .take(0)?;
        Ok(customers)
    }

    /// Find customer by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Customer>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let customer: Option<Customer> = self.base.db().select(thing).await?;
        Ok(customer)
    }

    /// Create a new customer
    pub async fn create(&self, data: CustomerCreate) -> RepoResult<Customer> {
        validation::validate_required_text("name", &data.name, validation::MAX_NAME_LEN)
            .map_err(RepoError::Validation)?;
        validation::validate_required_text("email", &data.email, validation::MAX_EMAIL_LEN)
            .map_err(RepoError::Validation)?;

        let now = now_millis();
        let customer = Customer {
            id: None,
            name: data.name,
            email: data.email,
            phone: data.phone,
            certification_level: data.certification_level,
            certification_number: data.certification_number,
            emergency_contact: data.emergency_contact,
            medical_conditions: data.medical_conditions,
            total_dives: data.total_dives.unwrap_or(0),
            last_dive_date: data.last_dive_date,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Customer> = self.base.db().create(TABLE).content(customer).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }

    /// Update a customer
    pub async fn update(&self, id: &str, data: CustomerUpdate) -> RepoResult<Customer> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", id)))?;

        let updated = Customer {
            id: None,
            name: data.name.unwrap_or(existing.name),
            email: data.email.unwrap_or(existing.email),
            phone: data.phone.unwrap_or(existing.phone),
            certification_level: data
                .certification_level
                .unwrap_or(existing.certification_level),
            certification_number: data.certification_number.or(existing.certification_number),
            emergency_contact: data.emergency_contact.or(existing.emergency_contact),
            medical_conditions: data.medical_conditions.or(existing.medical_conditions),
            total_dives: data.total_dives.unwrap_or(existing.total_dives),
            last_dive_date: data.last_dive_date.or(existing.last_dive_date),
            created_at: existing.created_at,
            updated_at: now_millis(),
        };

        let result: Option<Customer> = self.base.db().update(thing).content(updated).await?;
        result.ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", id)))
    }

    /// Hard delete a customer
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<Customer> = self.base.db().delete(thing).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Customer {} not found", id)));
        }
        Ok(true)
    }
}
