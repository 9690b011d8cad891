//! Equipment Repository

use super::{now_millis, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Condition, Equipment, EquipmentCreate, EquipmentUpdate};
use crate::utils::validation;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "equipment";

/// List filter for the shop catalog
#[derive(Debug, Clone, Default)]
pub struct EquipmentFilter {
    pub category: Option<String>,
    /// Case-insensitive match over name and brand
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct EquipmentRepository {
    base: BaseRepository,
}

impl EquipmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find catalog items matching the filter, alphabetical
    pub async fn find_all(&self, filter: EquipmentFilter) -> RepoResult<Vec<Equipment>> {
        let mut conditions = Vec::new();
        if filter.category.is_some() {
            conditions.push("category = $category");
        }
        if filter.search.is_some() {
            conditions.push(
                "(string::lowercase(name) CONTAINS $search \
                  OR string::lowercase(brand) CONTAINS $search)",
            );
        }

        let mut sql = String::from("SELECT * FROM equipment");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY name");

        let mut query = self.base.db().query(sql);
        if let Some(category) = filter.category {
            query = query.bind(("category", category));
        }
        if let Some(search) = filter.search {
            query = query.bind(("search", search.to_lowercase()));
        }

        let items: Vec<Equipment> = query.await?.take(0)?;
        Ok(items)
    }

    /// Find item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Equipment>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let item: Option<Equipment> = self.base.db().select(thing).await?;
        Ok(item)
    }

    /// Create a new catalog item
    pub async fn create(&self, data: EquipmentCreate) -> RepoResult<Equipment> {
        validation::validate_required_text("name", &data.name, validation::MAX_NAME_LEN)
            .map_err(RepoError::Validation)?;
        validation::validate_required_text(
            "category",
            &data.category,
            validation::MAX_SHORT_TEXT_LEN,
        )
        .map_err(RepoError::Validation)?;
        validation::validate_non_negative("price", data.price).map_err(RepoError::Validation)?;
        if let Some(stock) = data.stock {
            validation::validate_min_count("stock", stock as i64, 0)
                .map_err(RepoError::Validation)?;
        }

        let now = now_millis();
        let item = Equipment {
            id: None,
            name: data.name,
            description: data.description.unwrap_or_default(),
            category: data.category,
            brand: data.brand,
            price: data.price,
            sale_price: data.sale_price,
            stock: data.stock.unwrap_or(0),
            is_rental: data.is_rental.unwrap_or(false),
            rental_price_per_day: data.rental_price_per_day,
            condition: data.condition.unwrap_or(Condition::New),
            created_at: now,
            updated_at: now,
        };

        let created: Option<Equipment> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create equipment".to_string()))
    }

    /// Update a catalog item
    pub async fn update(&self, id: &str, data: EquipmentUpdate) -> RepoResult<Equipment> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Equipment {} not found", id)))?;

        let price = data.price.unwrap_or(existing.price);
        validation::validate_non_negative("price", price).map_err(RepoError::Validation)?;
        let stock = data.stock.unwrap_or(existing.stock);
        validation::validate_min_count("stock", stock as i64, 0).map_err(RepoError::Validation)?;

        let updated = Equipment {
            id: None,
            name: data.name.unwrap_or(existing.name),
            description: data.description.unwrap_or(existing.description),
            category: data.category.unwrap_or(existing.category),
            brand: data.brand.unwrap_or(existing.brand),
            price,
            sale_price: data.sale_price.or(existing.sale_price),
            stock,
            is_rental: data.is_rental.unwrap_or(existing.is_rental),
            rental_price_per_day: data.rental_price_per_day.or(existing.rental_price_per_day),
            condition: data.condition.unwrap_or(existing.condition),
            created_at: existing.created_at,
            updated_at: now_millis(),
        };

        let result: Option<Equipment> = self.base.db().update(thing).content(updated).await?;
        result.ok_or_else(|| RepoError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Hard delete a catalog item
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<Equipment> = self.base.db().delete(thing).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(true)
    }
}
