//! Revenue Repository

use super::{now_millis, today, BaseRepository, RepoError, RepoResult};
use crate::db::models::{RevenueCreate, RevenueItem, RevenueSource, RevenueStatus};
use crate::utils::validation;
use serde::Serialize;
use std::collections::HashMap;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "revenue_item";

/// Aggregated view over the revenue ledger
#[derive(Debug, Clone, Serialize)]
pub struct RevenueSummary {
    pub total: f64,
    /// Mean amount per line, 0 for an empty ledger
    pub average: f64,
    pub completed: f64,
    pub pending: f64,
    pub refunded: f64,
    pub by_source: HashMap<String, f64>,
    pub item_count: usize,
}

impl RevenueSummary {
    /// Fold a set of items into totals. The headline total is the plain
    /// sum of every line; the status buckets break it down.
    pub fn from_items(items: &[RevenueItem]) -> Self {
        let mut summary = RevenueSummary {
            total: 0.0,
            average: 0.0,
            completed: 0.0,
            pending: 0.0,
            refunded: 0.0,
            by_source: HashMap::new(),
            item_count: items.len(),
        };
        for item in items {
            summary.total += item.amount;
            *summary
                .by_source
                .entry(item.source.as_str().to_string())
                .or_insert(0.0) += item.amount;
            match item.status {
                RevenueStatus::Completed => summary.completed += item.amount,
                RevenueStatus::Pending => summary.pending += item.amount,
                RevenueStatus::Refunded => summary.refunded += item.amount,
            }
        }
        if !items.is_empty() {
            summary.average = summary.total / items.len() as f64;
        }
        summary
    }
}

#[derive(Clone)]
pub struct RevenueRepository {
    base: BaseRepository,
}

impl RevenueRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all revenue items, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<RevenueItem>> {
        let items: Vec<RevenueItem> = self
            .base
            .db()
            .query("SELECT * FROM revenue_item ORDER BY date DESC, created_at DESC")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find items from one source
    pub async fn find_by_source(&self, source: RevenueSource) -> RepoResult<Vec<RevenueItem>> {
        let items: Vec<RevenueItem> = self
            .base
            .db()
            .query(
                "SELECT * FROM revenue_item WHERE source = $source \
                 ORDER BY date DESC, created_at DESC",
            )
            .bind(("source", source.as_str()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Record a revenue line
    pub async fn create(&self, data: RevenueCreate) -> RepoResult<RevenueItem> {
        validation::validate_required_text(
            "description",
            &data.description,
            validation::MAX_NAME_LEN,
        )
        .map_err(RepoError::Validation)?;
        validation::validate_non_negative("amount", data.amount)
            .map_err(RepoError::Validation)?;
        validation::validate_optional_text("notes", &data.notes, validation::MAX_NOTE_LEN)
            .map_err(RepoError::Validation)?;
        validation::validate_optional_text(
            "customer_name",
            &data.customer_name,
            validation::MAX_NAME_LEN,
        )
        .map_err(RepoError::Validation)?;

        let now = now_millis();
        let item = RevenueItem {
            id: None,
            description: data.description,
            amount: data.amount,
            source: data.source,
            date: data.date.unwrap_or_else(today),
            status: data.status.unwrap_or(RevenueStatus::Completed),
            customer_name: data.customer_name,
            payment_method: data.payment_method,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        };

        let created: Option<RevenueItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to record revenue".to_string()))
    }

    /// Mark an item's settlement status
    pub async fn set_status(&self, id: &str, status: RevenueStatus) -> RepoResult<RevenueItem> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let updated: Vec<RevenueItem> = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status, updated_at = $now RETURN AFTER")
            .bind(("thing", thing))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Revenue item {} not found", id)))
    }

    /// Hard delete a revenue line
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<RevenueItem> = self.base.db().delete(thing).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Revenue item {} not found", id)));
        }
        Ok(true)
    }

    /// Summarize the whole ledger
    pub async fn summary(&self) -> RepoResult<RevenueSummary> {
        let items = self.find_all().await?;
        Ok(RevenueSummary::from_items(&items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(amount: f64, source: RevenueSource, status: RevenueStatus) -> RevenueItem {
        RevenueItem {
            id: None,
            description: "line".to_string(),
            amount,
            source,
            date: "2026-08-01".to_string(),
            status,
            customer_name: None,
            payment_method: None,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_summary_of_empty_ledger_is_zero() {
        let summary = RevenueSummary::from_items(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.item_count, 0);
        assert!(summary.by_source.is_empty());
    }

    #[test]
    fn test_summary_folds_by_status_and_source() {
        let items = vec![
            item(150.0, RevenueSource::Booking, RevenueStatus::Completed),
            item(75.0, RevenueSource::Booking, RevenueStatus::Pending),
            item(200.0, RevenueSource::Equipment, RevenueStatus::Completed),
            item(50.0, RevenueSource::Equipment, RevenueStatus::Refunded),
        ];
        let summary = RevenueSummary::from_items(&items);
        // Every line counts into the headline total, refunds included
        assert_eq!(summary.total, 475.0);
        assert_eq!(summary.average, 475.0 / 4.0);
        assert_eq!(summary.completed, 350.0);
        assert_eq!(summary.pending, 75.0);
        assert_eq!(summary.refunded, 50.0);
        assert_eq!(summary.by_source["booking"], 225.0);
        assert_eq!(summary.by_source["equipment"], 250.0);
        assert_eq!(summary.item_count, 4);
    }
}
