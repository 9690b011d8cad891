//! Dive Schedule Repository

use super::{now_millis, today, BaseRepository, RepoError, RepoResult};
use crate::db::models::schedule::{
    default_equipment, default_requirements, DEFAULT_DIVE_TYPE, DEFAULT_DURATION_HOURS,
    DEFAULT_GUIDE, DEFAULT_MAX_PARTICIPANTS, DEFAULT_PRICE,
};
use crate::db::models::{Difficulty, DiveSchedule, ScheduleCreate, ScheduleStatus, ScheduleUpdate};
use crate::utils::validation;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "dive_schedule";

/// List filter for the schedule board
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    /// Only slots on today's date
    pub today_only: bool,
    /// Only slots dated today or later
    pub upcoming_only: bool,
    pub difficulty: Option<Difficulty>,
}

#[derive(Clone)]
pub struct ScheduleRepository {
    base: BaseRepository,
}

impl ScheduleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find schedules matching the filter, soonest first
    pub async fn find_all(&self, filter: ScheduleFilter) -> RepoResult<Vec<DiveSchedule>> {
        let mut conditions = Vec::new();
        if filter.today_only {
            conditions.push("date = $today");
        } else if filter.upcoming_only {
            conditions.push("date >= $today");
        }
        if filter.difficulty.is_some() {
            conditions.push("difficulty = $difficulty");
        }

        let mut sql = String::from("SELECT * FROM dive_schedule");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY date, time");

        let mut query = self.base.db().query(sql).bind(("today", today()));
        if let Some(difficulty) = filter.difficulty {
            query = query.bind(("difficulty", difficulty.as_str()));
        }

        let schedules: Vec<DiveSchedule> = query.await?.take(0)?;
        Ok(schedules)
    }

    /// Find schedule by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiveSchedule>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let schedule: Option<DiveSchedule> = self.base.db().select(thing).await?;
        Ok(schedule)
    }

    /// Create a new schedule slot, filling omitted fields with shop defaults
    pub async fn create(&self, data: ScheduleCreate) -> RepoResult<DiveSchedule> {
        validation::validate_required_text("title", &data.title, validation::MAX_NAME_LEN)
            .map_err(RepoError::Validation)?;
        validation::validate_required_text("location", &data.location, validation::MAX_NAME_LEN)
            .map_err(RepoError::Validation)?;
        validation::validate_required_text("date", &data.date, validation::MAX_SHORT_TEXT_LEN)
            .map_err(RepoError::Validation)?;
        validation::validate_required_text("time", &data.time, validation::MAX_SHORT_TEXT_LEN)
            .map_err(RepoError::Validation)?;

        let max_participants = data.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS);
        validation::validate_min_count("max_participants", max_participants as i64, 1)
            .map_err(RepoError::Validation)?;
        let price = data.price.unwrap_or(DEFAULT_PRICE);
        validation::validate_non_negative("price", price).map_err(RepoError::Validation)?;

        let now = now_millis();
        let schedule = DiveSchedule {
            id: None,
            title: data.title,
            description: data.description.unwrap_or_default(),
            date: data.date,
            time: data.time,
            duration_hours: data.duration_hours.unwrap_or(DEFAULT_DURATION_HOURS),
            max_participants,
            current_participants: 0,
            price,
            location: data.location,
            dive_type: data
                .dive_type
                .unwrap_or_else(|| DEFAULT_DIVE_TYPE.to_string()),
            difficulty: data.difficulty.unwrap_or(Difficulty::Beginner),
            guide: data.guide.unwrap_or_else(|| DEFAULT_GUIDE.to_string()),
            equipment: data.equipment.unwrap_or_else(default_equipment),
            requirements: data.requirements.unwrap_or_else(default_requirements),
            weather: data.weather,
            status: ScheduleStatus::Scheduled,
            created_at: now,
            updated_at: now,
        };

        let created: Option<DiveSchedule> = self.base.db().create(TABLE).content(schedule).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create schedule".to_string()))
    }

    /// Update a schedule slot
    ///
    /// Lowering max_participants below the current headcount is rejected,
    /// existing bookings always keep their seats.
    pub async fn update(&self, id: &str, data: ScheduleUpdate) -> RepoResult<DiveSchedule> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Schedule {} not found", id)))?;

        let max_participants = data.max_participants.unwrap_or(existing.max_participants);
        if max_participants < existing.current_participants {
            return Err(RepoError::Validation(format!(
                "max_participants {} is below current headcount {}",
                max_participants, existing.current_participants
            )));
        }
        let price = data.price.unwrap_or(existing.price);
        validation::validate_non_negative("price", price).map_err(RepoError::Validation)?;

        // id is carried by the update target, not the content
        let updated = DiveSchedule {
            id: None,
            title: data.title.unwrap_or(existing.title),
            description: data.description.unwrap_or(existing.description),
            date: data.date.unwrap_or(existing.date),
            time: data.time.unwrap_or(existing.time),
            duration_hours: data.duration_hours.unwrap_or(existing.duration_hours),
            max_participants,
            current_participants: existing.current_participants,
            price,
            location: data.location.unwrap_or(existing.location),
            dive_type: data.dive_type.unwrap_or(existing.dive_type),
            difficulty: data.difficulty.unwrap_or(existing.difficulty),
            guide: data.guide.unwrap_or(existing.guide),
            equipment: data.equipment.unwrap_or(existing.equipment),
            requirements: data.requirements.unwrap_or(existing.requirements),
            weather: data.weather.or(existing.weather),
            status: data.status.unwrap_or(existing.status),
            created_at: existing.created_at,
            updated_at: now_millis(),
        };

        let result: Option<DiveSchedule> = self
            .base
            .db()
            .update(thing)
            .content(updated)
            .await?;
        result.ok_or_else(|| RepoError::NotFound(format!("Schedule {} not found", id)))
    }

    /// Hard delete a schedule slot
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<DiveSchedule> = self.base.db().delete(thing).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Schedule {} not found", id)));
        }
        Ok(true)
    }
}
