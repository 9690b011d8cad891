//! Dive Booking Repository
//!
//! Seat accounting lives here. Claiming seats is a single guarded
//! UPDATE so two concurrent bookings can never oversell a slot, the
//! statement only increments when the requested seats still fit.

use super::{now_millis, BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    BookingCreate, BookingStatus, DiveBooking, DiveSchedule, ScheduleSnapshot, ScheduleStatus,
};
use crate::utils::validation;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "dive_booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all bookings, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<DiveBooking>> {
        let bookings: Vec<DiveBooking> = self
            .base
            .db()
            .query("SELECT * FROM dive_booking ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Find all bookings made against one schedule slot
    pub async fn find_by_schedule(&self, schedule_id: &str) -> RepoResult<Vec<DiveBooking>> {
        let thing: RecordId = schedule_id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid schedule ID: {}", schedule_id)))?;
        let key = thing.to_string();
        let bookings: Vec<DiveBooking> = self
            .base
            .db()
            .query(
                "SELECT * FROM dive_booking WHERE schedule.schedule_id = $key ORDER BY created_at DESC",
            )
            .bind(("key", key))
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Find booking by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiveBooking>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let booking: Option<DiveBooking> = self.base.db().select(thing).await?;
        Ok(booking)
    }

    /// Book seats on a schedule slot
    ///
    /// Claims the seats first, then writes the booking with a snapshot of
    /// the slot as it was at claim time.
    pub async fn book(&self, schedule_id: &str, data: BookingCreate) -> RepoResult<DiveBooking> {
        let schedule_thing: RecordId = schedule_id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid schedule ID: {}", schedule_id)))?;

        validation::validate_required_text(
            "customer_name",
            &data.customer_name,
            validation::MAX_NAME_LEN,
        )
        .map_err(RepoError::Validation)?;
        validation::validate_required_text(
            "customer_email",
            &data.customer_email,
            validation::MAX_EMAIL_LEN,
        )
        .map_err(RepoError::Validation)?;
        validation::validate_required_text(
            "customer_phone",
            &data.customer_phone,
            validation::MAX_SHORT_TEXT_LEN,
        )
        .map_err(RepoError::Validation)?;
        validation::validate_optional_text(
            "special_requests",
            &data.special_requests,
            validation::MAX_NOTE_LEN,
        )
        .map_err(RepoError::Validation)?;

        let seats = data.seats_requested.unwrap_or(1);
        validation::validate_min_count("seats_requested", seats as i64, 1)
            .map_err(RepoError::Validation)?;

        let now = now_millis();

        // Guarded seat claim. RETURN AFTER yields the slot only when the
        // WHERE clause passed, an empty result means the claim failed.
        let claimed: Vec<DiveSchedule> = self
            .base
            .db()
            .query(
                "UPDATE $schedule \
                 SET current_participants += $seats, updated_at = $now \
                 WHERE current_participants + $seats <= max_participants \
                   AND status = 'scheduled' \
                 RETURN AFTER",
            )
            .bind(("schedule", schedule_thing.clone()))
            .bind(("seats", seats))
            .bind(("now", now))
            .await?
            .take(0)?;

        let schedule = match claimed.into_iter().next() {
            Some(schedule) => schedule,
            None => return Err(self.claim_failure(schedule_id, seats).await?),
        };

        let booking = DiveBooking {
            id: None,
            customer_name: data.customer_name,
            customer_email: data.customer_email,
            customer_phone: data.customer_phone,
            special_requests: data.special_requests,
            seats_requested: seats,
            price: schedule.price,
            status: BookingStatus::Confirmed,
            schedule: ScheduleSnapshot {
                schedule_id: schedule_thing.clone(),
                title: schedule.title,
                location: schedule.location,
                date: schedule.date,
                time: schedule.time,
                duration_hours: schedule.duration_hours,
                dive_type: schedule.dive_type,
                difficulty: schedule.difficulty,
                guide: schedule.guide,
            },
            created_at: now,
            updated_at: now,
        };

        let created: Option<DiveBooking> = self.base.db().create(TABLE).content(booking).await?;
        match created {
            Some(booking) => Ok(booking),
            None => {
                // Booking write failed after the claim, give the seats back
                self.release_seats(&schedule_thing, seats).await?;
                Err(RepoError::Database("Failed to create booking".to_string()))
            }
        }
    }

    /// Explain why a seat claim came back empty
    async fn claim_failure(&self, schedule_id: &str, seats: i32) -> RepoResult<RepoError> {
        let thing: RecordId = schedule_id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid schedule ID: {}", schedule_id)))?;
        let schedule: Option<DiveSchedule> = self.base.db().select(thing).await?;
        Ok(match schedule {
            None => RepoError::NotFound(format!("Schedule {} not found", schedule_id)),
            Some(s) if s.status != ScheduleStatus::Scheduled => {
                RepoError::Validation("Schedule is not open for booking".to_string())
            }
            Some(s) => RepoError::CapacityExceeded(format!(
                "Requested {} seats but only {} left",
                seats,
                s.seats_left()
            )),
        })
    }

    /// Cancel a booking and release its seats
    ///
    /// Seats are only returned while the slot still exists, deleting a
    /// booking for a removed schedule is not an error.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<DiveBooking> = self.base.db().delete(thing).await?;
        let booking = match deleted {
            Some(booking) => booking,
            None => return Err(RepoError::NotFound(format!("Booking {} not found", id))),
        };

        self.release_seats(&booking.schedule.schedule_id, booking.seats_requested)
            .await?;
        Ok(true)
    }

    async fn release_seats(&self, schedule: &RecordId, seats: i32) -> RepoResult<()> {
        self.base
            .db()
            .query(
                "UPDATE $schedule \
                 SET current_participants -= $seats, updated_at = $now \
                 WHERE current_participants >= $seats",
            )
            .bind(("schedule", schedule.clone()))
            .bind(("seats", seats))
            .bind(("now", now_millis()))
            .await?;
        Ok(())
    }
}
