//! Statistics API Handlers
//!
//! Dashboard numbers are folded in memory from the full tables. The
//! dataset is a single shop's operational data, small enough that
//! pushing the aggregation into the database buys nothing.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{BookingStatus, DiveBooking, DiveSchedule, EquipmentSale, ScheduleStatus};
use crate::db::repository::schedule::ScheduleFilter;
use crate::db::repository::{
    BookingRepository, CustomerRepository, SaleRepository, ScheduleRepository,
};
use crate::utils::AppResult;

/// Dashboard response
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub booking_revenue: f64,
    pub sales_revenue: f64,
    pub total_revenue: f64,
    pub total_bookings: usize,
    pub confirmed_bookings: usize,
    pub cancelled_bookings: usize,
    pub upcoming_dives: usize,
    pub total_seats: i32,
    pub booked_seats: i32,
    pub customer_count: usize,
    /// Latest bookings, newest first
    pub recent_bookings: Vec<DiveBooking>,
}

const RECENT_LIMIT: usize = 5;

/// Revenue from bookings, cancelled ones excluded
fn booking_revenue(bookings: &[DiveBooking]) -> f64 {
    bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .map(|b| b.price * b.seats_requested as f64)
        .sum()
}

fn sales_revenue(sales: &[EquipmentSale]) -> f64 {
    sales.iter().map(|s| s.total_price).sum()
}

fn count_status(bookings: &[DiveBooking], status: BookingStatus) -> usize {
    bookings.iter().filter(|b| b.status == status).count()
}

/// Seat totals across open upcoming slots
fn seat_totals(schedules: &[DiveSchedule]) -> (i32, i32) {
    schedules
        .iter()
        .filter(|s| s.status == ScheduleStatus::Scheduled)
        .fold((0, 0), |(total, booked), s| {
            (total + s.max_participants, booked + s.current_participants)
        })
}

/// GET /api/statistics/dashboard
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let db = state.get_db();

    let bookings = BookingRepository::new(db.clone()).find_all().await?;
    let sales = SaleRepository::new(db.clone()).find_all().await?;
    let customers = CustomerRepository::new(db.clone()).find_all().await?;
    let upcoming = ScheduleRepository::new(db)
        .find_all(ScheduleFilter {
            upcoming_only: true,
            ..Default::default()
        })
        .await?;

    let booking_revenue = booking_revenue(&bookings);
    let sales_revenue = sales_revenue(&sales);
    let (total_seats, booked_seats) = seat_totals(&upcoming);

    Ok(Json(DashboardStats {
        booking_revenue,
        sales_revenue,
        total_revenue: booking_revenue + sales_revenue,
        total_bookings: bookings.len(),
        confirmed_bookings: count_status(&bookings, BookingStatus::Confirmed),
        cancelled_bookings: count_status(&bookings, BookingStatus::Cancelled),
        upcoming_dives: upcoming
            .iter()
            .filter(|s| s.status == ScheduleStatus::Scheduled)
            .count(),
        total_seats,
        booked_seats,
        customer_count: customers.len(),
        recent_bookings: bookings.into_iter().take(RECENT_LIMIT).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Difficulty, ScheduleSnapshot};
    use surrealdb::RecordId;

    fn booking(price: f64, seats: i32, status: BookingStatus) -> DiveBooking {
        DiveBooking {
            id: None,
            customer_name: "Ana".to_string(),
            customer_email: "ana@example.com".to_string(),
            customer_phone: "+960 123".to_string(),
            special_requests: None,
            seats_requested: seats,
            price,
            status,
            schedule: ScheduleSnapshot {
                schedule_id: RecordId::from_table_key("dive_schedule", "s1"),
                title: "Reef Dive".to_string(),
                location: "Rainbow Reef".to_string(),
                date: "2026-09-01".to_string(),
                time: "09:00".to_string(),
                duration_hours: 3,
                dive_type: "Recreational".to_string(),
                difficulty: Difficulty::Beginner,
                guide: "Captain Rodriguez".to_string(),
            },
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_booking_revenue_skips_cancelled() {
        let bookings = vec![
            booking(75.0, 2, BookingStatus::Confirmed),
            booking(75.0, 1, BookingStatus::Cancelled),
            booking(100.0, 1, BookingStatus::Completed),
        ];
        assert_eq!(booking_revenue(&bookings), 250.0);
    }

    #[test]
    fn test_empty_dataset_folds_to_zero() {
        assert_eq!(booking_revenue(&[]), 0.0);
        assert_eq!(sales_revenue(&[]), 0.0);
        assert_eq!(seat_totals(&[]), (0, 0));
    }
}
