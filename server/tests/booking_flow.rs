//! Booking flow integration tests against the embedded database.
//! Run: cargo test -p dive-server --test booking_flow

use dive_server::db::models::{BookingCreate, BookingStatus, ScheduleCreate, ScheduleUpdate};
use dive_server::db::repository::schedule::ScheduleFilter;
use dive_server::db::repository::{BookingRepository, RepoError, ScheduleRepository};
use dive_server::db::DbService;

async fn open_db() -> (tempfile::TempDir, DbService) {
    let tmp = tempfile::tempdir().unwrap();
    let db = DbService::new(tmp.path()).await.unwrap();
    (tmp, db)
}

fn reef_dive() -> ScheduleCreate {
    ScheduleCreate {
        title: "Morning Reef Dive".to_string(),
        location: "Rainbow Reef".to_string(),
        date: "2026-09-15".to_string(),
        time: "09:00".to_string(),
        description: None,
        duration_hours: None,
        max_participants: None,
        price: None,
        dive_type: None,
        difficulty: None,
        guide: None,
        equipment: None,
        requirements: None,
        weather: None,
    }
}

fn booking_for(name: &str, seats: i32) -> BookingCreate {
    BookingCreate {
        customer_name: name.to_string(),
        customer_email: format!("{}@example.com", name.to_lowercase()),
        customer_phone: "+960 777 0001".to_string(),
        special_requests: None,
        seats_requested: Some(seats),
    }
}

#[tokio::test]
async fn schedule_create_fills_shop_defaults() {
    let (_tmp, db) = open_db().await;
    let schedules = ScheduleRepository::new(db.db());

    let schedule = schedules.create(reef_dive()).await.unwrap();

    assert_eq!(schedule.duration_hours, 3);
    assert_eq!(schedule.max_participants, 8);
    assert_eq!(schedule.current_participants, 0);
    assert_eq!(schedule.price, 75.0);
    assert_eq!(schedule.guide, "Captain Rodriguez");
    assert_eq!(schedule.dive_type, "Recreational");
    assert_eq!(schedule.equipment.len(), 5);
    assert_eq!(schedule.requirements, vec!["Open Water Certification"]);
    assert_eq!(schedule.seats_left(), 8);
}

#[tokio::test]
async fn booking_claims_seats_and_snapshots_the_slot() {
    let (_tmp, db) = open_db().await;
    let schedules = ScheduleRepository::new(db.db());
    let bookings = BookingRepository::new(db.db());

    let schedule = schedules.create(reef_dive()).await.unwrap();
    let schedule_id = schedule.id.as_ref().unwrap().to_string();

    let booking = bookings
        .book(&schedule_id, booking_for("Ana", 2))
        .await
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.seats_requested, 2);
    assert_eq!(booking.price, 75.0);
    assert_eq!(booking.schedule.title, "Morning Reef Dive");
    assert_eq!(booking.schedule.location, "Rainbow Reef");

    let after = schedules.find_by_id(&schedule_id).await.unwrap().unwrap();
    assert_eq!(after.current_participants, 2);
    assert_eq!(after.seats_left(), 6);
}

#[tokio::test]
async fn overbooking_is_rejected_and_leaves_the_count_alone() {
    let (_tmp, db) = open_db().await;
    let schedules = ScheduleRepository::new(db.db());
    let bookings = BookingRepository::new(db.db());

    let schedule = schedules.create(reef_dive()).await.unwrap();
    let schedule_id = schedule.id.as_ref().unwrap().to_string();

    bookings
        .book(&schedule_id, booking_for("Ana", 6))
        .await
        .unwrap();

    let err = bookings
        .book(&schedule_id, booking_for("Ben", 3))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::CapacityExceeded(_)));

    let after = schedules.find_by_id(&schedule_id).await.unwrap().unwrap();
    assert_eq!(after.current_participants, 6);

    // The remaining seats are still bookable
    bookings
        .book(&schedule_id, booking_for("Cara", 2))
        .await
        .unwrap();
    let full = schedules.find_by_id(&schedule_id).await.unwrap().unwrap();
    assert_eq!(full.seats_left(), 0);
}

#[tokio::test]
async fn booking_requires_full_contact_details() {
    let (_tmp, db) = open_db().await;
    let schedules = ScheduleRepository::new(db.db());
    let bookings = BookingRepository::new(db.db());

    let schedule = schedules.create(reef_dive()).await.unwrap();
    let schedule_id = schedule.id.as_ref().unwrap().to_string();

    let mut no_phone = booking_for("Ana", 1);
    no_phone.customer_phone = "  ".to_string();
    let err = bookings.book(&schedule_id, no_phone).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // The rejected booking claimed no seats
    let after = schedules.find_by_id(&schedule_id).await.unwrap().unwrap();
    assert_eq!(after.current_participants, 0);
}

#[tokio::test]
async fn cancelling_a_booking_releases_its_seats() {
    let (_tmp, db) = open_db().await;
    let schedules = ScheduleRepository::new(db.db());
    let bookings = BookingRepository::new(db.db());

    let schedule = schedules.create(reef_dive()).await.unwrap();
    let schedule_id = schedule.id.as_ref().unwrap().to_string();

    let booking = bookings
        .book(&schedule_id, booking_for("Ana", 3))
        .await
        .unwrap();
    let booking_id = booking.id.as_ref().unwrap().to_string();

    assert!(bookings.delete(&booking_id).await.unwrap());

    let after = schedules.find_by_id(&schedule_id).await.unwrap().unwrap();
    assert_eq!(after.current_participants, 0);

    // Second delete hits nothing
    let err = bookings.delete(&booking_id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn snapshot_is_immune_to_later_schedule_edits() {
    let (_tmp, db) = open_db().await;
    let schedules = ScheduleRepository::new(db.db());
    let bookings = BookingRepository::new(db.db());

    let schedule = schedules.create(reef_dive()).await.unwrap();
    let schedule_id = schedule.id.as_ref().unwrap().to_string();

    let booking = bookings
        .book(&schedule_id, booking_for("Ana", 1))
        .await
        .unwrap();
    let booking_id = booking.id.as_ref().unwrap().to_string();

    schedules
        .update(
            &schedule_id,
            ScheduleUpdate {
                title: Some("Renamed Dive".to_string()),
                location: Some("Banana Reef".to_string()),
                dive_type: Some("Night".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let slot = schedules.find_by_id(&schedule_id).await.unwrap().unwrap();
    assert_eq!(slot.dive_type, "Night");

    let booking = bookings.find_by_id(&booking_id).await.unwrap().unwrap();
    assert_eq!(booking.schedule.title, "Morning Reef Dive");
    assert_eq!(booking.schedule.location, "Rainbow Reef");
    assert_eq!(booking.schedule.dive_type, "Recreational");
}

#[tokio::test]
async fn capacity_cannot_drop_below_the_current_headcount() {
    let (_tmp, db) = open_db().await;
    let schedules = ScheduleRepository::new(db.db());
    let bookings = BookingRepository::new(db.db());

    let schedule = schedules.create(reef_dive()).await.unwrap();
    let schedule_id = schedule.id.as_ref().unwrap().to_string();

    bookings
        .book(&schedule_id, booking_for("Ana", 4))
        .await
        .unwrap();

    let err = schedules
        .update(
            &schedule_id,
            ScheduleUpdate {
                max_participants: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn deleting_a_schedule_orphans_bookings_gracefully() {
    let (_tmp, db) = open_db().await;
    let schedules = ScheduleRepository::new(db.db());
    let bookings = BookingRepository::new(db.db());

    let schedule = schedules.create(reef_dive()).await.unwrap();
    let schedule_id = schedule.id.as_ref().unwrap().to_string();

    let booking = bookings
        .book(&schedule_id, booking_for("Ana", 2))
        .await
        .unwrap();
    let booking_id = booking.id.as_ref().unwrap().to_string();

    assert!(schedules.delete(&schedule_id).await.unwrap());

    // The booking still reads fully from its snapshot
    let orphan = bookings.find_by_id(&booking_id).await.unwrap().unwrap();
    assert_eq!(orphan.schedule.title, "Morning Reef Dive");

    // Cancelling it does not fail on the missing slot
    assert!(bookings.delete(&booking_id).await.unwrap());
}

#[tokio::test]
async fn schedule_filters_split_today_and_upcoming() {
    let (_tmp, db) = open_db().await;
    let schedules = ScheduleRepository::new(db.db());

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let mut todays = reef_dive();
    todays.date = today.clone();
    let mut past = reef_dive();
    past.date = "2020-01-01".to_string();
    past.title = "Archive Dive".to_string();

    schedules.create(todays).await.unwrap();
    schedules.create(past).await.unwrap();

    let all = schedules.find_all(ScheduleFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let today_only = schedules
        .find_all(ScheduleFilter {
            today_only: true,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(today_only.len(), 1);
    assert_eq!(today_only[0].date, today);

    let upcoming = schedules
        .find_all(ScheduleFilter {
            upcoming_only: true,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(upcoming.len(), 1);
}
