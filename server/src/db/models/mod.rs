//! Database Models

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod operator;

// Dive Operations
pub mod booking;
pub mod schedule;

// Customers
pub mod customer;

// Shop
pub mod equipment;
pub mod sale;

// Finance
pub mod revenue;

// Business
pub mod shop_profile;

// Re-exports
pub use booking::{BookingCreate, BookingStatus, DiveBooking, ScheduleSnapshot};
pub use customer::{Customer, CustomerCreate, CustomerUpdate, EmergencyContact};
pub use equipment::{
    Condition, Equipment, EquipmentCreate, EquipmentUpdate, StockStatus, LOW_STOCK_THRESHOLD,
};
pub use operator::{Operator, OperatorCreate, OperatorId};
pub use revenue::{RevenueCreate, RevenueItem, RevenueSource, RevenueStatus};
pub use sale::{EquipmentSale, PaymentMethod, SaleCreate};
pub use schedule::{
    Difficulty, DiveSchedule, ScheduleCreate, ScheduleStatus, ScheduleUpdate, WeatherConditions,
};
pub use shop_profile::{OpeningHours, ShopProfile, ShopProfileUpdate, PROFILE_KEY};
