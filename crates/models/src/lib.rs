//! SeaORM entities for the campus wellbeing schema.
//!
//! The reporting service only reads these tables; the `create` helpers exist
//! for seeding and tests and validate their inputs before inserting.

pub mod errors;
pub mod db;
pub mod student;
pub mod campus_service;
pub mod service_usage;
pub mod wellbeing_survey;
pub mod productivity_metric;
pub mod campus_environment;

pub use service_usage::UsageRecord;
pub use sea_orm::DatabaseConnection;
