//! Reporting layer over the campus wellbeing schema.
//! - `reporting::repository` is the storage seam (SeaORM and in-memory implementations).
//! - `reporting::summary` aggregates service usage; `reporting::profile` assembles student profiles.
//! - `reporting::service::ReportingService` is the facade the HTTP layer calls.

pub mod errors;
pub mod reporting;
#[cfg(test)]
pub mod test_support;
