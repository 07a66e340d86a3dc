#![cfg(test)]
use chrono::NaiveDate;
use migration::MigratorTrait;
use models::{campus_environment, campus_service, productivity_metric, service_usage, student, wellbeing_survey};
use models::productivity_metric::MetricValues;
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database; each call is isolated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Three students ("42" is enrolled but has no surveys, metrics or usage),
/// three services (3 is never used), two environment snapshots.
pub async fn seed_campus(db: &DatabaseConnection) -> Result<(), anyhow::Error> {
    student::create(db, "7", "Avery Lee", "Computer Science", 2).await?;
    student::create(db, "8", "Kiara Patel", "Psychology", 4).await?;
    student::create(db, "42", "Jules Moreno", "Biology", 1).await?;

    campus_service::create(db, 1, "Counseling").await?;
    campus_service::create(db, 2, "Tutoring").await?;
    campus_service::create(db, 3, "Career Center").await?;

    service_usage::create(db, "7", 1, day(2024, 1, 15), 50, Some(4)).await?;
    service_usage::create(db, "8", 1, day(2024, 1, 20), 30, Some(2)).await?;
    service_usage::create(db, "8", 1, day(2024, 2, 2), 45, None).await?;
    service_usage::create(db, "7", 2, day(2024, 2, 10), 60, None).await?;

    wellbeing_survey::create(db, "7", day(2024, 1, 1), 6, 6.5).await?;
    wellbeing_survey::create(db, "7", day(2024, 3, 1), 4, 7.5).await?;
    wellbeing_survey::create(db, "8", day(2024, 2, 1), 8, 5.0).await?;

    productivity_metric::create(db, "7", "2023-2", MetricValues { gpa: Some(3.1), study_hours: Some(18.0), assignments_completed: Some(11) }).await?;
    productivity_metric::create(db, "7", "2024-1", MetricValues { gpa: Some(3.5), study_hours: Some(21.5), assignments_completed: Some(14) }).await?;

    campus_environment::create(db, "Library", 38.5, 0.42, 4).await?;
    campus_environment::create(db, "Student Union", 71.0, 0.87, 3).await?;
    Ok(())
}
