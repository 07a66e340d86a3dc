//! Migrator registering table migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_student;
mod m20240101_000002_create_campus_service;
mod m20240101_000003_create_service_usage;
mod m20240101_000004_create_wellbeing_survey;
mod m20240101_000005_create_productivity_metric;
mod m20240101_000006_create_campus_environment;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_student::Migration),
            Box::new(m20240101_000002_create_campus_service::Migration),
            Box::new(m20240101_000003_create_service_usage::Migration),
            Box::new(m20240101_000004_create_wellbeing_survey::Migration),
            Box::new(m20240101_000005_create_productivity_metric::Migration),
            Box::new(m20240101_000006_create_campus_environment::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
