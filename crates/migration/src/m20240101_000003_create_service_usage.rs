//! Create `service_usage` table with FKs to `students` and `campus_services`.
//!
//! One row per visit; the satisfaction rating is optional.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceUsage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceUsage::UsageId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceUsage::StudentId).string_len(64).not_null())
                    .col(ColumnDef::new(ServiceUsage::ServiceId).integer().not_null())
                    .col(ColumnDef::new(ServiceUsage::Date).date().not_null())
                    .col(ColumnDef::new(ServiceUsage::DurationMin).integer().not_null())
                    .col(ColumnDef::new(ServiceUsage::SatisfactionRating).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usage_student")
                            .from(ServiceUsage::Table, ServiceUsage::StudentId)
                            .to(Students::Table, Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usage_service")
                            .from(ServiceUsage::Table, ServiceUsage::ServiceId)
                            .to(CampusServices::Table, CampusServices::ServiceId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceUsage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceUsage { Table, UsageId, StudentId, ServiceId, Date, DurationMin, SatisfactionRating }

#[derive(DeriveIden)]
enum Students { Table, StudentId }

#[derive(DeriveIden)]
enum CampusServices { Table, ServiceId }
