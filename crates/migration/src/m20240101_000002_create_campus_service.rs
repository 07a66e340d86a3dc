//! Create `campus_services` table.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampusServices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CampusServices::ServiceId).integer().not_null().primary_key())
                    .col(ColumnDef::new(CampusServices::ServiceName).string_len(128).not_null().unique_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CampusServices::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CampusServices { Table, ServiceId, ServiceName }
