//! Create `campus_environment` table.
//!
//! Location snapshots; independent of students and services.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampusEnvironment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CampusEnvironment::EnvId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CampusEnvironment::Location).string_len(128).not_null())
                    .col(ColumnDef::new(CampusEnvironment::NoiseLevel).double().not_null())
                    .col(ColumnDef::new(CampusEnvironment::CrowdDensity).double().not_null())
                    .col(ColumnDef::new(CampusEnvironment::LightingQuality).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CampusEnvironment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CampusEnvironment { Table, EnvId, Location, NoiseLevel, CrowdDensity, LightingQuality }
