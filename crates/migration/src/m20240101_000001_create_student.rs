//! Create `students` table.
//!
//! Student ids are external, stable text identifiers (not generated here).
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::StudentId).string_len(64).not_null().primary_key())
                    .col(ColumnDef::new(Students::Name).string_len(128).not_null())
                    .col(ColumnDef::new(Students::Program).string_len(128).not_null())
                    .col(ColumnDef::new(Students::Year).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Students::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Students { Table, StudentId, Name, Program, Year }
