//! Create `productivity_metrics` table with FK to `students`.
//!
//! `semester` is a sortable label (`2024-1`, `2024-2`, ...); metric columns are optional.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductivityMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductivityMetrics::MetricId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductivityMetrics::StudentId).string_len(64).not_null())
                    .col(ColumnDef::new(ProductivityMetrics::Semester).string_len(32).not_null())
                    .col(ColumnDef::new(ProductivityMetrics::Gpa).double().null())
                    .col(ColumnDef::new(ProductivityMetrics::StudyHours).double().null())
                    .col(ColumnDef::new(ProductivityMetrics::AssignmentsCompleted).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_metric_student")
                            .from(ProductivityMetrics::Table, ProductivityMetrics::StudentId)
                            .to(Students::Table, Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductivityMetrics::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductivityMetrics { Table, MetricId, StudentId, Semester, Gpa, StudyHours, AssignmentsCompleted }

#[derive(DeriveIden)]
enum Students { Table, StudentId }
