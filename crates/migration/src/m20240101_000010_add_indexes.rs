use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ServiceUsage: per-student history and per-service aggregation
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_usage_student")
                    .table(ServiceUsage::Table)
                    .col(ServiceUsage::StudentId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_usage_service")
                    .table(ServiceUsage::Table)
                    .col(ServiceUsage::ServiceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_survey_student")
                    .table(WellbeingSurveys::Table)
                    .col(WellbeingSurveys::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_metric_student")
                    .table(ProductivityMetrics::Table)
                    .col(ProductivityMetrics::StudentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_usage_student").table(ServiceUsage::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_usage_service").table(ServiceUsage::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_survey_student").table(WellbeingSurveys::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_metric_student").table(ProductivityMetrics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceUsage { Table, StudentId, ServiceId }

#[derive(DeriveIden)]
enum WellbeingSurveys { Table, StudentId }

#[derive(DeriveIden)]
enum ProductivityMetrics { Table, StudentId }
