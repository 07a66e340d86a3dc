//! Create `wellbeing_surveys` table with FK to `students`.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WellbeingSurveys::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WellbeingSurveys::SurveyId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WellbeingSurveys::StudentId).string_len(64).not_null())
                    .col(ColumnDef::new(WellbeingSurveys::Date).date().not_null())
                    .col(ColumnDef::new(WellbeingSurveys::StressLevel).integer().not_null())
                    .col(ColumnDef::new(WellbeingSurveys::SleepHours).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_survey_student")
                            .from(WellbeingSurveys::Table, WellbeingSurveys::StudentId)
                            .to(Students::Table, Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WellbeingSurveys::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WellbeingSurveys { Table, SurveyId, StudentId, Date, StressLevel, SleepHours }

#[derive(DeriveIden)]
enum Students { Table, StudentId }
