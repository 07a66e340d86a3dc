use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait};

use models::{campus_environment, campus_service, productivity_metric, service_usage, student, wellbeing_survey, UsageRecord};

use crate::errors::ServiceError;
use crate::reporting::repository::ReportingRepository;

/// SeaORM-backed repository; every method issues exactly one statement.
pub struct SeaOrmReportingRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmReportingRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ReportingRepository for SeaOrmReportingRepository {
    async fn list_students(&self) -> Result<Vec<student::Model>, ServiceError> {
        let rows = student::Entity::find()
            .order_by_asc(student::Column::StudentId)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_student(&self, student_id: &str) -> Result<Option<student::Model>, ServiceError> {
        let row = student::Entity::find_by_id(student_id.to_string())
            .one(&self.db)
            .await?;
        Ok(row)
    }

    async fn list_services(&self) -> Result<Vec<campus_service::Model>, ServiceError> {
        let rows = campus_service::Entity::find()
            .order_by_asc(campus_service::Column::ServiceId)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn list_usage(&self) -> Result<Vec<service_usage::Model>, ServiceError> {
        let rows = service_usage::Entity::find()
            .order_by_asc(service_usage::Column::UsageId)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn surveys_for(&self, student_id: &str) -> Result<Vec<wellbeing_survey::Model>, ServiceError> {
        let rows = wellbeing_survey::Entity::find()
            .filter(wellbeing_survey::Column::StudentId.eq(student_id))
            .order_by_desc(wellbeing_survey::Column::Date)
            .order_by_desc(wellbeing_survey::Column::SurveyId)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn metrics_for(&self, student_id: &str) -> Result<Vec<productivity_metric::Model>, ServiceError> {
        let rows = productivity_metric::Entity::find()
            .filter(productivity_metric::Column::StudentId.eq(student_id))
            .order_by_desc(productivity_metric::Column::Semester)
            .order_by_desc(productivity_metric::Column::MetricId)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn usage_for(&self, student_id: &str) -> Result<Vec<UsageRecord>, ServiceError> {
        let rows = service_usage::Entity::find()
            .filter(service_usage::Column::StudentId.eq(student_id))
            .join(JoinType::InnerJoin, service_usage::Relation::Service.def())
            .column_as(campus_service::Column::ServiceName, "service_name")
            .order_by_desc(service_usage::Column::Date)
            .order_by_desc(service_usage::Column::UsageId)
            .into_model::<UsageRecord>()
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn list_environment(&self) -> Result<Vec<campus_environment::Model>, ServiceError> {
        let rows = campus_environment::Entity::find()
            .order_by_asc(campus_environment::Column::EnvId)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}
