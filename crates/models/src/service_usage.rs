use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set, DatabaseConnection, FromQueryResult};
use serde::{Deserialize, Serialize};

use crate::{campus_service, errors, student};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_usage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub usage_id: i32,
    pub student_id: String,
    pub service_id: i32,
    pub date: Date,
    pub duration_min: i32,
    pub satisfaction_rating: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Student, Service }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Student => Entity::belongs_to(student::Entity).from(Column::StudentId).to(student::Column::StudentId).into(),
            Relation::Service => Entity::belongs_to(campus_service::Entity).from(Column::ServiceId).to(campus_service::Column::ServiceId).into(),
        }
    }
}

impl Related<campus_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// A usage row enriched with the name of the service it references.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct UsageRecord {
    pub usage_id: i32,
    pub student_id: String,
    pub service_id: i32,
    pub date: Date,
    pub duration_min: i32,
    pub satisfaction_rating: Option<i32>,
    pub service_name: String,
}

impl UsageRecord {
    pub fn from_parts(usage: Model, service_name: impl Into<String>) -> Self {
        Self {
            usage_id: usage.usage_id,
            student_id: usage.student_id,
            service_id: usage.service_id,
            date: usage.date,
            duration_min: usage.duration_min,
            satisfaction_rating: usage.satisfaction_rating,
            service_name: service_name.into(),
        }
    }
}

pub fn validate_rating(rating: Option<i32>) -> Result<(), errors::ModelError> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(errors::ModelError::Validation("satisfaction_rating must be in 1..=5".into())),
        _ => Ok(()),
    }
}

pub async fn create(
    db: &DatabaseConnection,
    student_id: &str,
    service_id: i32,
    date: Date,
    duration_min: i32,
    satisfaction_rating: Option<i32>,
) -> Result<Model, errors::ModelError> {
    if duration_min < 0 { return Err(errors::ModelError::Validation("duration_min must be >= 0".into())); }
    validate_rating(satisfaction_rating)?;
    let am = ActiveModel {
        usage_id: NotSet,
        student_id: Set(student_id.to_string()),
        service_id: Set(service_id),
        date: Set(date),
        duration_min: Set(duration_min),
        satisfaction_rating: Set(satisfaction_rating),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
