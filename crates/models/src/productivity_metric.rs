use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{errors, student};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "productivity_metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub metric_id: i32,
    pub student_id: String,
    pub semester: String,
    pub gpa: Option<f64>,
    pub study_hours: Option<f64>,
    pub assignments_completed: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Student }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Student => Entity::belongs_to(student::Entity).from(Column::StudentId).to(student::Column::StudentId).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Metric values recorded for one semester.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricValues {
    pub gpa: Option<f64>,
    pub study_hours: Option<f64>,
    pub assignments_completed: Option<i32>,
}

pub async fn create(db: &DatabaseConnection, student_id: &str, semester: &str, values: MetricValues) -> Result<Model, errors::ModelError> {
    if semester.trim().is_empty() { return Err(errors::ModelError::Validation("semester required".into())); }
    let am = ActiveModel {
        metric_id: NotSet,
        student_id: Set(student_id.to_string()),
        semester: Set(semester.to_string()),
        gpa: Set(values.gpa),
        study_hours: Set(values.study_hours),
        assignments_completed: Set(values.assignments_completed),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
