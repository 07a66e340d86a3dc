use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{errors, student};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wellbeing_surveys")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub survey_id: i32,
    pub student_id: String,
    pub date: Date,
    pub stress_level: i32,
    pub sleep_hours: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Student }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Student => Entity::belongs_to(student::Entity).from(Column::StudentId).to(student::Column::StudentId).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, student_id: &str, date: Date, stress_level: i32, sleep_hours: f64) -> Result<Model, errors::ModelError> {
    if !(0..=10).contains(&stress_level) { return Err(errors::ModelError::Validation("stress_level must be in 0..=10".into())); }
    if !(0.0..=24.0).contains(&sleep_hours) { return Err(errors::ModelError::Validation("sleep_hours must be in 0..=24".into())); }
    let am = ActiveModel {
        survey_id: NotSet,
        student_id: Set(student_id.to_string()),
        date: Set(date),
        stress_level: Set(stress_level),
        sleep_hours: Set(sleep_hours),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
