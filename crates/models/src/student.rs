use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    pub name: String,
    pub program: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, student_id: &str, name: &str, program: &str, year: i32) -> Result<Model, errors::ModelError> {
    if student_id.trim().is_empty() { return Err(errors::ModelError::Validation("student_id required".into())); }
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if year < 1 { return Err(errors::ModelError::Validation("year must be >= 1".into())); }
    let am = ActiveModel {
        student_id: Set(student_id.to_string()),
        name: Set(name.to_string()),
        program: Set(program.to_string()),
        year: Set(year),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
