use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "campus_environment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub env_id: i32,
    pub location: String,
    pub noise_level: f64,
    pub crowd_density: f64,
    pub lighting_quality: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, location: &str, noise_level: f64, crowd_density: f64, lighting_quality: i32) -> Result<Model, errors::ModelError> {
    if location.trim().is_empty() { return Err(errors::ModelError::Validation("location required".into())); }
    let am = ActiveModel {
        env_id: NotSet,
        location: Set(location.to_string()),
        noise_level: Set(noise_level),
        crowd_density: Set(crowd_density),
        lighting_quality: Set(lighting_quality),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
