use axum::{extract::State, Json};
use models::campus_environment;

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(get, path = "/api/environment/locations", tag = "environment", responses((status = 200, description = "Environmental readings per location", body = [crate::openapi::EnvironmentDoc]), (status = 500, description = "Retrieval failure", body = crate::openapi::ErrorResponse)))]
pub async fn locations(State(state): State<AppState>) -> Result<Json<Vec<campus_environment::Model>>, ApiError> {
    Ok(Json(state.reporting.environment_locations().await?))
}
