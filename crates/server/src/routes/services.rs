use axum::{extract::State, Json};
use models::campus_service;
use service::reporting::ServiceSummary;

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(get, path = "/api/services", tag = "services", responses((status = 200, description = "All campus services", body = [crate::openapi::CampusServiceDoc]), (status = 500, description = "Retrieval failure", body = crate::openapi::ErrorResponse)))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<campus_service::Model>>, ApiError> {
    Ok(Json(state.reporting.list_services().await?))
}

#[utoipa::path(get, path = "/api/services/usage/summary", tag = "services", responses((status = 200, description = "Visits and mean rating per service, busiest first", body = [crate::openapi::ServiceSummaryDoc]), (status = 500, description = "Retrieval failure", body = crate::openapi::ErrorResponse)))]
pub async fn usage_summary(State(state): State<AppState>) -> Result<Json<Vec<ServiceSummary>>, ApiError> {
    Ok(Json(state.reporting.service_usage_summary().await?))
}
