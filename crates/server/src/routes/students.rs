use axum::{
    extract::{Path, State},
    Json,
};
use models::student;
use service::reporting::StudentProfile;

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(get, path = "/api/students", tag = "students", responses((status = 200, description = "All students", body = [crate::openapi::StudentDoc]), (status = 500, description = "Retrieval failure", body = crate::openapi::ErrorResponse)))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<student::Model>>, ApiError> {
    Ok(Json(state.reporting.list_students().await?))
}

/// Unknown ids answer 200 with `student: null` and empty lists.
#[utoipa::path(
    get,
    path = "/api/students/{id}/profile",
    tag = "students",
    params(("id" = String, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student profile", body = crate::openapi::StudentProfileDoc),
        (status = 500, description = "Retrieval failure", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn profile(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<StudentProfile>, ApiError> {
    Ok(Json(state.reporting.student_profile(&id).await?))
}
