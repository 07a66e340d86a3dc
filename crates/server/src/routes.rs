use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod environment;
pub mod services;
pub mod students;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Read-only reporting API under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/students", get(students::list))
        .route("/students/:id/profile", get(students::profile))
        .route("/services", get(services::list))
        .route("/services/usage/summary", get(services::usage_summary))
        .route("/environment/locations", get(environment::locations))
}

/// Build the full application router: health, `/api`, docs, plus CORS and tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", api_router())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            // 5xx
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
