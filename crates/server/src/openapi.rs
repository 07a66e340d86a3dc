//! OpenAPI description of the public read endpoints.
//!
//! The entity types live in `models` and do not derive `ToSchema`; the doc
//! structs below mirror their wire shape.
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(ToSchema)]
pub struct StudentDoc { pub student_id: String, pub name: String, pub program: String, pub year: i32 }

#[derive(ToSchema)]
pub struct CampusServiceDoc { pub service_id: i32, pub service_name: String }

#[derive(ToSchema)]
pub struct ServiceSummaryDoc {
    pub service_id: i32,
    pub service_name: String,
    pub visits: u64,
    /// Exact mean of the non-null ratings; null when the service has none.
    pub avg_rating: Option<f64>,
}

#[derive(ToSchema)]
pub struct SurveyDoc { pub survey_id: i32, pub student_id: String, pub date: String, pub stress_level: i32, pub sleep_hours: f64 }

#[derive(ToSchema)]
pub struct MetricDoc {
    pub metric_id: i32,
    pub student_id: String,
    pub semester: String,
    pub gpa: Option<f64>,
    pub study_hours: Option<f64>,
    pub assignments_completed: Option<i32>,
}

#[derive(ToSchema)]
pub struct UsageRecordDoc {
    pub usage_id: i32,
    pub student_id: String,
    pub service_id: i32,
    pub date: String,
    pub duration_min: i32,
    pub satisfaction_rating: Option<i32>,
    pub service_name: String,
}

#[derive(ToSchema)]
pub struct StudentProfileDoc {
    /// null for an unknown student id
    pub student: Option<StudentDoc>,
    pub surveys: Vec<SurveyDoc>,
    pub metrics: Vec<MetricDoc>,
    pub usage: Vec<UsageRecordDoc>,
}

#[derive(ToSchema)]
pub struct EnvironmentDoc { pub env_id: i32, pub location: String, pub noise_level: f64, pub crowd_density: f64, pub lighting_quality: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list,
        crate::routes::students::profile,
        crate::routes::services::list,
        crate::routes::services::usage_summary,
        crate::routes::environment::locations,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            StudentDoc,
            CampusServiceDoc,
            ServiceSummaryDoc,
            SurveyDoc,
            MetricDoc,
            UsageRecordDoc,
            StudentProfileDoc,
            EnvironmentDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students"),
        (name = "services"),
        (name = "environment")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_read_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for expected in [
            "/health",
            "/api/students",
            "/api/students/{id}/profile",
            "/api/services",
            "/api/services/usage/summary",
            "/api/environment/locations",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
    }
}
