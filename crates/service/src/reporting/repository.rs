use async_trait::async_trait;
use models::{campus_environment, campus_service, productivity_metric, service_usage, student, wellbeing_survey, UsageRecord};

use crate::errors::ServiceError;

/// Read-only access to the reporting tables.
///
/// Each method is one independent statement; implementations must return
/// rows in the documented order.
#[async_trait]
pub trait ReportingRepository: Send + Sync {
    /// All students, by `student_id` ascending.
    async fn list_students(&self) -> Result<Vec<student::Model>, ServiceError>;
    async fn find_student(&self, student_id: &str) -> Result<Option<student::Model>, ServiceError>;
    /// All services, by `service_id` ascending.
    async fn list_services(&self) -> Result<Vec<campus_service::Model>, ServiceError>;
    /// All usage rows, by `usage_id` ascending.
    async fn list_usage(&self) -> Result<Vec<service_usage::Model>, ServiceError>;
    /// By `date` then `survey_id`, both descending.
    async fn surveys_for(&self, student_id: &str) -> Result<Vec<wellbeing_survey::Model>, ServiceError>;
    /// By `semester` then `metric_id`, both descending.
    async fn metrics_for(&self, student_id: &str) -> Result<Vec<productivity_metric::Model>, ServiceError>;
    /// Usage joined with service name, by `date` then `usage_id`, both descending.
    async fn usage_for(&self, student_id: &str) -> Result<Vec<UsageRecord>, ServiceError>;
    /// All environment snapshots, by `env_id` ascending.
    async fn list_environment(&self) -> Result<Vec<campus_environment::Model>, ServiceError>;
}

/// In-memory repository for tests, demos and doc examples
pub mod memory {
    use super::*;
    use chrono::NaiveDate;
    use models::productivity_metric::MetricValues;

    #[derive(Default, Clone)]
    pub struct InMemoryReportingRepository {
        students: Vec<student::Model>,
        services: Vec<campus_service::Model>,
        usage: Vec<service_usage::Model>,
        surveys: Vec<wellbeing_survey::Model>,
        metrics: Vec<productivity_metric::Model>,
        environment: Vec<campus_environment::Model>,
        failure: Option<String>,
    }

    impl InMemoryReportingRepository {
        pub fn new() -> Self { Self::default() }

        pub fn with_student(mut self, student_id: &str, name: &str, program: &str, year: i32) -> Self {
            self.students.push(student::Model {
                student_id: student_id.to_string(),
                name: name.to_string(),
                program: program.to_string(),
                year,
            });
            self
        }

        pub fn with_service(mut self, service_id: i32, service_name: &str) -> Self {
            self.services.push(campus_service::Model { service_id, service_name: service_name.to_string() });
            self
        }

        pub fn with_usage(mut self, student_id: &str, service_id: i32, date: NaiveDate, duration_min: i32, satisfaction_rating: Option<i32>) -> Self {
            let usage_id = self.usage.len() as i32 + 1;
            self.usage.push(service_usage::Model {
                usage_id,
                student_id: student_id.to_string(),
                service_id,
                date,
                duration_min,
                satisfaction_rating,
            });
            self
        }

        pub fn with_survey(mut self, student_id: &str, date: NaiveDate, stress_level: i32, sleep_hours: f64) -> Self {
            let survey_id = self.surveys.len() as i32 + 1;
            self.surveys.push(wellbeing_survey::Model {
                survey_id,
                student_id: student_id.to_string(),
                date,
                stress_level,
                sleep_hours,
            });
            self
        }

        pub fn with_metric(mut self, student_id: &str, semester: &str, values: MetricValues) -> Self {
            let metric_id = self.metrics.len() as i32 + 1;
            self.metrics.push(productivity_metric::Model {
                metric_id,
                student_id: student_id.to_string(),
                semester: semester.to_string(),
                gpa: values.gpa,
                study_hours: values.study_hours,
                assignments_completed: values.assignments_completed,
            });
            self
        }

        pub fn with_environment(mut self, location: &str, noise_level: f64, crowd_density: f64, lighting_quality: i32) -> Self {
            let env_id = self.environment.len() as i32 + 1;
            self.environment.push(campus_environment::Model {
                env_id,
                location: location.to_string(),
                noise_level,
                crowd_density,
                lighting_quality,
            });
            self
        }

        /// Make every read fail with `message`, as a broken store would.
        pub fn failing(mut self, message: &str) -> Self {
            self.failure = Some(message.to_string());
            self
        }

        fn check(&self) -> Result<(), ServiceError> {
            match &self.failure {
                Some(msg) => Err(ServiceError::Retrieval(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ReportingRepository for InMemoryReportingRepository {
        async fn list_students(&self) -> Result<Vec<student::Model>, ServiceError> {
            self.check()?;
            let mut rows = self.students.clone();
            rows.sort_by(|a, b| a.student_id.cmp(&b.student_id));
            Ok(rows)
        }

        async fn find_student(&self, student_id: &str) -> Result<Option<student::Model>, ServiceError> {
            self.check()?;
            Ok(self.students.iter().find(|s| s.student_id == student_id).cloned())
        }

        async fn list_services(&self) -> Result<Vec<campus_service::Model>, ServiceError> {
            self.check()?;
            let mut rows = self.services.clone();
            rows.sort_by_key(|s| s.service_id);
            Ok(rows)
        }

        async fn list_usage(&self) -> Result<Vec<service_usage::Model>, ServiceError> {
            self.check()?;
            let mut rows = self.usage.clone();
            rows.sort_by_key(|u| u.usage_id);
            Ok(rows)
        }

        async fn surveys_for(&self, student_id: &str) -> Result<Vec<wellbeing_survey::Model>, ServiceError> {
            self.check()?;
            let mut rows: Vec<_> = self.surveys.iter().filter(|s| s.student_id == student_id).cloned().collect();
            rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.survey_id.cmp(&a.survey_id)));
            Ok(rows)
        }

        async fn metrics_for(&self, student_id: &str) -> Result<Vec<productivity_metric::Model>, ServiceError> {
            self.check()?;
            let mut rows: Vec<_> = self.metrics.iter().filter(|m| m.student_id == student_id).cloned().collect();
            rows.sort_by(|a, b| b.semester.cmp(&a.semester).then(b.metric_id.cmp(&a.metric_id)));
            Ok(rows)
        }

        async fn usage_for(&self, student_id: &str) -> Result<Vec<UsageRecord>, ServiceError> {
            self.check()?;
            // inner join: rows whose service is unknown are dropped
            let mut rows: Vec<UsageRecord> = self
                .usage
                .iter()
                .filter(|u| u.student_id == student_id)
                .filter_map(|u| {
                    self.services
                        .iter()
                        .find(|s| s.service_id == u.service_id)
                        .map(|s| UsageRecord::from_parts(u.clone(), s.service_name.clone()))
                })
                .collect();
            rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.usage_id.cmp(&a.usage_id)));
            Ok(rows)
        }

        async fn list_environment(&self) -> Result<Vec<campus_environment::Model>, ServiceError> {
            self.check()?;
            let mut rows = self.environment.clone();
            rows.sort_by_key(|e| e.env_id);
            Ok(rows)
        }
    }
}
