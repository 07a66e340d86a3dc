use std::sync::Arc;

use models::{campus_environment, campus_service, student};
use tracing::{info, instrument};

use crate::errors::ServiceError;

use super::domain::{ServiceSummary, StudentProfile};
use super::profile::assemble_profile;
use super::repository::ReportingRepository;
use super::summary::summarize_service_usage;

/// Read-only reporting operations exposed over HTTP.
///
/// Stateless apart from the shared repository handle; cheap to clone.
#[derive(Clone)]
pub struct ReportingService {
    repo: Arc<dyn ReportingRepository>,
}

impl ReportingService {
    pub fn new(repo: Arc<dyn ReportingRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list_students(&self) -> Result<Vec<student::Model>, ServiceError> {
        let rows = self.repo.list_students().await?;
        info!(count = rows.len(), "list students");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn list_services(&self) -> Result<Vec<campus_service::Model>, ServiceError> {
        let rows = self.repo.list_services().await?;
        info!(count = rows.len(), "list services");
        Ok(rows)
    }

    /// Visits and mean rating per service, busiest first.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::reporting::{ReportingService, repository::memory::InMemoryReportingRepository};
    /// let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let repo = InMemoryReportingRepository::new()
    ///     .with_student("7", "Avery Lee", "Computer Science", 2)
    ///     .with_service(1, "Counseling")
    ///     .with_service(2, "Tutoring")
    ///     .with_usage("7", 1, day, 30, Some(4))
    ///     .with_usage("7", 1, day, 45, Some(2));
    /// let svc = ReportingService::new(Arc::new(repo));
    /// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// let summary = rt.block_on(svc.service_usage_summary()).unwrap();
    /// assert_eq!(summary[0].visits, 2);
    /// assert_eq!(summary[0].avg_rating, Some(3.0));
    /// assert_eq!(summary[1].avg_rating, None);
    /// ```
    #[instrument(skip(self))]
    pub async fn service_usage_summary(&self) -> Result<Vec<ServiceSummary>, ServiceError> {
        let (services, usage) = tokio::try_join!(self.repo.list_services(), self.repo.list_usage())?;
        let summary = summarize_service_usage(&services, &usage);
        info!(services = summary.len(), usage_rows = usage.len(), "service usage summarized");
        Ok(summary)
    }

    #[instrument(skip(self), fields(student_id = %student_id))]
    pub async fn student_profile(&self, student_id: &str) -> Result<StudentProfile, ServiceError> {
        let profile = assemble_profile(self.repo.as_ref(), student_id).await?;
        info!(found = !profile.is_unknown_student(), "student profile");
        Ok(profile)
    }

    #[instrument(skip(self))]
    pub async fn environment_locations(&self) -> Result<Vec<campus_environment::Model>, ServiceError> {
        let rows = self.repo.list_environment().await?;
        info!(count = rows.len(), "list environment locations");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::repo::seaorm::SeaOrmReportingRepository;
    use crate::reporting::repository::memory::InMemoryReportingRepository;
    use crate::test_support::{day, get_db, seed_campus};

    #[tokio::test]
    async fn summary_over_database() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_campus(&db).await?;
        let svc = ReportingService::new(Arc::new(SeaOrmReportingRepository::new(db)));

        let summary = svc.service_usage_summary().await?;
        assert_eq!(
            summary,
            vec![
                ServiceSummary { service_id: 1, service_name: "Counseling".into(), visits: 3, avg_rating: Some(3.0) },
                ServiceSummary { service_id: 2, service_name: "Tutoring".into(), visits: 1, avg_rating: None },
                ServiceSummary { service_id: 3, service_name: "Career Center".into(), visits: 0, avg_rating: None },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn profile_over_database() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_campus(&db).await?;
        let svc = ReportingService::new(Arc::new(SeaOrmReportingRepository::new(db)));

        let profile = svc.student_profile("7").await?;
        assert_eq!(profile.student.as_ref().map(|s| s.name.as_str()), Some("Avery Lee"));
        assert_eq!(profile.surveys[0].date, day(2024, 3, 1));
        assert_eq!(profile.metrics[0].semester, "2024-1");
        assert_eq!(profile.usage[0].service_name, "Tutoring");

        let enrolled_without_activity = svc.student_profile("42").await?;
        assert_eq!(enrolled_without_activity.student.as_ref().map(|s| s.student_id.as_str()), Some("42"));
        assert!(enrolled_without_activity.surveys.is_empty());
        assert!(enrolled_without_activity.metrics.is_empty() && enrolled_without_activity.usage.is_empty());

        let missing = svc.student_profile("does-not-exist").await?;
        assert_eq!(missing, StudentProfile::default());
        Ok(())
    }

    #[tokio::test]
    async fn listings_pass_through() -> Result<(), anyhow::Error> {
        let repo = InMemoryReportingRepository::new()
            .with_student("2", "B", "Math", 1)
            .with_student("1", "A", "Math", 1)
            .with_service(5, "Health Clinic")
            .with_environment("Library", 40.0, 0.5, 4);
        let svc = ReportingService::new(Arc::new(repo));

        let ids: Vec<_> = svc.list_students().await?.into_iter().map(|s| s.student_id).collect();
        assert_eq!(ids, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(svc.list_services().await?.len(), 1);
        assert_eq!(svc.environment_locations().await?[0].location, "Library");
        Ok(())
    }

    #[tokio::test]
    async fn failures_are_not_partial() {
        let svc = ReportingService::new(Arc::new(InMemoryReportingRepository::new().with_service(1, "A").failing("boom")));
        assert!(matches!(svc.service_usage_summary().await, Err(ServiceError::Retrieval(_))));
        assert!(matches!(svc.list_students().await, Err(ServiceError::Retrieval(_))));
        assert!(matches!(svc.environment_locations().await, Err(ServiceError::Retrieval(_))));
    }
}
