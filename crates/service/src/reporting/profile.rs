//! Student profile assembly.
//!
//! The four reads are independent statements issued concurrently; they are
//! not wrapped in a transaction, so under concurrent writes the lists may
//! reflect slightly different moments.

use tracing::debug;

use crate::errors::ServiceError;

use super::domain::StudentProfile;
use super::repository::ReportingRepository;

/// Fetch the student row, surveys, metrics and usage for `student_id`.
///
/// An unknown id is not an error: `student` is `None` and the lists are
/// whatever rows reference the id (empty under referential integrity).
/// Any failed read fails the whole profile.
pub async fn assemble_profile(repo: &dyn ReportingRepository, student_id: &str) -> Result<StudentProfile, ServiceError> {
    let (student, surveys, metrics, usage) = tokio::try_join!(
        repo.find_student(student_id),
        repo.surveys_for(student_id),
        repo.metrics_for(student_id),
        repo.usage_for(student_id),
    )?;

    debug!(
        student_id,
        found = student.is_some(),
        surveys = surveys.len(),
        metrics = metrics.len(),
        usage = usage.len(),
        "profile assembled"
    );

    Ok(StudentProfile { student, surveys, metrics, usage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::repository::memory::InMemoryReportingRepository;
    use chrono::NaiveDate;
    use models::productivity_metric::MetricValues;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn campus() -> InMemoryReportingRepository {
        InMemoryReportingRepository::new()
            .with_student("7", "Avery Lee", "Computer Science", 2)
            .with_student("8", "Kiara Patel", "Psychology", 4)
            .with_service(1, "Counseling")
            .with_service(2, "Tutoring")
            .with_survey("7", day(2024, 1, 1), 6, 6.5)
            .with_survey("7", day(2024, 3, 1), 4, 7.5)
            .with_survey("8", day(2024, 2, 1), 8, 5.0)
            .with_metric("7", "2023-2", MetricValues { gpa: Some(3.1), ..Default::default() })
            .with_metric("7", "2024-1", MetricValues { gpa: Some(3.5), ..Default::default() })
            .with_usage("7", 1, day(2024, 1, 15), 50, Some(4))
            .with_usage("7", 2, day(2024, 2, 10), 60, None)
            .with_usage("8", 1, day(2024, 1, 20), 30, Some(2))
    }

    #[tokio::test]
    async fn unknown_student_yields_empty_profile() {
        let repo = campus();
        let profile = assemble_profile(&repo, "42").await.unwrap();
        assert!(profile.is_unknown_student());
        assert_eq!(profile, StudentProfile::default());
    }

    #[tokio::test]
    async fn empty_store_yields_empty_profile() {
        let repo = InMemoryReportingRepository::new();
        let profile = assemble_profile(&repo, "42").await.unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({"student": null, "surveys": [], "metrics": [], "usage": []}));
    }

    #[tokio::test]
    async fn surveys_newest_first() {
        let repo = campus();
        let profile = assemble_profile(&repo, "7").await.unwrap();
        assert_eq!(profile.surveys.len(), 2);
        assert_eq!(profile.surveys[0].date, day(2024, 3, 1));
        assert!(profile.surveys.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[tokio::test]
    async fn metrics_latest_semester_first() {
        let repo = campus();
        let profile = assemble_profile(&repo, "7").await.unwrap();
        let semesters: Vec<_> = profile.metrics.iter().map(|m| m.semester.as_str()).collect();
        assert_eq!(semesters, vec!["2024-1", "2023-2"]);
    }

    #[tokio::test]
    async fn usage_carries_service_name_newest_first() {
        let repo = campus();
        let profile = assemble_profile(&repo, "7").await.unwrap();
        let rows: Vec<_> = profile.usage.iter().map(|u| (u.date, u.service_name.as_str())).collect();
        assert_eq!(rows, vec![(day(2024, 2, 10), "Tutoring"), (day(2024, 1, 15), "Counseling")]);
    }

    #[tokio::test]
    async fn only_rows_for_the_requested_student() {
        let repo = campus();
        let profile = assemble_profile(&repo, "8").await.unwrap();
        assert_eq!(profile.student.as_ref().map(|s| s.name.as_str()), Some("Kiara Patel"));
        assert!(profile.surveys.iter().all(|s| s.student_id == "8"));
        assert!(profile.metrics.is_empty());
        assert_eq!(profile.usage.len(), 1);
    }

    #[tokio::test]
    async fn orphan_rows_still_listed_without_student_row() {
        let repo = InMemoryReportingRepository::new().with_survey("ghost", day(2024, 5, 1), 3, 8.0);
        let profile = assemble_profile(&repo, "ghost").await.unwrap();
        assert!(profile.student.is_none());
        assert_eq!(profile.surveys.len(), 1);
    }

    #[tokio::test]
    async fn equal_keys_put_the_higher_id_first() {
        let same_day = day(2024, 4, 2);
        let repo = InMemoryReportingRepository::new()
            .with_student("9", "Noor Haddad", "History", 3)
            .with_service(1, "Counseling")
            .with_service(2, "Tutoring")
            .with_survey("9", same_day, 5, 7.0)
            .with_survey("9", same_day, 3, 8.0)
            .with_metric("9", "2024-1", MetricValues::default())
            .with_metric("9", "2024-1", MetricValues { gpa: Some(3.9), ..Default::default() })
            .with_usage("9", 1, same_day, 20, Some(3))
            .with_usage("9", 2, same_day, 40, None);

        let profile = assemble_profile(&repo, "9").await.unwrap();
        let surveys: Vec<_> = profile.surveys.iter().map(|s| s.survey_id).collect();
        let metrics: Vec<_> = profile.metrics.iter().map(|m| m.metric_id).collect();
        let usage: Vec<_> = profile.usage.iter().map(|u| (u.usage_id, u.service_name.as_str())).collect();
        assert_eq!(surveys, vec![2, 1]);
        assert_eq!(metrics, vec![2, 1]);
        assert_eq!(usage, vec![(2, "Tutoring"), (1, "Counseling")]);
    }

    #[tokio::test]
    async fn store_failure_fails_whole_profile() {
        let repo = campus().failing("connection refused");
        let err = assemble_profile(&repo, "7").await.unwrap_err();
        assert_eq!(err.to_string(), "retrieval failure: connection refused");
    }
}
