//! Service usage aggregation.
//!
//! Grouping happens in process over two independently fetched collections:
//! every service yields exactly one summary, services without usage included.

use std::collections::{HashMap, HashSet};

use models::{campus_service, service_usage};
use tracing::warn;

use super::domain::ServiceSummary;

#[derive(Default)]
struct Tally {
    visits: u64,
    rating_sum: i64,
    rated: u64,
}

impl Tally {
    fn mean_rating(&self) -> Option<f64> {
        (self.rated > 0).then(|| self.rating_sum as f64 / self.rated as f64)
    }
}

/// Summarize usage per service, busiest first.
///
/// `visits` counts rows, rated or not; `avg_rating` averages only the rated
/// rows and is `None` when there are none. The sort is stable, so services
/// with equal visits keep the order of `services`.
pub fn summarize_service_usage(services: &[campus_service::Model], usage: &[service_usage::Model]) -> Vec<ServiceSummary> {
    let mut tallies: HashMap<i32, Tally> = HashMap::with_capacity(services.len());
    for row in usage {
        let tally = tallies.entry(row.service_id).or_default();
        tally.visits += 1;
        if let Some(rating) = row.satisfaction_rating {
            tally.rating_sum += i64::from(rating);
            tally.rated += 1;
        }
    }

    let mut seen = HashSet::with_capacity(services.len());
    let mut summaries: Vec<ServiceSummary> = services
        .iter()
        .filter(|s| seen.insert(s.service_id))
        .map(|s| {
            let tally = tallies.remove(&s.service_id).unwrap_or_default();
            ServiceSummary {
                service_id: s.service_id,
                service_name: s.service_name.clone(),
                visits: tally.visits,
                avg_rating: tally.mean_rating(),
            }
        })
        .collect();

    if !tallies.is_empty() {
        let orphaned: u64 = tallies.values().map(|t| t.visits).sum();
        warn!(orphaned_rows = orphaned, unknown_services = tallies.len(), "usage rows reference services that were not listed");
    }

    summaries.sort_by(|a, b| b.visits.cmp(&a.visits));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn service(id: i32, name: &str) -> campus_service::Model {
        campus_service::Model { service_id: id, service_name: name.to_string() }
    }

    fn visit(usage_id: i32, service_id: i32, rating: Option<i32>) -> service_usage::Model {
        service_usage::Model {
            usage_id,
            student_id: "7".to_string(),
            service_id,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            duration_min: 30,
            satisfaction_rating: rating,
        }
    }

    #[test]
    fn counseling_and_unused_tutoring() {
        let services = vec![service(1, "Counseling"), service(2, "Tutoring")];
        let usage = vec![visit(1, 1, Some(4)), visit(2, 1, Some(2))];

        let summary = summarize_service_usage(&services, &usage);
        assert_eq!(
            summary,
            vec![
                ServiceSummary { service_id: 1, service_name: "Counseling".into(), visits: 2, avg_rating: Some(3.0) },
                ServiceSummary { service_id: 2, service_name: "Tutoring".into(), visits: 0, avg_rating: None },
            ]
        );
    }

    #[test]
    fn unrated_visits_count_but_do_not_average() {
        let services = vec![service(1, "Counseling")];
        let usage = vec![visit(1, 1, None), visit(2, 1, Some(5)), visit(3, 1, None)];

        let summary = summarize_service_usage(&services, &usage);
        assert_eq!(summary[0].visits, 3);
        assert_eq!(summary[0].avg_rating, Some(5.0));
    }

    #[test]
    fn only_unrated_visits_leave_average_undefined() {
        let services = vec![service(1, "Counseling")];
        let usage = vec![visit(1, 1, None), visit(2, 1, None)];

        let summary = summarize_service_usage(&services, &usage);
        assert_eq!(summary[0].visits, 2);
        assert_eq!(summary[0].avg_rating, None);
    }

    #[test]
    fn mean_is_exact_not_rounded() {
        let services = vec![service(1, "Counseling")];
        let usage = vec![visit(1, 1, Some(4)), visit(2, 1, Some(4)), visit(3, 1, Some(5))];

        let avg = summarize_service_usage(&services, &usage)[0].avg_rating.unwrap();
        assert!((avg - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn sorted_by_visits_with_ties_in_input_order() {
        let services = vec![service(1, "A"), service(2, "B"), service(3, "C"), service(4, "D")];
        let usage = vec![visit(1, 3, None), visit(2, 3, None), visit(3, 2, None), visit(4, 4, None)];

        let ids: Vec<_> = summarize_service_usage(&services, &usage).into_iter().map(|s| s.service_id).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[test]
    fn one_row_per_distinct_service() {
        let services = vec![service(1, "A"), service(2, "B"), service(1, "A")];
        let usage = vec![visit(1, 1, Some(3))];

        let summary = summarize_service_usage(&services, &usage);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.iter().filter(|s| s.service_id == 1).count(), 1);
        assert_eq!(summary[0].visits, 1);
    }

    #[test]
    fn usage_for_unlisted_service_is_ignored() {
        let services = vec![service(1, "A")];
        let usage = vec![visit(1, 99, Some(1)), visit(2, 1, Some(5))];

        let summary = summarize_service_usage(&services, &usage);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].visits, 1);
        assert_eq!(summary[0].avg_rating, Some(5.0));
    }

    #[test]
    fn no_services_means_empty_summary() {
        assert!(summarize_service_usage(&[], &[visit(1, 1, Some(2))]).is_empty());
    }

    #[test]
    fn visits_match_row_counts_per_service() {
        let services: Vec<_> = (1..=5).map(|i| service(i, "svc")).collect();
        let usage: Vec<_> = (0..40).map(|i| visit(i, (i * 7) % 5 + 1, if i % 3 == 0 { None } else { Some(i % 5 + 1) })).collect();

        let summary = summarize_service_usage(&services, &usage);
        assert_eq!(summary.len(), services.len());
        for s in &summary {
            let expected = usage.iter().filter(|u| u.service_id == s.service_id).count() as u64;
            assert_eq!(s.visits, expected);
        }
        assert!(summary.windows(2).all(|w| w[0].visits >= w[1].visits));
    }
}
