use models::{productivity_metric, student, wellbeing_survey, UsageRecord};
use serde::{Deserialize, Serialize};

/// One aggregated row per campus service.
///
/// `avg_rating` is the exact mean of the non-null ratings, `None` when the
/// service has no rated visits. Rounding is left to whoever renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub service_id: i32,
    pub service_name: String,
    pub visits: u64,
    pub avg_rating: Option<f64>,
}

/// Composite view of one student.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student: Option<student::Model>,
    pub surveys: Vec<wellbeing_survey::Model>,
    pub metrics: Vec<productivity_metric::Model>,
    pub usage: Vec<UsageRecord>,
}

impl StudentProfile {
    pub fn is_unknown_student(&self) -> bool { self.student.is_none() }
}
