use std::sync::Arc;

use models::DatabaseConnection;
use service::reporting::{repo::seaorm::SeaOrmReportingRepository, ReportingRepository, ReportingService};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub reporting: ReportingService,
}

impl AppState {
    pub fn new(reporting: ReportingService) -> Self { Self { reporting } }

    pub fn from_repository(repo: Arc<dyn ReportingRepository>) -> Self { Self::new(ReportingService::new(repo)) }

    pub fn from_db(db: DatabaseConnection) -> Self { Self::from_repository(Arc::new(SeaOrmReportingRepository::new(db))) }
}
