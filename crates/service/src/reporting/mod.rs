pub mod domain;
pub mod repository;
pub mod repo;
pub mod summary;
pub mod profile;
pub mod service;

pub use domain::{ServiceSummary, StudentProfile};
pub use repository::ReportingRepository;
pub use service::ReportingService;
