//! Typed consumer of the campus wellbeing reporting API.
//!
//! Mirrors the five reads a dashboard performs; every call is a plain GET
//! and decodes straight into the same row types the server serialises.

use models::{campus_environment, campus_service, student};
use serde::de::DeserializeOwned;
use service::reporting::{ServiceSummary, StudentProfile};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: reqwest::Client::new(), base_url }
    }

    /// Base URL from `API_BASE_URL`, else [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let resp = self.http.get(&url).send().await.map_err(ClientError::Network)?;
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(ClientError::Network)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<serde_json::Value>(&bytes)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned());
            return Err(ClientError::Status { status: status.as_u16(), message });
        }
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
    }

    pub async fn fetch_students(&self) -> Result<Vec<student::Model>, ClientError> { self.get("/students").await }

    pub async fn fetch_student_profile(&self, student_id: &str) -> Result<StudentProfile, ClientError> {
        self.get(&format!("/students/{}/profile", student_id)).await
    }

    pub async fn fetch_services(&self) -> Result<Vec<campus_service::Model>, ClientError> { self.get("/services").await }

    pub async fn fetch_service_summary(&self) -> Result<Vec<ServiceSummary>, ClientError> {
        self.get("/services/usage/summary").await
    }

    pub async fn fetch_environment(&self) -> Result<Vec<campus_environment::Model>, ClientError> {
        self.get("/environment/locations").await
    }
}

/// Render a mean rating to one decimal, `"n/a"` when there is none.
pub fn format_rating(avg: Option<f64>) -> String {
    match avg {
        Some(v) => format!("{:.1}", v),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rounds_to_one_decimal() {
        assert_eq!(format_rating(Some(3.0)), "3.0");
        assert_eq!(format_rating(Some(13.0 / 3.0)), "4.3");
        assert_eq!(format_rating(None), "n/a");
    }

    #[test]
    fn trailing_slash_trimmed() {
        assert_eq!(ApiClient::new("http://localhost:4000/api/").base_url(), "http://localhost:4000/api");
    }
}
