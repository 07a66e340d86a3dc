use thiserror::Error;

/// Failure surfaced by any read against the store.
///
/// "Not found" is never an error here: an unknown student yields an empty
/// profile, not a `ServiceError`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("retrieval failure: {0}")]
    Retrieval(String),
}

impl ServiceError {
    pub fn retrieval(err: impl std::fmt::Display) -> Self { Self::Retrieval(err.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Retrieval(_) => 1200,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(err: sea_orm::DbErr) -> Self { Self::retrieval(err) }
}
