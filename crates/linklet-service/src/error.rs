use linklet_core::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors surfaced by the link service.
///
/// Every path through create/resolve/stats/delete resolves to one of
/// these variants or success; store errors never escape unmapped.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("short code not found")]
    NotFound,
    #[error("short code generation exhausted after {0} attempts")]
    GenerationExhausted(u32),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}
