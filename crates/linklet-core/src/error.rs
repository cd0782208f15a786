use thiserror::Error;

/// Errors from core type validation.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Transient failures from a link store backend.
///
/// Not-found is not an error: store operations report absence through
/// their `Option`/`bool` return values.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}
