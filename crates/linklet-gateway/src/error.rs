use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linklet_service::ServiceError;
use serde::Serialize;

pub type Result<T> = std::result::Result<T, AppError>;

/// Wraps service failures and maps them onto the wire contract.
#[derive(Debug)]
pub struct AppError(ServiceError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::GenerationExhausted(_) | ServiceError::StorageUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorBody {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
