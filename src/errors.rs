use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::SessionError;

/// Message shown when generation fails for an unexpected reason
pub const RETRY_MESSAGE: &str = "生成建议时出现错误，请稍后重试";

/// Application-level error type
///
/// Implements `ResponseError` so handlers can return `Result<HttpResponse, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl AppError {
    fn body(&self) -> ErrorResponse {
        let (error, message) = match self {
            AppError::Validation(msg) => ("validation_failed", msg.clone()),
            AppError::BadRequest(msg) => ("bad_request", msg.clone()),
            AppError::NotFound(msg) => ("not_found", msg.clone()),
            AppError::Session(SessionError::Missing(key)) => {
                ("not_found", format!("No stored results for {}", key))
            }
            AppError::Session(SessionError::SerializationError(e)) => {
                tracing::error!("Session serialization error: {}", e);
                ("internal_error", RETRY_MESSAGE.to_string())
            }
        };

        ErrorResponse {
            error: error.to_string(),
            message,
            status_code: self.status_code().as_u16(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::Session(SessionError::Missing(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Session(SessionError::SerializationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    AppError::BadRequest(format!("Invalid JSON: {}", err)).into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    AppError::BadRequest(format!("Invalid path: {}", err)).into()
}
