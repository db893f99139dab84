use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    generation::{ErrorKind, GenerationError},
    validation::ValidationError,
    ApiError,
};

pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const NOT_FOUND: &str = "Not Found";
pub const NOT_CONFIGURED: &str =
    "GEMINI_API_KEY environment variable is not configured.";
pub const INVALID_API_KEY: &str =
    "Invalid API Key. Please check your GEMINI_API_KEY configuration.";
pub const GENERATION_FAILED: &str =
    "Failed to generate sales text. Please try again later.";

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::ClientError(_) => StatusCode::BAD_REQUEST,
            ApiError::ServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = match self {
            ApiError::MethodNotAllowed => ErrorResponse {
                message: METHOD_NOT_ALLOWED.to_string(),
                error: None,
            },
            ApiError::NotFound => ErrorResponse {
                message: NOT_FOUND.to_string(),
                error: None,
            },
            ApiError::ClientError(message) => ErrorResponse {
                message,
                error: None,
            },
            ApiError::ServerError { message, error } => {
                ErrorResponse { message, error }
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::ClientError(e.message.to_string())
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        match e.kind {
            ErrorKind::MissingCredentials => ApiError::ServerError {
                message: NOT_CONFIGURED.to_string(),
                error: None,
            },
            ErrorKind::UpstreamRejected => ApiError::ServerError {
                message: INVALID_API_KEY.to_string(),
                error: Some(e.message),
            },
            ErrorKind::UpstreamFailure => ApiError::ServerError {
                message: GENERATION_FAILED.to_string(),
                error: Some(e.message),
            },
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_api_response(self, task: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, GenerationError> {
    fn into_api_response(self, task: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(task = task, kind = ?e.kind, error = %e);
            ApiError::from(e)
        })
    }
}
