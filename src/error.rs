use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body: `error` carries the short description shown to the
/// client, `details` the underlying cause when there is one.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Provider(_) | Self::Configuration(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert to the `{error, details}` response body
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => ErrorResponse {
                error: msg.clone(),
                details: None,
            },
            Self::Provider(msg) => ErrorResponse {
                error: "External service error".to_string(),
                details: Some(msg.clone()),
            },
            Self::Configuration(msg) => ErrorResponse {
                error: "Configuration error".to_string(),
                details: Some(msg.clone()),
            },
            Self::Io(err) => ErrorResponse {
                error: "Internal server error".to_string(),
                details: Some(err.to_string()),
            },
            Self::Internal(msg) => ErrorResponse {
                error: "Internal server error".to_string(),
                details: Some(msg.clone()),
            },
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        let error_response = self.to_response();

        (status, Json(error_response)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
