//! Response types and error handling for API endpoints
//!
//! Failures are rendered in the same envelope as successes:
//! `{"response": {code, message, details?}, "success": false}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use thoughts_common::ErrorResponse;
use thoughts_service::{ApiResponse, ServiceError};
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::InvalidBody(_) | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
        }
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Error object placed in the envelope's `response` field
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            Self::Service(ServiceError::Domain(e)) => ErrorResponse::from(e),
            _ => ErrorResponse::new(self.error_code(), self.to_string()),
        }
    }

    fn render(self, status: StatusCode) -> Response {
        if self.status_code().is_server_error() {
            error!(error = %self, "Server error occurred");
        }

        let body = ApiResponse::failed(self.to_error_response());
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.render(status)
    }
}

/// Error reported to the client as 400 whatever its cause
///
/// Used by the create and like endpoints, where store failures surface as
/// bad requests rather than server errors.
#[derive(Debug)]
pub struct Rejected(pub ApiError);

impl From<ApiError> for Rejected {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<ServiceError> for Rejected {
    fn from(err: ServiceError) -> Self {
        Self(ApiError::Service(err))
    }
}

impl IntoResponse for Rejected {
    fn into_response(self) -> Response {
        self.0.render(StatusCode::BAD_REQUEST)
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Successful envelope `{"response": T, "success": true}`
pub struct Envelope<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(ApiResponse::ok(self.0)).into_response()
    }
}

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
