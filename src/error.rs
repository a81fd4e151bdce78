//! Error types for the lyrics proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == API Error Enum ==
/// Errors surfaced to HTTP clients.
///
/// Every variant renders as `{"error": "<message>"}` with a fixed message, so
/// no upstream detail leaks into responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing, oversized, or sentinel-valued query
    #[error("Bad request")]
    BadRequest,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Lyrics absent or the provider failed
    #[error("Lyrics not found")]
    NotFound,

    /// Upstream lyrics service answered with an unexpected failure
    #[error("Upstream lyrics service failed")]
    BadGateway,

    /// Upstream kept rate limiting past the retry budget
    #[error("Upstream lyrics service is rate limiting")]
    ServiceUnavailable,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadGateway => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));

        (self.status_code(), body).into_response()
    }
}

// == Provider Error Enum ==
/// Failures talking to the song search / lyrics provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response parsed but lacked a required field
    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

// == Fetch Error Enum ==
/// Failures of the direct lyrics fetch.
///
/// Anything other than rate limiting is returned to the caller as-is.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lyrics API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Lyrics API still rate limiting after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("Invalid lyrics payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status(status) if status == reqwest::StatusCode::NOT_FOUND => {
                ApiError::NotFound
            }
            FetchError::RateLimited { .. } => ApiError::ServiceUnavailable,
            _ => ApiError::BadGateway,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
