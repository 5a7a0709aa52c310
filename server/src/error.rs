use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use lostark_siblings::SiblingsError;
use serde_json::json;
use tracing::{error, warn};

pub const MISSING_KEY: &str = "API key is missing";
pub const INVALID_NAME: &str = "Invalid character name";
pub const UPSTREAM_FAILED: &str = "Failed to fetch data from external API";
pub const MALFORMED_UPSTREAM: &str = "Malformed response from external API";
pub const UNEXPECTED: &str = "An unexpected error occurred";

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    pub fn missing_key() -> Self {
        Self::bad_request(MISSING_KEY)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<SiblingsError> for AppError {
    fn from(e: SiblingsError) -> Self {
        match &e {
            SiblingsError::MissingApiKey => AppError::missing_key(),
            // Upstream detail is dropped; only the status survives.
            SiblingsError::Upstream { status } => {
                let status =
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                AppError::new(status, UPSTREAM_FAILED)
            }
            SiblingsError::Json(_) | SiblingsError::MalformedResponse(_) => {
                warn!(error = %e, "Rejecting malformed upstream payload");
                AppError::bad_gateway(MALFORMED_UPSTREAM)
            }
            SiblingsError::InvalidArgument(msg) => AppError::bad_request(msg.clone()),
            SiblingsError::Http(_) => {
                error!(error = %e, "Upstream request failed");
                AppError::internal(UNEXPECTED)
            }
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        warn!(error = %e, "Rejecting undecodable path");
        AppError::bad_request(INVALID_NAME)
    }
}
