//! Unified error types for the fxgate API
//!
//! This module defines error types for each layer:
//! - `RateApiError`: upstream rate provider client errors
//! - `GatewayError`: gateway operation failures, each tagged with a `FailureKind`
//! - `AppError`: HTTP layer errors (rendered as `{success: false, error}`)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Upstream rate provider client errors
#[derive(Debug, Error)]
pub enum RateApiError {
    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The provider answered but reported `result != "success"`
    #[error("Provider rejected request: {error_type}")]
    Rejected { error_type: String },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<reqwest::Error> for RateApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RateApiError::Timeout
        } else {
            RateApiError::Request(e)
        }
    }
}

/// Category of a gateway failure, used to pick the HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Configuration,
    UpstreamBusiness,
    UpstreamTimeout,
    UpstreamOther,
}

impl FailureKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            FailureKind::Validation | FailureKind::UpstreamBusiness => StatusCode::BAD_REQUEST,
            FailureKind::UpstreamTimeout => StatusCode::REQUEST_TIMEOUT,
            FailureKind::Configuration | FailureKind::UpstreamOther => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Gateway operation failures
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("API key not configured")]
    NotConfigured,

    #[error("Invalid currency pair")]
    InvalidPair,

    #[error("Request timeout")]
    Timeout,

    #[error("Conversion failed")]
    ConversionFailed,

    #[error("Failed to fetch currencies")]
    CurrenciesUnavailable,
}

impl GatewayError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::MissingFields | GatewayError::InvalidAmount => FailureKind::Validation,
            GatewayError::NotConfigured => FailureKind::Configuration,
            GatewayError::InvalidPair => FailureKind::UpstreamBusiness,
            GatewayError::Timeout => FailureKind::UpstreamTimeout,
            GatewayError::ConversionFailed | GatewayError::CurrenciesUnavailable => {
                FailureKind::UpstreamOther
            }
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Gateway(#[from] GatewayError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Gateway(e) => (e.kind().status_code(), e.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(error))).into_response()
    }
}
