//! Fallback handlers
//!
//! Unknown `/api/` paths answer a JSON 404. Everything else is the UI:
//! existing files under the static directory are served as-is and any
//! other path gets the entry page, whatever the request method.

use axum::{
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;

use crate::error::AppError;
use crate::AppState;

const API_PREFIX: &str = "/api/";

/// Any unmatched path or method under `/api/`
pub async fn api_not_found() -> AppError {
    AppError::NotFound("API endpoint not found".to_string())
}

/// Router fallback
pub async fn fallback(State(state): State<AppState>, mut request: Request) -> Response {
    if request.uri().path().starts_with(API_PREFIX) {
        return api_not_found().await.into_response();
    }

    // The file services only answer GET and HEAD
    if request.method() != Method::GET && request.method() != Method::HEAD {
        *request.method_mut() = Method::GET;
    }

    match state.ui.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
