//! Conversion handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::domain::entities::{ConversionQuery, ConversionResult};
use crate::error::AppError;
use crate::AppState;

/// Response body for a successful conversion
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    #[serde(flatten)]
    pub conversion: ConversionResult,
}

/// POST /api/convert
///
/// Body: `{"amount": number, "from": "USD", "to": "EUR"}`.
/// Validation runs before the credential check.
pub async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConversionQuery>, JsonRejection>,
) -> Result<Json<ConvertResponse>, AppError> {
    let Json(query) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected conversion body");
        AppError::BadRequest("Invalid request body".to_string())
    })?;

    let request = query.validate()?;
    let conversion = state.gateway.convert(request).await?;

    Ok(Json(ConvertResponse {
        success: true,
        conversion,
    }))
}
