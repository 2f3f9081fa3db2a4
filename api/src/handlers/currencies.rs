//! Currency list handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::CurrencyListEntry;
use crate::error::AppError;
use crate::AppState;

/// Response body for the currency list
#[derive(Debug, Serialize)]
pub struct CurrenciesResponse {
    pub success: bool,
    pub currencies: Vec<CurrencyListEntry>,
}

/// GET /api/currencies
///
/// Supported currencies, fetched fresh from the provider on every call.
pub async fn list_currencies(
    State(state): State<AppState>,
) -> Result<Json<CurrenciesResponse>, AppError> {
    let currencies = state.gateway.list_currencies().await?;

    Ok(Json(CurrenciesResponse {
        success: true,
        currencies,
    }))
}
