//! Rate provider port trait
//!
//! Defines the interface for the external exchange-rate service.

use async_trait::async_trait;

use crate::domain::entities::{ApiKey, CurrencyCode, CurrencyListEntry};
use crate::error::RateApiError;

/// Upstream exchange-rate provider
///
/// Each call is a single outbound request bounded by the implementation's
/// timeout. Implementations never retry.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// List supported currencies, in provider order
    async fn supported_codes(&self, key: &ApiKey) -> Result<Vec<CurrencyListEntry>, RateApiError>;

    /// Units of `to` per unit of `from`
    async fn pair_rate(
        &self,
        key: &ApiKey,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateApiError>;
}
