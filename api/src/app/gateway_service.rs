//! Rate gateway service
//!
//! Mediates between HTTP callers and the upstream rate provider: checks the
//! credential, short-circuits identity conversions, and turns provider
//! failures into tagged `GatewayError`s.

use std::sync::Arc;

use crate::domain::entities::{ApiKey, ConversionRequest, ConversionResult, CurrencyListEntry};
use crate::domain::ports::RateProvider;
use crate::error::{GatewayError, RateApiError};

/// Service for listing currencies and converting amounts
pub struct RateGateway<RP>
where
    RP: RateProvider,
{
    provider: Arc<RP>,
    api_key: Option<ApiKey>,
}

impl<RP> RateGateway<RP>
where
    RP: RateProvider,
{
    pub fn new(provider: Arc<RP>, api_key: Option<ApiKey>) -> Self {
        Self { provider, api_key }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn credential(&self) -> Result<&ApiKey, GatewayError> {
        self.api_key.as_ref().ok_or_else(|| {
            tracing::error!("API key not configured");
            GatewayError::NotConfigured
        })
    }

    /// Fetch the supported currency list, in provider order
    ///
    /// Every upstream failure, timeouts included, is reported the same way.
    pub async fn list_currencies(&self) -> Result<Vec<CurrencyListEntry>, GatewayError> {
        let key = self.credential()?;

        tracing::info!("Fetching currencies...");
        let currencies = self.provider.supported_codes(key).await.map_err(|e| {
            tracing::error!(error = %e, "Currency fetch error");
            GatewayError::CurrenciesUnavailable
        })?;

        tracing::info!("Loaded {} currencies", currencies.len());
        Ok(currencies)
    }

    /// Convert a validated request
    ///
    /// The credential is checked before anything else, then identical
    /// currencies are answered locally at rate 1 without an upstream call.
    pub async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionResult, GatewayError> {
        let key = self.credential()?;

        tracing::info!(
            "Converting {} {} to {}",
            request.amount,
            request.from,
            request.to
        );

        if request.is_same_currency() {
            return Ok(ConversionResult::identity(request));
        }

        let rate = self
            .provider
            .pair_rate(key, &request.from, &request.to)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, from = %request.from, to = %request.to, "Conversion error");
                conversion_failure(e)
            })?;

        Ok(ConversionResult::at_rate(request, rate))
    }
}

/// Map an upstream failure on the pair endpoint to its gateway error
fn conversion_failure(error: RateApiError) -> GatewayError {
    match error {
        RateApiError::Rejected { .. } => GatewayError::InvalidPair,
        RateApiError::Timeout => GatewayError::Timeout,
        RateApiError::Request(_) | RateApiError::Api { .. } | RateApiError::Deserialization(_) => {
            GatewayError::ConversionFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        conversion_request, test_api_key, test_currencies, MockFailure, MockRateProvider,
    };

    fn configured(provider: MockRateProvider) -> (RateGateway<MockRateProvider>, Arc<MockRateProvider>) {
        let provider = Arc::new(provider);
        (
            RateGateway::new(provider.clone(), Some(test_api_key())),
            provider,
        )
    }

    fn unconfigured(
        provider: MockRateProvider,
    ) -> (RateGateway<MockRateProvider>, Arc<MockRateProvider>) {
        let provider = Arc::new(provider);
        (RateGateway::new(provider.clone(), None), provider)
    }

    #[tokio::test]
    async fn list_currencies_returns_provider_list() {
        let (gateway, provider) = configured(MockRateProvider::new().with_codes(test_currencies()));

        let currencies = gateway.list_currencies().await.unwrap();

        assert_eq!(currencies, test_currencies());
        assert_eq!(provider.calls(), 1);
        assert_eq!(provider.last_key().as_deref(), Some("test-key"));
    }

    #[tokio::test]
    async fn list_currencies_without_key_makes_no_call() {
        let (gateway, provider) = unconfigured(MockRateProvider::new().with_codes(test_currencies()));

        let err = gateway.list_currencies().await.unwrap_err();

        assert_eq!(err, GatewayError::NotConfigured);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn list_currencies_failures_are_not_distinguished() {
        for failure in [
            MockFailure::Rejected,
            MockFailure::Timeout,
            MockFailure::Api,
            MockFailure::Malformed,
        ] {
            let (gateway, _) = configured(MockRateProvider::new().failing_codes(failure));
            let err = gateway.list_currencies().await.unwrap_err();
            assert_eq!(err, GatewayError::CurrenciesUnavailable, "{failure:?}");
        }
    }

    #[tokio::test]
    async fn same_currency_skips_upstream() {
        let (gateway, provider) = configured(MockRateProvider::new());

        let result = gateway
            .convert(conversion_request(100.0, "USD", "USD"))
            .await
            .unwrap();

        assert_eq!(result.result, 100.0);
        assert_eq!(result.rate, 1.0);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn same_currency_keeps_amount_unrounded() {
        let (gateway, _) = configured(MockRateProvider::new());

        let result = gateway
            .convert(conversion_request(3.14159, "JPY", "JPY"))
            .await
            .unwrap();

        assert_eq!(result.result, 3.14159);
    }

    #[tokio::test]
    async fn convert_without_key_fails_before_same_currency_shortcut() {
        let (gateway, provider) = unconfigured(MockRateProvider::new());

        let err = gateway
            .convert(conversion_request(100.0, "USD", "USD"))
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::NotConfigured);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn convert_applies_rate_and_rounds() {
        let (gateway, provider) = configured(MockRateProvider::new().with_rate("USD", "EUR", 0.92));

        let result = gateway
            .convert(conversion_request(50.0, "USD", "EUR"))
            .await
            .unwrap();

        assert_eq!(result.result, 46.0);
        assert_eq!(result.rate, 0.92);
        assert_eq!(result.from.as_str(), "USD");
        assert_eq!(result.to.as_str(), "EUR");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn convert_rounds_to_two_places_but_keeps_rate() {
        let (gateway, _) = configured(MockRateProvider::new().with_rate("EUR", "JPY", 162.3456));

        let result = gateway
            .convert(conversion_request(3.0, "EUR", "JPY"))
            .await
            .unwrap();

        assert_eq!(result.result, 487.04);
        assert_eq!(result.rate, 162.3456);
    }

    #[tokio::test]
    async fn rejected_pair_is_invalid_pair() {
        let (gateway, _) = configured(MockRateProvider::new());

        let err = gateway
            .convert(conversion_request(10.0, "USD", "XXX"))
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::InvalidPair);
    }

    #[tokio::test]
    async fn timeout_is_distinct_from_other_failures() {
        let (gateway, _) = configured(MockRateProvider::new().failing_pairs(MockFailure::Timeout));

        let err = gateway
            .convert(conversion_request(10.0, "USD", "EUR"))
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::Timeout);
    }

    #[tokio::test]
    async fn other_failures_collapse_to_conversion_failed() {
        for failure in [MockFailure::Api, MockFailure::Malformed] {
            let (gateway, provider) = configured(MockRateProvider::new().failing_pairs(failure));

            let err = gateway
                .convert(conversion_request(10.0, "USD", "EUR"))
                .await
                .unwrap_err();

            assert_eq!(err, GatewayError::ConversionFailed, "{failure:?}");
            // No retries
            assert_eq!(provider.calls(), 1);
        }
    }

    #[test]
    fn is_configured_reflects_key() {
        let provider = Arc::new(MockRateProvider::new());
        assert!(RateGateway::new(provider.clone(), Some(test_api_key())).is_configured());
        assert!(!RateGateway::new(provider, None).is_configured());
    }
}
