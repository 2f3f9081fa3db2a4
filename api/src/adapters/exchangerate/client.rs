//! ExchangeRate-API client implementation
//!
//! Speaks the v6 wire format: `GET {base}/{key}/codes` and
//! `GET {base}/{key}/pair/{from}/{to}`. Every response carries a `result`
//! field that is `"success"` or `"error"` (with an `error-type`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{ApiKey, CurrencyCode, CurrencyListEntry};
use crate::domain::ports::RateProvider;
use crate::error::RateApiError;

/// Default upstream base URL
pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Implementation of the rate provider over HTTP
pub struct ExchangeRateClient {
    http: Client,
    base_url: String,
}

impl ExchangeRateClient {
    /// Build a client whose every request is bounded by `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RateApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("fxgate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RateApiError::Request)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, key: &ApiKey, path: &str) -> String {
        format!("{}/{}{}", self.base_url, encode(key.expose()), path)
    }

    async fn get<T: DeserializeOwned>(&self, key: &ApiKey, path: &str) -> Result<T, RateApiError> {
        tracing::debug!("Requesting {}/***{}", self.base_url, path);

        let response = self.http.get(self.api_url(key, path)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_response(status, &body)
    }
}

/// Status envelope shared by every provider response
#[derive(Deserialize)]
struct ProviderStatus {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

#[derive(Deserialize)]
struct CodesResponse {
    supported_codes: Vec<(String, String)>,
}

#[derive(Deserialize)]
struct PairResponse {
    conversion_rate: f64,
}

/// Interpret a provider response body.
///
/// A body with `result != "success"` is a rejection regardless of the HTTP
/// status; the provider answers unknown codes and bad keys that way.
fn parse_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, RateApiError> {
    match serde_json::from_str::<ProviderStatus>(body) {
        Ok(envelope) if envelope.result != "success" => {
            return Err(RateApiError::Rejected {
                error_type: envelope.error_type.unwrap_or(envelope.result),
            });
        }
        Ok(_) => {}
        Err(_) if !status.is_success() => {
            return Err(RateApiError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }
        Err(e) => return Err(RateApiError::Deserialization(e.to_string())),
    }

    if !status.is_success() {
        return Err(RateApiError::Api {
            status: status.as_u16(),
            message: body.chars().take(200).collect(),
        });
    }

    serde_json::from_str(body).map_err(|e| RateApiError::Deserialization(e.to_string()))
}

#[async_trait]
impl RateProvider for ExchangeRateClient {
    async fn supported_codes(&self, key: &ApiKey) -> Result<Vec<CurrencyListEntry>, RateApiError> {
        let response: CodesResponse = self.get(key, "/codes").await?;

        Ok(response
            .supported_codes
            .into_iter()
            .map(|(code, name)| CurrencyListEntry::new(code, name))
            .collect())
    }

    async fn pair_rate(
        &self,
        key: &ApiKey,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateApiError> {
        let path = format!(
            "/pair/{}/{}",
            encode(from.as_str()),
            encode(to.as_str())
        );
        let response: PairResponse = self.get(key, &path).await?;

        Ok(response.conversion_rate)
    }
}
