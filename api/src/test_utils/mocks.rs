//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::entities::{ApiKey, CurrencyCode, CurrencyListEntry};
use crate::domain::ports::RateProvider;
use crate::error::RateApiError;

/// Failure a mock provider should report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Provider answered with `result: "error"`
    Rejected,
    Timeout,
    /// Non-2xx status without a provider body
    Api,
    Malformed,
}

impl MockFailure {
    fn to_error(self) -> RateApiError {
        match self {
            MockFailure::Rejected => RateApiError::Rejected {
                error_type: "unsupported-code".to_string(),
            },
            MockFailure::Timeout => RateApiError::Timeout,
            MockFailure::Api => RateApiError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            },
            MockFailure::Malformed => {
                RateApiError::Deserialization("missing field `conversion_rate`".to_string())
            }
        }
    }
}

// ============================================================================
// Mock Rate Provider
// ============================================================================

#[derive(Default)]
pub struct MockRateProvider {
    codes: Vec<CurrencyListEntry>,
    codes_failure: Option<MockFailure>,
    rates: HashMap<(String, String), f64>,
    pair_failure: Option<MockFailure>,
    calls: AtomicUsize,
    last_key: RwLock<Option<String>>,
}

impl MockRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codes(mut self, codes: Vec<CurrencyListEntry>) -> Self {
        self.codes = codes;
        self
    }

    pub fn with_rate(mut self, from: &str, to: &str, rate: f64) -> Self {
        self.rates.insert((from.to_string(), to.to_string()), rate);
        self
    }

    pub fn failing_codes(mut self, failure: MockFailure) -> Self {
        self.codes_failure = Some(failure);
        self
    }

    pub fn failing_pairs(mut self, failure: MockFailure) -> Self {
        self.pair_failure = Some(failure);
        self
    }

    /// Number of upstream calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Credential passed on the most recent call
    pub fn last_key(&self) -> Option<String> {
        self.last_key.read().unwrap().clone()
    }

    fn record(&self, key: &ApiKey) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_key.write().unwrap() = Some(key.expose().to_string());
    }
}

#[async_trait]
impl RateProvider for MockRateProvider {
    async fn supported_codes(&self, key: &ApiKey) -> Result<Vec<CurrencyListEntry>, RateApiError> {
        self.record(key);
        match self.codes_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.codes.clone()),
        }
    }

    async fn pair_rate(
        &self,
        key: &ApiKey,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateApiError> {
        self.record(key);
        if let Some(failure) = self.pair_failure {
            return Err(failure.to_error());
        }
        self.rates
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .ok_or_else(|| MockFailure::Rejected.to_error())
    }
}
