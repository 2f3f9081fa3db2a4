//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{ApiKey, ConversionRequest, CurrencyCode, CurrencyListEntry};

/// Credential used throughout the tests
pub fn test_api_key() -> ApiKey {
    ApiKey::parse("test-key").expect("non-blank key")
}

/// A short provider-ordered currency list
pub fn test_currencies() -> Vec<CurrencyListEntry> {
    vec![
        CurrencyListEntry::new("USD", "US Dollar"),
        CurrencyListEntry::new("EUR", "Euro"),
    ]
}

/// A validated conversion request
pub fn conversion_request(amount: f64, from: &str, to: &str) -> ConversionRequest {
    ConversionRequest {
        amount,
        from: CurrencyCode::from(from),
        to: CurrencyCode::from(to),
    }
}
