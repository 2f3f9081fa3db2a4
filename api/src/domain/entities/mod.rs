//! Domain entities
//!
//! Request-scoped values for currency listing and conversion.
//! Nothing here is persisted.

pub mod conversion;
pub mod credential;
pub mod currency;

pub use conversion::{ConversionQuery, ConversionRequest, ConversionResult};
pub use credential::ApiKey;
pub use currency::{CurrencyCode, CurrencyListEntry};
