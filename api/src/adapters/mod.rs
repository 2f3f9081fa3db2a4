//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod exchangerate;

pub use exchangerate::ExchangeRateClient;
