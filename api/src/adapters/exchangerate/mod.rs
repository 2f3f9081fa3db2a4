//! ExchangeRate-API adapter
//!
//! Implementation of the rate provider port for the upstream HTTP API.

pub mod client;

pub use client::{ExchangeRateClient, DEFAULT_BASE_URL};
