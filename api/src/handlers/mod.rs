//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod convert;
pub mod currencies;
pub mod fallback;
pub mod health;

pub use convert::convert;
pub use currencies::list_currencies;
pub use fallback::{api_not_found, fallback};
pub use health::health;
