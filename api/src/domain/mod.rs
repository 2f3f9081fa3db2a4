//! Domain layer
//!
//! Contains pure business logic with no transport concerns.
//! - `entities`: request-scoped currency and conversion values
//! - `ports`: Trait definitions for the upstream rate provider

pub mod entities;
pub mod ports;
