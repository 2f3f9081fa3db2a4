//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mock provider counts outbound calls so tests can assert that a
//! request was answered without touching the upstream.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
