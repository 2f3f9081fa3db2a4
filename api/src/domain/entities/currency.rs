//! Currency domain entities
//!
//! Currency codes and the entries of the supported-currency list.

use serde::{Deserialize, Serialize};

/// ISO-style currency identifier (e.g. "USD")
///
/// The gateway does not check the code against any alphabet or list; the
/// upstream provider decides whether a code is legal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A currency supported by the upstream provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyListEntry {
    pub code: CurrencyCode,
    /// Human-readable name, e.g. "US Dollar"
    pub name: String,
}

impl CurrencyListEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: CurrencyCode::new(code),
            name: name.into(),
        }
    }
}
