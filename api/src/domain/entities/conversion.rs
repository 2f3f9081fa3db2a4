//! Conversion domain entities
//!
//! A conversion arrives as a loosely-typed JSON body (`ConversionQuery`),
//! is validated into a `ConversionRequest`, and is answered with a
//! `ConversionResult`.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::currency::CurrencyCode;
use crate::error::GatewayError;

/// Decimal places kept in a converted amount
pub const RESULT_DECIMAL_PLACES: u32 = 2;

/// Raw conversion body as posted by the UI
///
/// Fields stay untyped so that missing, empty and malformed values can be
/// told apart during validation.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionQuery {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub from: Option<Value>,
    #[serde(default)]
    pub to: Option<Value>,
}

impl ConversionQuery {
    /// Validate the body.
    ///
    /// Presence of all three fields is checked before the amount is parsed.
    /// Numeric strings such as `"100"` are accepted as amounts.
    pub fn validate(self) -> Result<ConversionRequest, GatewayError> {
        let amount = self.amount.filter(|v| !is_blank(v));
        let from = self.from.as_ref().and_then(non_empty_str);
        let to = self.to.as_ref().and_then(non_empty_str);

        let (Some(amount), Some(from), Some(to)) = (amount, from, to) else {
            return Err(GatewayError::MissingFields);
        };

        let amount = parse_amount(&amount).ok_or(GatewayError::InvalidAmount)?;

        Ok(ConversionRequest {
            amount,
            from: CurrencyCode::new(from),
            to: CurrencyCode::new(to),
        })
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// A validated conversion request
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Strictly positive and finite
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl ConversionRequest {
    pub fn is_same_currency(&self) -> bool {
        self.from == self.to
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub result: f64,
    /// Units of `to` per unit of `from`
    pub rate: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl ConversionResult {
    /// Identity conversion: the amount is echoed unrounded at rate 1.
    pub fn identity(request: ConversionRequest) -> Self {
        Self {
            result: request.amount,
            rate: 1.0,
            from: request.from,
            to: request.to,
        }
    }

    pub fn at_rate(request: ConversionRequest, rate: f64) -> Self {
        Self {
            result: convert_amount(request.amount, rate),
            rate,
            from: request.from,
            to: request.to,
        }
    }
}

/// `amount * rate`, rounded half-up to two decimal places.
///
/// The product is taken in decimal arithmetic so that values such as
/// `1.005` round to `1.01` rather than to whatever the nearest binary
/// double happens to be.
pub fn convert_amount(amount: f64, rate: f64) -> f64 {
    let product = Decimal::from_f64(amount)
        .zip(Decimal::from_f64(rate))
        .and_then(|(a, r)| a.checked_mul(r));

    match product {
        Some(p) => p
            .round_dp_with_strategy(RESULT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or_else(|| round_f64(amount * rate)),
        // Out of decimal range
        None => round_f64(amount * rate),
    }
}

fn round_f64(value: f64) -> f64 {
    let scale = 10f64.powi(RESULT_DECIMAL_PLACES as i32);
    (value * scale).round() / scale
}
