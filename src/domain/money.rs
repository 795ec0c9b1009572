use crate::error::{PaymentError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits every `Money` value carries.
pub const MONEY_SCALE: u32 = 2;

/// Represents a non-negative monetary amount with exactly 2 decimal places.
///
/// This is a wrapper around `rust_decimal::Decimal` that enforces the domain rules
/// at construction time, so any `Money` in hand is already valid. Values are
/// immutable; arithmetic returns a new `Money`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(dec!(0.00));

    /// Builds a `Money` from an exact decimal.
    ///
    /// Fails if the value is negative or needs more than two fractional digits
    /// once trailing zeros are dropped (`1.500` is fine, `1.005` is not).
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(PaymentError::ValidationError(
                "Amount cannot be negative".to_string(),
            ));
        }
        let normalized = value.normalize();
        if normalized.scale() > MONEY_SCALE {
            return Err(PaymentError::ValidationError(format!(
                "Amount {value} has more than {MONEY_SCALE} decimal places"
            )));
        }
        let mut scaled = normalized;
        scaled.rescale(MONEY_SCALE);
        if scaled.scale() != MONEY_SCALE {
            return Err(PaymentError::ValidationError(format!(
                "Amount {value} is too large to carry {MONEY_SCALE} decimal places"
            )));
        }
        Ok(Self(scaled))
    }

    /// Parses user input, rounding half-to-even to two decimal places.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PaymentError::ValidationError(
                "Amount cannot be empty".to_string(),
            ));
        }
        let raw = Decimal::from_str(trimmed).map_err(|e| {
            PaymentError::ValidationError(format!("Invalid amount '{trimmed}': {e}"))
        })?;
        Self::new(raw.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `None` when `rhs` exceeds `self`.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).and_then(|diff| Self::new(diff).ok())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Decimal> for Money {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl FromStr for Money {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = rust_decimal::serde::str::deserialize(deserializer)?;
        Money::new(value).map_err(serde::de::Error::custom)
    }
}
