//! Money - non-negative decimal amount

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A non-negative monetary amount.
///
/// Currency is implicit; the domain only ever deals in one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create an amount; negative values are rejected
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self(amount))
    }

    /// Zero amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Sum of two amounts
    pub fn add(&self, other: Money) -> Money {
        Money(self.0 + other.0)
    }

    /// Difference of two amounts. The result must not go negative; that is
    /// the caller's responsibility, there is no clamping.
    pub fn sub(&self, other: Money) -> Result<Money, DomainError> {
        Money::new(self.0 - other.0)
    }

    /// Scale by a whole-number factor (e.g. nightly rate times nights)
    pub fn multiply(&self, factor: u32) -> Money {
        Money(self.0 * Decimal::from(factor))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
