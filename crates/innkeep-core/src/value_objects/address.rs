//! Address - postal address value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated postal address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    city: String,
    postal_code: String,
}

impl Address {
    /// Create an address; each part is trimmed and must be non-empty
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            street: required("street", street.into())?,
            city: required("city", city.into())?,
            postal_code: required("postal code", postal_code.into())?,
        })
    }

    #[inline]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[inline]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[inline]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }
}

fn required(field: &'static str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.street, self.city, self.postal_code)
    }
}
