//! RoomType - kind of room and its nightly rate

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Money;

/// An immutable (kind, nightly cost) pair. Two room types are equal only if
/// both the kind and the cost match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomType {
    kind: String,
    cost: Money,
}

impl RoomType {
    /// Create a room type; the kind is trimmed and must be non-empty
    pub fn new(kind: impl Into<String>, cost: Money) -> Result<Self, DomainError> {
        let kind = kind.into();
        let trimmed = kind.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyField("room kind"));
        }
        Ok(Self {
            kind: trimmed.to_string(),
            cost,
        })
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn cost(&self) -> Money {
        self.cost
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.kind, self.cost)
    }
}
