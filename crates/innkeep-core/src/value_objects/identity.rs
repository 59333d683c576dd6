//! Identity - opaque unique token used as the equality key for entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::DomainError;

/// Opaque unique identifier for guests, reservations, and managers.
///
/// The format of a generated id is an implementation detail; only
/// uniqueness and equality matter to the domain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Generate a fresh random identity
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create an identity from an explicit token (trimmed, non-empty)
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyIdentity);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The underlying token
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
