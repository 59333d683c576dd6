//! Id providers - injectable identity generation
//!
//! Reservation creation needs a fresh unique [`Identity`]. Production code
//! uses random UUIDs; tests inject a sequential provider for reproducible
//! fixtures.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::value_objects::Identity;

/// Capability that supplies fresh unique identities on demand
pub trait IdProvider: Send + Sync {
    /// Produce the next identity; every call must return a distinct value
    fn next_id(&self) -> Identity;
}

/// Random UUID v4 provider (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn next_id(&self) -> Identity {
        Identity::generate()
    }
}

/// Deterministic provider producing `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug)]
pub struct SequenceProvider {
    prefix: &'static str,
    counter: AtomicU64,
}

impl SequenceProvider {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequenceProvider {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdProvider for SequenceProvider {
    fn next_id(&self) -> Identity {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        // prefix is non-empty and static, so construction cannot fail
        Identity::new(format!("{}-{n}", self.prefix)).unwrap_or_else(|_| Identity::generate())
    }
}
