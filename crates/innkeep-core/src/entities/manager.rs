//! ReservationManager entity - associates payment instruments with the
//! reservations it manages

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::error::DomainError;
use crate::value_objects::{CreditCard, Identity};

/// Tracks which reservations a manager is responsible for, plus the credit
/// card recorded for them.
///
/// Card storage is keyed by the manager's OWN id, so only the most recently
/// recorded card survives no matter how many reservations are managed. This
/// mirrors the system being modeled and looks like a latent bug there; it
/// is preserved as observed behavior and pinned down by tests rather than
/// silently changed.
#[derive(Debug, Clone)]
pub struct ReservationManager {
    id: Identity,
    credit_cards: HashMap<Identity, CreditCard>,
    managed: Vec<Identity>,
}

impl ReservationManager {
    /// Create a manager with a freshly generated id
    pub fn new() -> Self {
        Self::with_id(Identity::generate())
    }

    /// Create a manager with an explicit id
    pub fn with_id(id: Identity) -> Self {
        Self {
            id,
            credit_cards: HashMap::new(),
            managed: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> &Identity {
        &self.id
    }

    /// Record card details, replacing any previously recorded card
    pub fn record_credit_card(&mut self, card: CreditCard) {
        self.credit_cards.insert(self.id.clone(), card);
    }

    /// The most recently recorded card, if any
    pub fn credit_card(&self) -> Option<&CreditCard> {
        self.credit_cards.get(&self.id)
    }

    /// Record a reservation under this manager along with its card
    pub fn record_reservation(&mut self, card: CreditCard, reservation_id: Identity) {
        self.record_credit_card(card);
        self.managed.push(reservation_id);
    }

    /// Whether the given reservation is on this manager's list
    pub fn manages(&self, reservation_id: &Identity) -> bool {
        self.managed.contains(reservation_id)
    }

    /// Remove a reservation from the managed list.
    ///
    /// This only drops the manager's bookkeeping entry; cancelling the
    /// underlying reservation is the caller's job to sequence.
    pub fn cancel_reservation(&mut self, reservation_id: &Identity) -> Result<(), DomainError> {
        let idx = self
            .managed
            .iter()
            .position(|id| id == reservation_id)
            .ok_or_else(|| DomainError::ReservationNotManaged(reservation_id.clone()))?;
        self.managed.remove(idx);
        Ok(())
    }

    /// Managed reservation ids, in the order they were recorded
    pub fn managed_reservations(&self) -> &[Identity] {
        &self.managed
    }

    #[inline]
    pub fn reservation_count(&self) -> usize {
        self.managed.len()
    }
}

impl Default for ReservationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ReservationManager {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ReservationManager {}

impl Hash for ReservationManager {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
