//! HotelChain - top-level coordinator over hotels and reservation managers
//!
//! The chain validates a pure predicate before every mutating operation and
//! only then delegates to the owning Hotel (and ReservationManager where
//! payment bookkeeping is involved). The predicates double as a public
//! query API for UIs. Note that `can_make_reservation` checks date ordering
//! only; actual availability is the Hotel's call, so the chain gate can
//! pass while the hotel still rejects with a conflict.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument};

use innkeep_core::entities::check_in_date_reached;
use innkeep_core::{
    Clock, CreditCard, DomainError, Guest, Hotel, IdProvider, Identity, Reservation,
    ReservationManager, ReservationStatus, SystemClock, UuidProvider,
};

/// A named chain of hotels with its reservation managers.
///
/// Hotels are keyed by name, managers by id. All mutating operations take
/// `&mut self`; a chain shared across threads needs external mutual
/// exclusion around it.
pub struct HotelChain {
    name: String,
    hotels: HashMap<String, Hotel>,
    managers: HashMap<Identity, ReservationManager>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdProvider>,
}

impl HotelChain {
    /// Create a chain using the system clock and random ids
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_providers(name, Arc::new(SystemClock), Arc::new(UuidProvider))
    }

    /// Create a chain with injected clock and id sources (deterministic in
    /// tests)
    pub fn with_providers(
        name: impl Into<String>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdProvider>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyField("chain name"));
        }
        Ok(Self {
            name: trimmed.to_string(),
            hotels: HashMap::new(),
            managers: HashMap::new(),
            clock,
            ids,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // Registries
    // =========================================================================

    /// Register a hotel; names are unique within the chain
    pub fn add_hotel(&mut self, hotel: Hotel) -> Result<(), DomainError> {
        let key = hotel.name().as_str().to_string();
        if self.hotels.contains_key(&key) {
            return Err(DomainError::DuplicateHotel(key));
        }
        self.hotels.insert(key, hotel);
        Ok(())
    }

    /// Look up a hotel by name
    pub fn hotel(&self, name: &str) -> Result<&Hotel, DomainError> {
        self.hotels
            .get(name)
            .ok_or_else(|| DomainError::HotelNotFound(name.to_string()))
    }

    /// All hotels, in no particular order
    pub fn hotels(&self) -> impl Iterator<Item = &Hotel> {
        self.hotels.values()
    }

    /// Register a reservation manager, replacing any previous entry with
    /// the same id
    pub fn register_manager(&mut self, manager: ReservationManager) {
        self.managers.insert(manager.id().clone(), manager);
    }

    /// Look up a manager by id
    pub fn manager(&self, id: &Identity) -> Result<&ReservationManager, DomainError> {
        self.managers
            .get(id)
            .ok_or_else(|| DomainError::ManagerNotFound(id.clone()))
    }

    // =========================================================================
    // Gate predicates (public "can I do X" queries)
    // =========================================================================

    /// True when the requested range is well-ordered. Deliberately does NOT
    /// consult room availability; only the hotel-level create does that.
    pub fn can_make_reservation(&self, start: NaiveDate, end: NaiveDate) -> bool {
        end > start
    }

    /// True when the reservation has not reached a terminal state
    pub fn can_cancel_reservation(&self, reservation: &Reservation) -> bool {
        cancel_allowed(reservation)
    }

    /// True when the reservation is confirmed and the stay has started
    pub fn can_check_in_guest(&self, reservation: &Reservation) -> bool {
        check_in_allowed(reservation, self.clock.today())
    }

    /// True when the guest is currently checked in
    pub fn can_check_out_guest(&self, reservation: &Reservation) -> bool {
        check_out_allowed(reservation)
    }

    // =========================================================================
    // Mutating operations (validate the gate, then delegate)
    // =========================================================================

    /// Reserve a room and record the payment with a manager.
    ///
    /// The named hotel performs the availability check and creates the
    /// reservation; on success the manager records the card and the new
    /// reservation. Returns a copy of the created reservation.
    #[instrument(skip(self, guest, card), fields(chain = %self.name))]
    pub fn make_reservation(
        &mut self,
        hotel_name: &str,
        guest: &Guest,
        room_number: u32,
        start: NaiveDate,
        end: NaiveDate,
        manager_id: &Identity,
        card: CreditCard,
    ) -> Result<Reservation, DomainError> {
        if !self.can_make_reservation(start, end) {
            return Err(DomainError::ReservationNotAllowed);
        }
        // all lookups before any mutation
        if !self.managers.contains_key(manager_id) {
            return Err(DomainError::ManagerNotFound(manager_id.clone()));
        }
        let today = self.clock.today();
        let hotel = self
            .hotels
            .get_mut(hotel_name)
            .ok_or_else(|| DomainError::HotelNotFound(hotel_name.to_string()))?;

        let id = hotel.create_reservation(guest, room_number, start, end, today, self.ids.as_ref())?;
        let reservation = hotel.reservation(&id)?.clone();

        if let Some(manager) = self.managers.get_mut(manager_id) {
            manager.record_reservation(card, id.clone());
        }

        info!(
            reservation_id = %id,
            hotel = %hotel_name,
            room = room_number,
            guest_id = %guest.id(),
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Cancel a reservation at a hotel and drop it from its manager.
    ///
    /// Membership and status checks all run before either side mutates, so
    /// a rejection never leaves the hotel and manager out of step.
    #[instrument(skip(self), fields(chain = %self.name))]
    pub fn cancel_reservation(
        &mut self,
        hotel_name: &str,
        reservation_id: &Identity,
        manager_id: &Identity,
    ) -> Result<(), DomainError> {
        let manager = self
            .managers
            .get(manager_id)
            .ok_or_else(|| DomainError::ManagerNotFound(manager_id.clone()))?;
        if !manager.manages(reservation_id) {
            return Err(DomainError::ReservationNotManaged(reservation_id.clone()));
        }

        let hotel = self
            .hotels
            .get_mut(hotel_name)
            .ok_or_else(|| DomainError::HotelNotFound(hotel_name.to_string()))?;
        if !cancel_allowed(hotel.reservation(reservation_id)?) {
            return Err(DomainError::CancellationNotAllowed);
        }

        hotel.cancel_reservation(reservation_id)?;
        if let Some(manager) = self.managers.get_mut(manager_id) {
            manager.cancel_reservation(reservation_id)?;
        }

        info!(reservation_id = %reservation_id, hotel = %hotel_name, "Reservation cancelled");
        Ok(())
    }

    /// Check a guest in at the named hotel
    #[instrument(skip(self), fields(chain = %self.name))]
    pub fn check_in_guest(
        &mut self,
        hotel_name: &str,
        reservation_id: &Identity,
    ) -> Result<(), DomainError> {
        let today = self.clock.today();
        let hotel = self
            .hotels
            .get_mut(hotel_name)
            .ok_or_else(|| DomainError::HotelNotFound(hotel_name.to_string()))?;
        if !check_in_allowed(hotel.reservation(reservation_id)?, today) {
            return Err(DomainError::CheckInNotAllowed);
        }

        hotel.check_in_guest(reservation_id, today)?;
        info!(reservation_id = %reservation_id, hotel = %hotel_name, "Guest checked in");
        Ok(())
    }

    /// Check a guest out at the named hotel
    #[instrument(skip(self), fields(chain = %self.name))]
    pub fn check_out_guest(
        &mut self,
        hotel_name: &str,
        reservation_id: &Identity,
    ) -> Result<(), DomainError> {
        let hotel = self
            .hotels
            .get_mut(hotel_name)
            .ok_or_else(|| DomainError::HotelNotFound(hotel_name.to_string()))?;
        if !check_out_allowed(hotel.reservation(reservation_id)?) {
            return Err(DomainError::CheckOutNotAllowed);
        }

        hotel.check_out_guest(reservation_id)?;
        info!(reservation_id = %reservation_id, hotel = %hotel_name, "Guest checked out");
        Ok(())
    }
}

// Clock and id providers carry no useful state to print
impl fmt::Debug for HotelChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotelChain")
            .field("name", &self.name)
            .field("hotels", &self.hotels.len())
            .field("managers", &self.managers.len())
            .finish_non_exhaustive()
    }
}

// Free-function forms of the gate predicates so mutating operations can
// apply them while a hotel is mutably borrowed.

fn cancel_allowed(reservation: &Reservation) -> bool {
    !matches!(
        reservation.status(),
        ReservationStatus::CheckedOut | ReservationStatus::Cancelled
    )
}

fn check_in_allowed(reservation: &Reservation, today: NaiveDate) -> bool {
    reservation.status() == ReservationStatus::Confirmed
        && check_in_date_reached(reservation.start_date(), today)
}

fn check_out_allowed(reservation: &Reservation) -> bool {
    reservation.status() == ReservationStatus::CheckedIn
}
