//! Hotel entity - owns rooms and the reservation log, and is the sole
//! authority on room availability
//!
//! A room belongs to exactly one hotel; reservations reference rooms by
//! number, so "does this room belong to this hotel" is a map lookup rather
//! than a pointer-identity comparison. The availability rule is the
//! inclusive overlap test: a candidate range [start, end] conflicts with an
//! existing non-cancelled reservation unless it ends before the existing
//! one starts or begins after it ends.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::entities::reservation::check_in_date_reached;
use crate::entities::{Guest, Reservation, ReservationStatus, Room};
use crate::error::DomainError;
use crate::ids::IdProvider;
use crate::value_objects::{Identity, Name, RoomType};

/// A hotel: a set of uniquely numbered rooms plus an append-only
/// reservation log in creation order.
#[derive(Debug, Clone)]
pub struct Hotel {
    name: Name,
    rooms: BTreeMap<u32, Room>,
    reservations: Vec<Reservation>,
}

impl Hotel {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            rooms: BTreeMap::new(),
            reservations: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Add a room; the number must not already be present
    pub fn add_room(&mut self, room: Room) -> Result<(), DomainError> {
        if self.rooms.contains_key(&room.number()) {
            return Err(DomainError::DuplicateRoom(room.number()));
        }
        self.rooms.insert(room.number(), room);
        Ok(())
    }

    /// Look up a room by number
    pub fn room(&self, number: u32) -> Result<&Room, DomainError> {
        self.rooms
            .get(&number)
            .ok_or(DomainError::RoomNotFound(number))
    }

    /// All rooms, in room-number order
    pub fn all_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Rooms of the given type with no conflicting non-cancelled
    /// reservation in [start, end]
    pub fn available_rooms(
        &self,
        room_type: &RoomType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<&Room>, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidDateRange);
        }
        Ok(self
            .rooms
            .values()
            .filter(|room| room.room_type() == room_type)
            .filter(|room| self.is_room_available(room.number(), start, end))
            .collect())
    }

    fn is_room_available(&self, room_number: u32, start: NaiveDate, end: NaiveDate) -> bool {
        !self
            .reservations
            .iter()
            .filter(|r| r.room_number() == room_number)
            .filter(|r| r.status() != ReservationStatus::Cancelled)
            .any(|r| dates_conflict(r, start, end))
    }

    /// Create a reservation for one of this hotel's rooms.
    ///
    /// Checks run in order: room membership, availability, then date
    /// validation inside [`Reservation::create`]. Nothing is mutated until
    /// all checks pass. Returns the new reservation's id.
    pub fn create_reservation(
        &mut self,
        guest: &Guest,
        room_number: u32,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
        ids: &dyn IdProvider,
    ) -> Result<Identity, DomainError> {
        if !self.rooms.contains_key(&room_number) {
            return Err(DomainError::RoomNotFound(room_number));
        }
        if !self.is_room_available(room_number, start, end) {
            return Err(DomainError::RoomUnavailable(room_number));
        }

        let reservation =
            Reservation::create(guest.id().clone(), room_number, start, end, today, ids)?;
        let id = reservation.id().clone();
        self.reservations.push(reservation);
        Ok(id)
    }

    /// Look up a reservation in this hotel's log
    pub fn reservation(&self, id: &Identity) -> Result<&Reservation, DomainError> {
        self.reservations
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| DomainError::ReservationNotFound(id.clone()))
    }

    fn reservation_index(&self, id: &Identity) -> Result<usize, DomainError> {
        self.reservations
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DomainError::ReservationNotFound(id.clone()))
    }

    /// Cancel a reservation owned by this hotel
    pub fn cancel_reservation(&mut self, id: &Identity) -> Result<(), DomainError> {
        let idx = self.reservation_index(id)?;
        self.reservations[idx].cancel()
    }

    /// Check a guest in: transition the reservation and mark the room
    /// occupied by the guest.
    ///
    /// The start-date guard runs here as well as inside
    /// [`Reservation::check_in`]; both layers share the same predicate.
    pub fn check_in_guest(&mut self, id: &Identity, today: NaiveDate) -> Result<(), DomainError> {
        let idx = self.reservation_index(id)?;
        if !check_in_date_reached(self.reservations[idx].start_date(), today) {
            return Err(DomainError::CheckInNotReached {
                start: self.reservations[idx].start_date(),
            });
        }
        self.reservations[idx].check_in(today)?;

        let guest_id = self.reservations[idx].guest_id().clone();
        let room_number = self.reservations[idx].room_number();
        if let Some(room) = self.rooms.get_mut(&room_number) {
            room.set_occupant(Some(guest_id));
        }
        Ok(())
    }

    /// Check a guest out: transition the reservation and clear the room's
    /// occupant.
    ///
    /// The occupant is cleared unconditionally, without verifying it is
    /// this reservation's guest. If two check-ins touched the same room the
    /// later one wins and the first checkout empties the room.
    pub fn check_out_guest(&mut self, id: &Identity) -> Result<(), DomainError> {
        let idx = self.reservation_index(id)?;
        self.reservations[idx].check_out()?;

        let room_number = self.reservations[idx].room_number();
        if let Some(room) = self.rooms.get_mut(&room_number) {
            room.set_occupant(None);
        }
        Ok(())
    }

    /// All reservations held by the given guest, in creation order
    pub fn guest_reservations(&self, guest_id: &Identity) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.guest_id() == guest_id)
            .collect()
    }

    /// Reservations that are neither cancelled nor checked out
    pub fn active_reservations(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.status().is_active())
            .collect()
    }

    /// The full reservation log in creation order
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }
}

/// Inclusive overlap test: conflict iff
/// `!(end < exist_start || start > exist_end)`.
fn dates_conflict(existing: &Reservation, start: NaiveDate, end: NaiveDate) -> bool {
    !(end < existing.start_date() || start > existing.end_date())
}
