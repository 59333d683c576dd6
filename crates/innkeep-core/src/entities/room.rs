//! Room entity - a numbered room with a type and an optional occupant

use std::hash::{Hash, Hasher};

use crate::error::DomainError;
use crate::value_objects::{Identity, RoomType};

/// A room in a hotel.
///
/// Equality is by (number, room type) only. The occupant is mutable
/// operational state and deliberately outside identity: two rooms that
/// agree on number and type compare equal regardless of who is in them.
#[derive(Debug, Clone)]
pub struct Room {
    number: u32,
    room_type: RoomType,
    occupant: Option<Identity>,
}

impl Room {
    /// Create an unoccupied room; the number must be positive
    pub fn new(number: u32, room_type: RoomType) -> Result<Self, DomainError> {
        if number == 0 {
            return Err(DomainError::InvalidRoomNumber);
        }
        Ok(Self {
            number,
            room_type,
            occupant: None,
        })
    }

    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[inline]
    pub fn room_type(&self) -> &RoomType {
        &self.room_type
    }

    /// Id of the guest currently checked into this room, if any
    #[inline]
    pub fn occupant(&self) -> Option<&Identity> {
        self.occupant.as_ref()
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    // Occupancy is owned by the Hotel: set on check-in, cleared on check-out.
    pub(crate) fn set_occupant(&mut self, guest_id: Option<Identity>) {
        self.occupant = guest_id;
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.room_type == other.room_type
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
        self.room_type.hash(state);
    }
}
