//! Reservation entity - a guest/room/date-range binding with a status
//! state machine
//!
//! Lifecycle: CONFIRMED -> CHECKED_IN -> CHECKED_OUT, with CANCELLED
//! reachable from CONFIRMED or CHECKED_IN only. Transitions never go
//! backwards. Room occupancy is the owning Hotel's concern, not this
//! entity's; the only side effect here is the status field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::DomainError;
use crate::ids::IdProvider;
use crate::value_objects::Identity;

/// Status of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    /// Active means the stay is still pending or in progress
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Cancelled | Self::CheckedOut)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// True once the stay's start date is today or earlier.
///
/// Shared by [`Reservation::check_in`] and the hotel-level check-in guard;
/// both layers apply it on purpose (defense in depth), but the rule lives
/// in one place.
#[inline]
pub fn check_in_date_reached(start: NaiveDate, today: NaiveDate) -> bool {
    today >= start
}

/// A reservation. Everything except `status` is immutable after creation;
/// equality is by id.
#[derive(Debug, Clone)]
pub struct Reservation {
    id: Identity,
    guest_id: Identity,
    room_number: u32,
    reserved_on: NaiveDate,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ReservationStatus,
}

impl Reservation {
    /// Create a CONFIRMED reservation stamped with today's date.
    ///
    /// Fails if the start date is in the past or the end date is not
    /// strictly after the start date.
    pub fn create(
        guest_id: Identity,
        room_number: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        today: NaiveDate,
        ids: &dyn IdProvider,
    ) -> Result<Self, DomainError> {
        if start_date < today {
            return Err(DomainError::StartDateInPast);
        }
        if end_date <= start_date {
            return Err(DomainError::InvalidDateRange);
        }
        Ok(Self {
            id: ids.next_id(),
            guest_id,
            room_number,
            reserved_on: today,
            start_date,
            end_date,
            status: ReservationStatus::Confirmed,
        })
    }

    #[inline]
    pub fn id(&self) -> &Identity {
        &self.id
    }

    #[inline]
    pub fn guest_id(&self) -> &Identity {
        &self.guest_id
    }

    #[inline]
    pub fn room_number(&self) -> u32 {
        self.room_number
    }

    #[inline]
    pub fn reserved_on(&self) -> NaiveDate {
        self.reserved_on
    }

    #[inline]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[inline]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    #[inline]
    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Whole nights between start and end; always >= 1 for a valid instance
    pub fn number_of_nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// CONFIRMED -> CHECKED_IN. Also rejects check-in before the start date.
    pub fn check_in(&mut self, today: NaiveDate) -> Result<(), DomainError> {
        if self.status != ReservationStatus::Confirmed {
            return Err(DomainError::NotConfirmed(self.status));
        }
        if !check_in_date_reached(self.start_date, today) {
            return Err(DomainError::CheckInNotReached {
                start: self.start_date,
            });
        }
        self.status = ReservationStatus::CheckedIn;
        Ok(())
    }

    /// CHECKED_IN -> CHECKED_OUT
    pub fn check_out(&mut self) -> Result<(), DomainError> {
        if self.status != ReservationStatus::CheckedIn {
            return Err(DomainError::NotCheckedIn(self.status));
        }
        self.status = ReservationStatus::CheckedOut;
        Ok(())
    }

    /// CONFIRMED or CHECKED_IN -> CANCELLED; terminal states cannot cancel
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        if matches!(
            self.status,
            ReservationStatus::CheckedOut | ReservationStatus::Cancelled
        ) {
            return Err(DomainError::AlreadyFinal(self.status));
        }
        self.status = ReservationStatus::Cancelled;
        Ok(())
    }
}

impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Reservation {}

impl Hash for Reservation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
