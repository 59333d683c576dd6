//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

use crate::entities::ReservationStatus;
use crate::value_objects::Identity;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Hotel not found: {0}")]
    HotelNotFound(String),

    #[error("Room not found: {0}")]
    RoomNotFound(u32),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(Identity),

    #[error("Reservation manager not found: {0}")]
    ManagerNotFound(Identity),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Identity cannot be empty")]
    EmptyIdentity,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Invalid card number")]
    InvalidCardNumber,

    #[error("Invalid expiry date format (MM/YY)")]
    InvalidExpiryDate,

    #[error("Invalid CVV")]
    InvalidCvv,

    #[error("Room number must be positive")]
    InvalidRoomNumber,

    #[error("End date must be after start date")]
    InvalidDateRange,

    #[error("Start date cannot be in the past")]
    StartDateInPast,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Room number {0} already exists")]
    DuplicateRoom(u32),

    #[error("Hotel already exists in chain: {0}")]
    DuplicateHotel(String),

    #[error("Room {0} is not available for the requested dates")]
    RoomUnavailable(u32),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Can only check in confirmed reservations (status: {0})")]
    NotConfirmed(ReservationStatus),

    #[error("Can only check out guests that are checked in (status: {0})")]
    NotCheckedIn(ReservationStatus),

    #[error("Cannot cancel completed or already cancelled reservations (status: {0})")]
    AlreadyFinal(ReservationStatus),

    #[error("Check-in date has not arrived (stay starts {start})")]
    CheckInNotReached { start: NaiveDate },

    #[error("Reservation not managed by this manager: {0}")]
    ReservationNotManaged(Identity),

    #[error("Cannot make reservation for requested dates")]
    ReservationNotAllowed,

    #[error("Cannot cancel reservation")]
    CancellationNotAllowed,

    #[error("Cannot check in guest")]
    CheckInNotAllowed,

    #[error("Cannot check out guest")]
    CheckOutNotAllowed,
}

impl DomainError {
    /// Get an error code string for API responses and logs
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::HotelNotFound(_) => "UNKNOWN_HOTEL",
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::ManagerNotFound(_) => "UNKNOWN_MANAGER",

            // Validation
            Self::EmptyIdentity => "EMPTY_IDENTITY",
            Self::EmptyName => "EMPTY_NAME",
            Self::EmptyField(_) => "EMPTY_FIELD",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::InvalidCardNumber => "INVALID_CARD_NUMBER",
            Self::InvalidExpiryDate => "INVALID_EXPIRY_DATE",
            Self::InvalidCvv => "INVALID_CVV",
            Self::InvalidRoomNumber => "INVALID_ROOM_NUMBER",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::StartDateInPast => "START_DATE_IN_PAST",

            // Conflict
            Self::DuplicateRoom(_) => "DUPLICATE_ROOM",
            Self::DuplicateHotel(_) => "DUPLICATE_HOTEL",
            Self::RoomUnavailable(_) => "ROOM_UNAVAILABLE",

            // Business Rules
            Self::NotConfirmed(_) => "NOT_CONFIRMED",
            Self::NotCheckedIn(_) => "NOT_CHECKED_IN",
            Self::AlreadyFinal(_) => "ALREADY_FINAL",
            Self::CheckInNotReached { .. } => "CHECK_IN_NOT_REACHED",
            Self::ReservationNotManaged(_) => "RESERVATION_NOT_MANAGED",
            Self::ReservationNotAllowed => "RESERVATION_NOT_ALLOWED",
            Self::CancellationNotAllowed => "CANCELLATION_NOT_ALLOWED",
            Self::CheckInNotAllowed => "CHECK_IN_NOT_ALLOWED",
            Self::CheckOutNotAllowed => "CHECK_OUT_NOT_ALLOWED",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::HotelNotFound(_)
                | Self::RoomNotFound(_)
                | Self::ReservationNotFound(_)
                | Self::ManagerNotFound(_)
        )
    }

    /// Check if this is a validation error (malformed or missing input)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyIdentity
                | Self::EmptyName
                | Self::EmptyField(_)
                | Self::NegativeAmount
                | Self::InvalidCardNumber
                | Self::InvalidExpiryDate
                | Self::InvalidCvv
                | Self::InvalidRoomNumber
                | Self::InvalidDateRange
                | Self::StartDateInPast
        )
    }

    /// Check if this is a conflict error (well-formed request rejected by
    /// current data: duplicate keys, unavailable rooms)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRoom(_) | Self::DuplicateHotel(_) | Self::RoomUnavailable(_)
        )
    }

    /// Check if this error reports a business-invariant violation. Not-found
    /// and conflict errors are refinements of this class.
    pub fn is_invalid_state(&self) -> bool {
        !self.is_validation()
    }
}
