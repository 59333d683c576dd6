//! # innkeep-core
//!
//! Domain layer for the innkeep hotel reservation system: value objects,
//! entities, domain errors, and the clock/id capability traits.
//! This crate has zero dependencies on infrastructure (web, database, etc.).

pub mod clock;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use entities::{
    check_in_date_reached, Guest, Hotel, Reservation, ReservationManager, ReservationStatus, Room,
};
pub use error::DomainError;
pub use ids::{IdProvider, SequenceProvider, UuidProvider};
pub use value_objects::{Address, CreditCard, Identity, Money, Name, RoomType};
