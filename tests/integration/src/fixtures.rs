//! Test fixtures and data builders
//!
//! Scenarios run against a fixed calendar (2026-03-01) and sequential
//! reservation ids so assertions are reproducible.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use rust_decimal_macros::dec;

use innkeep_chain::HotelChain;
use innkeep_core::{
    Address, Clock, CreditCard, FixedClock, Guest, Hotel, Identity, Money, Name,
    ReservationManager, Room, RoomType, SequenceProvider,
};

/// The fixed "today" every scenario starts from
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

/// `today` plus a number of days
pub fn plus(days: u64) -> NaiveDate {
    today() + Days::new(days)
}

/// Nightly 150.00 "Deluxe" room type
pub fn deluxe() -> RoomType {
    RoomType::new("Deluxe", Money::new(dec!(150.00)).expect("non-negative"))
        .expect("valid room type")
}

/// Nightly 300.00 "Suite" room type
pub fn suite() -> RoomType {
    RoomType::new("Suite", Money::new(dec!(300.00)).expect("non-negative"))
        .expect("valid room type")
}

/// A guest with a stable id
pub fn guest(id: &str, name: &str) -> Guest {
    Guest::with_id(
        Identity::new(id).expect("non-empty id"),
        Name::new(name).expect("non-empty name"),
        Address::new("1 Main St", "Springfield", "12345").expect("valid address"),
    )
}

/// A valid Visa-style test card; vary the last four digits per scenario
pub fn card(last4: &str) -> CreditCard {
    CreditCard::new(format!("41111111111{last4}"), "Alice Smith", "12/27", "123")
        .expect("valid card")
}

/// Stable manager id used across scenarios
pub fn manager_id() -> Identity {
    Identity::new("mgr-1").expect("non-empty id")
}

/// A chain with one hotel ("Grand": Deluxe 101/102, Suite 201), one
/// registered manager, a fixed clock, and sequential reservation ids.
///
/// Returns the chain plus the clock handle so scenarios can advance time.
pub fn chain_with_grand_hotel() -> (HotelChain, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(today()));
    let mut chain = HotelChain::with_providers(
        "Innkeep",
        Arc::clone(&clock) as Arc<dyn Clock>,
        Arc::new(SequenceProvider::new("res")),
    )
    .expect("valid chain name");

    let mut hotel = Hotel::new(Name::new("Grand").expect("non-empty name"));
    hotel
        .add_room(Room::new(101, deluxe()).expect("valid room"))
        .expect("unique number");
    hotel
        .add_room(Room::new(102, deluxe()).expect("valid room"))
        .expect("unique number");
    hotel
        .add_room(Room::new(201, suite()).expect("valid room"))
        .expect("unique number");
    chain.add_hotel(hotel).expect("unique hotel name");

    chain.register_manager(ReservationManager::with_id(manager_id()));

    (chain, clock)
}
