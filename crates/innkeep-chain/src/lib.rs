//! # innkeep-chain
//!
//! Coordination layer: [`HotelChain`] owns the hotels and reservation
//! managers of a chain and gates every mutating operation behind a public
//! "can I do this" predicate before delegating to the domain layer.

pub mod chain;

pub use chain::HotelChain;
