//! Integration test utilities for the innkeep workspace
//!
//! Provides deterministic fixtures (fixed clock, sequential ids, sample
//! guests and cards) for end-to-end reservation scenarios.

pub mod fixtures;

pub use fixtures::*;
