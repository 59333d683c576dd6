//! Clock - injectable source of the current date
//!
//! The domain stamps reservation dates and validates check-in eligibility
//! against "today". Entity methods take the date as a plain parameter; this
//! trait exists so coordinating code can be wired with a real or fixed
//! source and stay deterministic under test.

use chrono::{NaiveDate, Utc};
use std::sync::Mutex;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation (UTC)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Fixed clock for tests; the date can be advanced explicitly
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Move the clock to a new date
    pub fn set_today(&self, today: NaiveDate) {
        *self.today.lock().unwrap() = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }
}
