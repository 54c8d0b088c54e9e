// File: src/clock.rs
// Purpose: Source of "now" for date validators

use chrono::{Local, NaiveDateTime};

/// Supplies the current local wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Inputs a validator needs besides the value itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub now: NaiveDateTime,
}

impl ValidationContext {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn from_clock<C: Clock + ?Sized>(clock: &C) -> Self {
        Self { now: clock.now() }
    }
}
