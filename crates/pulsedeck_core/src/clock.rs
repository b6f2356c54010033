//! Time source abstraction.
//!
//! # Responsibility
//! - Provide "now" in Unix epoch milliseconds to transitions and views.
//! - Allow tests to simulate elapsed time without sleeping.
//!
//! # Invariants
//! - All timestamps in core are epoch milliseconds (`i64`).
//! - `ManualClock` never moves unless told to.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Epoch milliseconds.
pub type EpochMs = i64;

pub const MINUTE_MS: EpochMs = 60 * 1000;
pub const HOUR_MS: EpochMs = 60 * MINUTE_MS;
pub const DAY_MS: EpochMs = 24 * HOUR_MS;

/// Source of the current time for store and views.
pub trait Clock {
    fn now_ms(&self) -> EpochMs;
}

/// Wall clock backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> EpochMs {
        // A clock set before 1970 reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as EpochMs)
            .unwrap_or(0)
    }
}

/// Manually driven clock for simulated time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<EpochMs>,
}

impl ManualClock {
    pub fn new(start_ms: EpochMs) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Moves the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: EpochMs) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }

    pub fn advance_minutes(&self, minutes: u32) {
        self.advance(minutes_to_ms(minutes));
    }

    pub fn set(&self, now_ms: EpochMs) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> EpochMs {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> EpochMs {
        (**self).now_ms()
    }
}

/// Converts a whole-minute offset into milliseconds.
pub fn minutes_to_ms(minutes: u32) -> EpochMs {
    EpochMs::from(minutes) * MINUTE_MS
}
