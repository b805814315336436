//! Ledger Clock Adapters
//!
//! Implements the `LedgerClock` port: a manually driven clock for tests
//! and a wall-clock adapter for live use.

use crate::ports::outbound::LedgerClock;
use shared_types::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Manually driven clock.
///
/// Deadline behavior is entirely a function of this clock, so tests set or
/// advance it instead of sleeping.
pub struct ManualClock {
    current_time: AtomicU64,
}

impl ManualClock {
    /// Create a clock starting at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            current_time: AtomicU64::new(start),
        }
    }

    /// Set the current time.
    pub fn set_time(&self, time: Timestamp) {
        self.current_time.store(time, Ordering::SeqCst);
    }

    /// Advance the current time by `secs`.
    pub fn advance_time(&self, secs: u64) {
        self.current_time.fetch_add(secs, Ordering::SeqCst);
    }
}

impl LedgerClock for ManualClock {
    fn now(&self) -> Timestamp {
        self.current_time.load(Ordering::SeqCst)
    }
}

/// Wall-clock adapter, second granularity.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl LedgerClock for SystemClock {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
