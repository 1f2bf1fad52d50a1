//! Chain clock interface.
//!
//! The settlement environment supplies a monotonically increasing
//! confirmation height and a wall-clock reading, and guarantees each
//! accepted operation runs to completion before the next begins. The core
//! never sleeps or schedules; "waiting" for an auction to end or an offer
//! to expire is a comparison against this signal, re-evaluated per call.

use chrono::{DateTime, Duration, Utc};

/// External clock/order-service surface consumed by the registry and
/// marketplace. Implementations must be monotonic in both readings.
pub trait ChainClock {
    /// Current confirmation height (the auction clock).
    fn height(&self) -> u64;

    /// Current wall-clock time (the purchase-expiry clock).
    fn now(&self) -> DateTime<Utc>;
}

/// Manually advanced clock for tests and embedding.
#[derive(Debug, Clone)]
pub struct SimClock {
    height: u64,
    now: DateTime<Utc>,
}

impl SimClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            height: 0,
            now: Utc::now(),
        }
    }

    /// Mine `count` blocks.
    pub fn advance_blocks(&mut self, count: u64) {
        self.height += count;
    }

    /// Advance wall-clock time.
    pub fn advance_time(&mut self, delta: Duration) {
        self.now += delta;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainClock for SimClock {
    fn height(&self) -> u64 {
        self.height
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
